//! Output target value object

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// The single destination log lines are written to.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "target", rename_all = "lowercase")]
pub enum OutputTarget {
    #[default]
    Stderr,
    Stdout,
    /// Append to a file. The file is never rotated.
    File { path: PathBuf },
}

impl fmt::Display for OutputTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputTarget::Stderr => f.write_str("stderr"),
            OutputTarget::Stdout => f.write_str("stdout"),
            OutputTarget::File { path } => write!(f, "file:{}", path.display()),
        }
    }
}
