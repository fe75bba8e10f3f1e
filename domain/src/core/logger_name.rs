//! Hierarchical logger names

use serde::{Deserialize, Serialize};
use std::fmt;

/// Dot-separated logger name such as `module.a`.
///
/// Names form a hierarchy: `app.db.pool` is a child of `app.db`, which is a
/// child of `app`. The empty name and `root` both address the root logger.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct LoggerName(String);

impl LoggerName {
    pub const ROOT: &'static str = "root";

    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let trimmed = name.trim().trim_matches('.');
        if trimmed.is_empty() || trimmed == Self::ROOT {
            Self(Self::ROOT.to_string())
        } else {
            Self(trimmed.to_string())
        }
    }

    pub fn root() -> Self {
        Self(Self::ROOT.to_string())
    }

    /// Build a logger name from a `tracing` target (`a::b` becomes `a.b`).
    pub fn from_target(target: &str) -> Self {
        Self::new(target.replace("::", "."))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0 == Self::ROOT
    }

    /// Parent in the hierarchy, or `None` for top-level names and the root.
    pub fn parent(&self) -> Option<LoggerName> {
        if self.is_root() {
            return None;
        }
        self.0
            .rsplit_once('.')
            .map(|(parent, _)| LoggerName(parent.to_string()))
    }

    /// This name followed by each of its parents. The root is never yielded.
    pub fn ancestors(&self) -> impl Iterator<Item = LoggerName> {
        let first = (!self.is_root()).then(|| self.clone());
        std::iter::successors(first, LoggerName::parent)
    }

    pub fn child(&self, suffix: &str) -> LoggerName {
        if self.is_root() {
            LoggerName::new(suffix)
        } else {
            LoggerName::new(format!("{}.{}", self.0, suffix))
        }
    }
}

impl fmt::Display for LoggerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for LoggerName {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for LoggerName {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<LoggerName> for String {
    fn from(name: LoggerName) -> Self {
        name.0
    }
}
