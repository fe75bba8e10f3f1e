//! Configuration error type shared by the bootstrap and its ports

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading or applying a logging configuration.
///
/// A missing configuration file is not an error: the bootstrap applies the
/// fallback settings instead. Every variant that involves a file names it.
#[derive(Error, Debug)]
pub enum ConfigurationError {
    /// The configuration file exists but could not be parsed.
    #[error("malformed logging configuration {path}: {reason}", path = .path.display())]
    Malformed { path: PathBuf, reason: String },

    /// The configuration file parsed but describes an unusable configuration
    /// (bad line template, bad timestamp pattern, missing output path).
    #[error("invalid logging configuration {path}: {reason}", path = .path.display())]
    Invalid { path: PathBuf, reason: String },

    /// The configured log destination could not be opened.
    #[error("cannot open log output {path}: {reason}", path = .path.display())]
    Output { path: PathBuf, reason: String },

    /// The process-wide subscriber could not be installed.
    #[error("cannot install logging subscriber: {reason}")]
    Install { reason: String },
}

impl ConfigurationError {
    /// The file this error refers to, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            ConfigurationError::Malformed { path, .. }
            | ConfigurationError::Invalid { path, .. }
            | ConfigurationError::Output { path, .. } => Some(path),
            ConfigurationError::Install { .. } => None,
        }
    }
}
