//! Domain error types

use thiserror::Error;

/// Errors raised while validating line templates and timestamp patterns
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("unknown placeholder '{{{name}}}' at byte {position}")]
    UnknownPlaceholder { name: String, position: usize },

    #[error("unclosed '{{' at byte {position}")]
    UnclosedPlaceholder { position: usize },

    #[error("unmatched '}}' at byte {position} (use '}}}}' for a literal brace)")]
    UnmatchedBrace { position: usize },

    #[error("invalid timestamp pattern '{0}'")]
    InvalidTimestamp(String),
}
