//! Domain layer for logboot
//!
//! This crate contains the value objects that describe a logging
//! configuration. It has no dependencies on infrastructure or presentation
//! concerns and performs no I/O.
//!
//! # Core Concepts
//!
//! - **Severity**: ordinal level of a record (`Trace < Debug < Info < Warn < Error`)
//! - **LoggerName**: dot-separated hierarchical name; levels and formats are
//!   inherited from the nearest configured ancestor
//! - **LineFormat**: template such as `{timestamp} {level} [{name}] {message}`
//! - **LoggingSettings**: the validated, immutable description that gets installed

pub mod core;
pub mod format;
pub mod settings;

// Re-export commonly used types
pub use crate::core::{
    error::FormatError,
    logger_name::LoggerName,
    severity::{ParseSeverityError, Severity},
};
pub use format::{
    DEFAULT_TIMESTAMP_PATTERN, FALLBACK_TEMPLATE, LineFormat, LineRecord, TimestampFormat,
};
pub use settings::{
    applied::{AppliedConfiguration, SettingsOrigin},
    logging_settings::{LoggerSettings, LoggingSettings},
    output_target::OutputTarget,
};
