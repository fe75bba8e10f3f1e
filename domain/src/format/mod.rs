//! Rendering formats for log lines

pub mod line_format;
pub mod timestamp;

pub use line_format::{FALLBACK_TEMPLATE, LineFormat, LineRecord};
pub use timestamp::{DEFAULT_TIMESTAMP_PATTERN, TimestampFormat};
