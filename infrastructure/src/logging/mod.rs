//! Logging infrastructure: the `tracing` side of the bootstrap.
//!
//! Provides [`TracingInstaller`], which implements the
//! [`LogInstaller`](logboot_application::LogInstaller) port by building a
//! `tracing-subscriber` registry with a [`LineFormatter`], a per-logger
//! level filter and the configured writer.

mod formatter;
mod installer;
mod subscriber;
mod writer;

pub use formatter::LineFormatter;
pub use installer::TracingInstaller;
pub use subscriber::{build_subscriber, severity_filter};
pub use writer::make_writer;
