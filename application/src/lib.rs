//! Application layer for logboot
//!
//! This crate contains the bootstrap use case, the logger handle, and the
//! port definitions that infrastructure adapters implement.
//! It depends only on the domain layer.

pub mod error;
pub mod logger;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use error::ConfigurationError;
pub use logger::{HANDLE_TARGET, LOGGER_FIELD, Logger};
pub use ports::{
    log_installer::{LogInstaller, NoopInstaller},
    settings_source::SettingsSource,
};
pub use use_cases::bootstrap::LoggingBootstrap;
