//! Infrastructure layer for logboot
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer: TOML configuration loading and the
//! `tracing` subscriber installer.

pub mod bootstrap;
pub mod config;
pub mod logging;

// Re-export commonly used types
pub use bootstrap::default_bootstrap;
pub use config::{
    CONFIG_PATH_ENV, ConfigLoader, DEFAULT_CONFIG_PATH, FileLoggingConfig, TomlSettingsSource,
};
pub use logging::{LineFormatter, TracingInstaller, build_subscriber};
