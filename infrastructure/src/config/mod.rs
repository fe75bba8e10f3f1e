//! Configuration file loading for logboot
//!
//! The configuration file is resolved in this order:
//!
//! 1. Explicit path passed to `configure`
//! 2. `$LOGBOOT_CONFIG`
//! 3. `./config/logging.toml`
//!
//! A missing file is not an error; the bootstrap falls back to built-in
//! defaults.

mod file_config;
mod loader;

pub use file_config::{
    FileFormatConfig, FileLoggerConfig, FileLoggingConfig, FileOutputConfig, FileOutputKind,
    FileRootConfig,
};
pub use loader::{CONFIG_PATH_ENV, ConfigLoader, DEFAULT_CONFIG_PATH, TomlSettingsSource};
