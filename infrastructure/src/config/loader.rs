//! Configuration file loader

use super::file_config::FileLoggingConfig;
use figment::{
    Figment,
    providers::{Format, Serialized, Toml},
};
use logboot_application::{ConfigurationError, SettingsSource};
use logboot_domain::LoggingSettings;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Default configuration path, relative to the project root.
pub const DEFAULT_CONFIG_PATH: &str = "config/logging.toml";

/// Environment variable overriding the default configuration path.
pub const CONFIG_PATH_ENV: &str = "LOGBOOT_CONFIG";

/// Configuration loader that handles file discovery and parsing
pub struct ConfigLoader;

impl ConfigLoader {
    /// Parse a configuration file, merged over the built-in defaults.
    ///
    /// The path is used as given; parent directories are not searched.
    pub fn load(path: &Path) -> Result<FileLoggingConfig, Box<figment::Error>> {
        Figment::new()
            .merge(Serialized::defaults(FileLoggingConfig::default()))
            .merge(Toml::file_exact(path))
            .extract()
            .map_err(Box::new)
    }

    /// Default configuration path for this process.
    ///
    /// `$LOGBOOT_CONFIG` if set, otherwise `./config/logging.toml` under the
    /// current directory. Resolve this once at startup.
    pub fn default_config_path() -> PathBuf {
        let project_root = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self::resolve_default_path(std::env::var_os(CONFIG_PATH_ENV), &project_root)
    }

    /// Pure form of [`default_config_path`](Self::default_config_path).
    pub fn resolve_default_path(env_value: Option<OsString>, project_root: &Path) -> PathBuf {
        match env_value {
            Some(value) if !value.is_empty() => PathBuf::from(value),
            _ => project_root.join(DEFAULT_CONFIG_PATH),
        }
    }
}

/// [`SettingsSource`] backed by TOML files.
pub struct TomlSettingsSource;

impl SettingsSource for TomlSettingsSource {
    fn load(&self, path: &Path) -> Result<LoggingSettings, ConfigurationError> {
        let config = ConfigLoader::load(path).map_err(|e| ConfigurationError::Malformed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        config.to_settings(path)
    }
}
