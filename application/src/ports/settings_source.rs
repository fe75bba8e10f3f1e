//! Port for reading logging settings from a configuration file.

use crate::error::ConfigurationError;
use logboot_domain::LoggingSettings;
use std::path::Path;

/// Loads and validates the configuration file at `path`.
///
/// The bootstrap only calls this for paths that exist. Implementations
/// report unparseable files as [`ConfigurationError::Malformed`] and
/// parseable-but-unusable ones as [`ConfigurationError::Invalid`].
pub trait SettingsSource: Send + Sync {
    fn load(&self, path: &Path) -> Result<LoggingSettings, ConfigurationError>;
}
