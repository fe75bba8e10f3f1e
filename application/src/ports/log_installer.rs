//! Port for applying settings to the process-wide logging facility.

use crate::error::ConfigurationError;
use logboot_domain::LoggingSettings;

/// Installs `settings` into the underlying logging facility.
///
/// Called at most once per [`LoggingBootstrap`](crate::LoggingBootstrap).
/// A failed install must leave the facility untouched so the bootstrap can
/// retry later.
pub trait LogInstaller: Send + Sync {
    fn install(&self, settings: &LoggingSettings) -> Result<(), ConfigurationError>;
}

/// Installer that applies nothing. Used by `--check` style dry runs and tests.
pub struct NoopInstaller;

impl LogInstaller for NoopInstaller {
    fn install(&self, _settings: &LoggingSettings) -> Result<(), ConfigurationError> {
        Ok(())
    }
}
