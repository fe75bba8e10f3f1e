//! Default wiring of the bootstrap ports.

use crate::config::{ConfigLoader, TomlSettingsSource};
use crate::logging::TracingInstaller;
use logboot_application::LoggingBootstrap;
use std::sync::Arc;

/// Bootstrap reading TOML from the default path and installing a global
/// `tracing` subscriber.
///
/// The default path is resolved here, once. Create one instance at process
/// start and pass it to the code that needs loggers.
pub fn default_bootstrap() -> LoggingBootstrap {
    LoggingBootstrap::new(
        ConfigLoader::default_config_path(),
        Arc::new(TomlSettingsSource),
        Arc::new(TracingInstaller),
    )
}
