//! Record of the configuration that was actually installed

use super::logging_settings::LoggingSettings;
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// Where the installed settings came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "path", rename_all = "lowercase")]
pub enum SettingsOrigin {
    /// Loaded from a configuration file
    File(PathBuf),
    /// No configuration file existed; built-in defaults were used
    Fallback,
}

impl fmt::Display for SettingsOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsOrigin::File(path) => write!(f, "{}", path.display()),
            SettingsOrigin::Fallback => f.write_str("built-in fallback"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppliedConfiguration {
    pub origin: SettingsOrigin,
    pub settings: LoggingSettings,
}

impl AppliedConfiguration {
    pub fn new(origin: SettingsOrigin, settings: LoggingSettings) -> Self {
        Self { origin, settings }
    }

    pub fn is_fallback(&self) -> bool {
        self.origin == SettingsOrigin::Fallback
    }
}
