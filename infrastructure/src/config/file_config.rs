//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the logging config file.
//! They are deserialized directly and converted into validated
//! [`LoggingSettings`] by [`FileLoggingConfig::to_settings`].
//!
//! ```toml
//! [root]
//! level = "info"
//!
//! [format]
//! template = "{timestamp} {level} [{name}] {message}"
//! timestamp = "%Y-%m-%d %H:%M:%S,%3f"
//!
//! [output]
//! target = "file"
//! path = "logs/app.log"
//!
//! [loggers."module.a"]
//! level = "debug"
//! format = "{level} {name}: {message}"
//! ```

use logboot_application::ConfigurationError;
use logboot_domain::{
    DEFAULT_TIMESTAMP_PATTERN, FALLBACK_TEMPLATE, LineFormat, LoggerName, LoggerSettings,
    LoggingSettings, OutputTarget, Severity, TimestampFormat,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileLoggingConfig {
    /// Root logger settings
    pub root: FileRootConfig,
    /// Default line format
    pub format: FileFormatConfig,
    /// Output destination
    pub output: FileOutputConfig,
    /// Per-logger overrides, keyed by dotted logger name
    pub loggers: BTreeMap<String, FileLoggerConfig>,
}

/// `[root]` section
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileRootConfig {
    pub level: Severity,
}

/// `[format]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileFormatConfig {
    /// Line template (see `logboot_domain::format::line_format`)
    pub template: String,
    /// chrono strftime pattern for `{timestamp}`
    pub timestamp: String,
}

impl Default for FileFormatConfig {
    fn default() -> Self {
        Self {
            template: FALLBACK_TEMPLATE.to_string(),
            timestamp: DEFAULT_TIMESTAMP_PATTERN.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileOutputKind {
    #[default]
    Stderr,
    Stdout,
    File,
}

/// `[output]` section
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileOutputConfig {
    pub target: FileOutputKind,
    /// Log file path; required when `target = "file"`
    pub path: Option<PathBuf>,
}

/// `[loggers."<name>"]` section
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileLoggerConfig {
    pub level: Option<Severity>,
    pub format: Option<String>,
}

impl FileLoggingConfig {
    /// Validate and convert into domain settings.
    ///
    /// `path` is the file this configuration was read from; it is only used
    /// to name the file in errors.
    pub fn to_settings(&self, path: &Path) -> Result<LoggingSettings, ConfigurationError> {
        let invalid = |reason: String| ConfigurationError::Invalid {
            path: path.to_path_buf(),
            reason,
        };

        let format = LineFormat::parse(&self.format.template)
            .map_err(|e| invalid(format!("format.template: {e}")))?;
        let timestamp = TimestampFormat::parse(&self.format.timestamp)
            .map_err(|e| invalid(format!("format.timestamp: {e}")))?;

        let output = match self.output.target {
            FileOutputKind::Stderr => OutputTarget::Stderr,
            FileOutputKind::Stdout => OutputTarget::Stdout,
            FileOutputKind::File => match &self.output.path {
                Some(file) => OutputTarget::File { path: file.clone() },
                None => {
                    return Err(invalid(
                        "output.path is required when output.target = \"file\"".to_string(),
                    ));
                }
            },
        };

        let mut loggers = BTreeMap::new();
        for (name, logger) in &self.loggers {
            let logger_name = LoggerName::new(name.as_str());
            if logger_name.is_root() {
                return Err(invalid(format!(
                    "loggers.\"{name}\": configure the root logger in the [root] section"
                )));
            }
            let format = logger
                .format
                .as_deref()
                .map(LineFormat::parse)
                .transpose()
                .map_err(|e| invalid(format!("loggers.\"{name}\".format: {e}")))?;
            loggers.insert(
                logger_name,
                LoggerSettings {
                    level: logger.level,
                    format,
                },
            );
        }

        Ok(LoggingSettings {
            root_level: self.root.level,
            format,
            timestamp,
            output,
            loggers,
        })
    }
}
