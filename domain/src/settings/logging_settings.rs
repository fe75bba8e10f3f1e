//! Effective logging settings
//!
//! [`LoggingSettings`] is the fully validated description of how records are
//! filtered and rendered. It is built either from a configuration file or
//! from [`LoggingSettings::fallback`], and never changes once installed.

use super::output_target::OutputTarget;
use crate::core::logger_name::LoggerName;
use crate::core::severity::Severity;
use crate::format::{LineFormat, TimestampFormat};
use serde::Serialize;
use std::collections::BTreeMap;

/// Per-logger overrides. Unset values are inherited from the parent logger.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoggerSettings {
    pub level: Option<Severity>,
    pub format: Option<LineFormat>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoggingSettings {
    /// Minimum level for loggers without an override
    pub root_level: Severity,
    /// Line format for loggers without an override
    pub format: LineFormat,
    pub timestamp: TimestampFormat,
    pub output: OutputTarget,
    pub loggers: BTreeMap<LoggerName, LoggerSettings>,
}

impl LoggingSettings {
    /// Informational level, fallback line format, stderr.
    pub fn fallback() -> Self {
        Self {
            root_level: Severity::Info,
            format: LineFormat::fallback(),
            timestamp: TimestampFormat::default(),
            output: OutputTarget::Stderr,
            loggers: BTreeMap::new(),
        }
    }

    pub fn with_logger(mut self, name: impl Into<LoggerName>, settings: LoggerSettings) -> Self {
        self.loggers.insert(name.into(), settings);
        self
    }

    /// Level of the nearest configured ancestor, or the root level.
    pub fn effective_level(&self, name: &LoggerName) -> Severity {
        name.ancestors()
            .find_map(|n| self.loggers.get(&n).and_then(|s| s.level))
            .unwrap_or(self.root_level)
    }

    /// Format of the nearest configured ancestor, or the root format.
    pub fn effective_format(&self, name: &LoggerName) -> &LineFormat {
        for ancestor in name.ancestors() {
            if let Some(format) = self.loggers.get(&ancestor).and_then(|s| s.format.as_ref()) {
                return format;
            }
        }
        &self.format
    }

    /// Most verbose level any logger can emit at.
    pub fn most_verbose(&self) -> Severity {
        self.loggers
            .values()
            .filter_map(|s| s.level)
            .fold(self.root_level, Severity::min)
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self::fallback()
    }
}
