//! Named logger handles
//!
//! A [`Logger`] is handed out by
//! [`LoggingBootstrap::get_logger`](crate::LoggingBootstrap::get_logger).
//! It resolves its effective level once, from the installed settings, and
//! drops records below that level before they reach `tracing`. Records that
//! pass are emitted as `tracing` events with target [`HANDLE_TARGET`] and a
//! `logger` field carrying the handle's name.

use logboot_domain::{AppliedConfiguration, LoggerName, Severity};
use std::fmt;
use std::sync::Arc;
use tracing::Level;

/// `tracing` target used for every event emitted through a [`Logger`].
pub const HANDLE_TARGET: &str = "logboot::handle";

/// Field carrying the logger name on events emitted through a [`Logger`].
pub const LOGGER_FIELD: &str = "logger";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Logger {
    name: LoggerName,
    level: Severity,
    applied: Arc<AppliedConfiguration>,
}

impl Logger {
    pub(crate) fn new(name: LoggerName, applied: Arc<AppliedConfiguration>) -> Self {
        let level = applied.settings.effective_level(&name);
        Self {
            name,
            level,
            applied,
        }
    }

    pub fn name(&self) -> &LoggerName {
        &self.name
    }

    /// Effective minimum level.
    pub fn level(&self) -> Severity {
        self.level
    }

    /// The configuration this handle was resolved against.
    pub fn configuration(&self) -> &AppliedConfiguration {
        &self.applied
    }

    pub fn enabled(&self, severity: Severity) -> bool {
        severity >= self.level
    }

    /// Handle for `<name>.<suffix>` under the same configuration.
    pub fn child(&self, suffix: &str) -> Logger {
        Logger::new(self.name.child(suffix), Arc::clone(&self.applied))
    }

    pub fn log(&self, severity: Severity, message: impl fmt::Display) {
        if !self.enabled(severity) {
            return;
        }

        let logger = self.name.as_str();
        match severity {
            Severity::Trace => {
                tracing::event!(target: HANDLE_TARGET, Level::TRACE, logger, "{message}")
            }
            Severity::Debug => {
                tracing::event!(target: HANDLE_TARGET, Level::DEBUG, logger, "{message}")
            }
            Severity::Info => {
                tracing::event!(target: HANDLE_TARGET, Level::INFO, logger, "{message}")
            }
            Severity::Warn => {
                tracing::event!(target: HANDLE_TARGET, Level::WARN, logger, "{message}")
            }
            Severity::Error => {
                tracing::event!(target: HANDLE_TARGET, Level::ERROR, logger, "{message}")
            }
        }
    }

    pub fn trace(&self, message: impl fmt::Display) {
        self.log(Severity::Trace, message);
    }

    pub fn debug(&self, message: impl fmt::Display) {
        self.log(Severity::Debug, message);
    }

    pub fn info(&self, message: impl fmt::Display) {
        self.log(Severity::Info, message);
    }

    pub fn warn(&self, message: impl fmt::Display) {
        self.log(Severity::Warn, message);
    }

    pub fn error(&self, message: impl fmt::Display) {
        self.log(Severity::Error, message);
    }
}
