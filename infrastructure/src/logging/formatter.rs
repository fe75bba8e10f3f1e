//! `tracing` event formatter driven by [`LoggingSettings`].

use chrono::Local;
use logboot_application::LOGGER_FIELD;
use logboot_domain::{LineRecord, LoggerName, LoggingSettings, Severity};
use std::fmt::{self, Write as _};
use std::sync::Arc;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;

pub(crate) fn severity_of(level: &Level) -> Severity {
    match *level {
        Level::ERROR => Severity::Error,
        Level::WARN => Severity::Warn,
        Level::INFO => Severity::Info,
        Level::DEBUG => Severity::Debug,
        _ => Severity::Trace,
    }
}

pub(crate) fn level_of(severity: Severity) -> Level {
    match severity {
        Severity::Trace => Level::TRACE,
        Severity::Debug => Level::DEBUG,
        Severity::Info => Level::INFO,
        Severity::Warn => Level::WARN,
        Severity::Error => Level::ERROR,
    }
}

/// Splits an event's fields into message, logger name and the rest.
#[derive(Default)]
struct FieldCollector {
    message: String,
    logger: Option<String>,
    rest: String,
}

impl FieldCollector {
    fn push_field(&mut self, name: &str, value: fmt::Arguments<'_>) {
        if !self.rest.is_empty() {
            self.rest.push(' ');
        }
        let _ = write!(self.rest, "{name}={value}");
    }
}

impl Visit for FieldCollector {
    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "message" => self.message.push_str(value),
            LOGGER_FIELD => self.logger = Some(value.to_string()),
            name => self.push_field(name, format_args!("{value}")),
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        match field.name() {
            "message" => {
                let _ = write!(self.message, "{value:?}");
            }
            LOGGER_FIELD => self.logger = Some(format!("{value:?}")),
            name => self.push_field(name, format_args!("{value:?}")),
        }
    }
}

/// Renders each event through the effective [`LineFormat`](logboot_domain::LineFormat)
/// of its logger.
///
/// The logger name is taken from the `logger` field when present (events
/// emitted through a `Logger` handle) and from the event target otherwise.
pub struct LineFormatter {
    settings: Arc<LoggingSettings>,
}

impl LineFormatter {
    pub fn new(settings: Arc<LoggingSettings>) -> Self {
        Self { settings }
    }
}

impl<S, N> FormatEvent<S, N> for LineFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let mut fields = FieldCollector::default();
        event.record(&mut fields);

        let metadata = event.metadata();
        let name = match fields.logger.take() {
            Some(logger) => LoggerName::new(logger),
            None => LoggerName::from_target(metadata.target()),
        };

        let format = self.settings.effective_format(&name);
        let timestamp = if format.uses_timestamp() {
            self.settings.timestamp.format(&Local::now())
        } else {
            String::new()
        };

        let line = format.render(&LineRecord {
            timestamp: &timestamp,
            level: severity_of(metadata.level()),
            name: name.as_str(),
            message: &fields.message,
            fields: &fields.rest,
        });
        writeln!(writer, "{line}")
    }
}
