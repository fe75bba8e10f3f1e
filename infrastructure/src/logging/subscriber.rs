//! Subscriber assembly: filter, formatter and writer.

use super::formatter::{LineFormatter, level_of, severity_of};
use logboot_application::HANDLE_TARGET;
use logboot_domain::{LoggerName, LoggingSettings};
use std::sync::Arc;
use tracing::{Metadata, Subscriber};
use tracing_subscriber::Layer;
use tracing_subscriber::filter::{FilterFn, LevelFilter, filter_fn};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;

/// Per-logger level filter.
///
/// Events emitted through a `Logger` handle were already checked against the
/// handle's level. They pass at any level down to the most verbose configured
/// level, which is also the max level hint. Any other event is checked against
/// the effective level of its target, read as a logger name (`a::b` is `a.b`).
pub fn severity_filter(
    settings: Arc<LoggingSettings>,
) -> FilterFn<impl Fn(&Metadata<'_>) -> bool + Send + Sync + 'static> {
    let min_level = settings.most_verbose();
    let max_level = LevelFilter::from_level(level_of(min_level));
    filter_fn(move |metadata| {
        if metadata.target() == HANDLE_TARGET {
            // Never enable past the hint: tracing-core asserts on it.
            return severity_of(metadata.level()) >= min_level;
        }
        let name = LoggerName::from_target(metadata.target());
        severity_of(metadata.level()) >= settings.effective_level(&name)
    })
    .with_max_level_hint(max_level)
}

/// Build a subscriber rendering through `settings` into `writer`.
pub fn build_subscriber<W>(
    settings: Arc<LoggingSettings>,
    writer: W,
) -> impl Subscriber + Send + Sync + 'static
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_writer(writer)
        .event_format(LineFormatter::new(Arc::clone(&settings)))
        .with_filter(severity_filter(settings));

    tracing_subscriber::registry().with(layer)
}
