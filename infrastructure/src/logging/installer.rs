//! [`LogInstaller`] that sets the process-wide `tracing` subscriber.

use super::subscriber::build_subscriber;
use super::writer::make_writer;
use logboot_application::{ConfigurationError, LogInstaller};
use logboot_domain::LoggingSettings;
use std::sync::Arc;
use tracing_subscriber::util::SubscriberInitExt;

pub struct TracingInstaller;

impl LogInstaller for TracingInstaller {
    fn install(&self, settings: &LoggingSettings) -> Result<(), ConfigurationError> {
        let writer = make_writer(&settings.output)?;
        build_subscriber(Arc::new(settings.clone()), writer)
            .try_init()
            .map_err(|e| ConfigurationError::Install {
                reason: e.to_string(),
            })
    }
}
