//! Output writers for the configured [`OutputTarget`].

use logboot_application::ConfigurationError;
use logboot_domain::OutputTarget;
use std::path::Path;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::writer::BoxMakeWriter;

/// Build the writer for `target`.
///
/// File targets are opened in append mode and never rotated. Missing parent
/// directories are created.
pub fn make_writer(target: &OutputTarget) -> Result<BoxMakeWriter, ConfigurationError> {
    match target {
        OutputTarget::Stderr => Ok(BoxMakeWriter::new(std::io::stderr)),
        OutputTarget::Stdout => Ok(BoxMakeWriter::new(std::io::stdout)),
        OutputTarget::File { path } => {
            let output_error = |reason: String| ConfigurationError::Output {
                path: path.clone(),
                reason,
            };

            let file_name = path
                .file_name()
                .ok_or_else(|| output_error("path has no file name".to_string()))?;
            let directory = match path.parent() {
                Some(parent) if !parent.as_os_str().is_empty() => parent,
                _ => Path::new("."),
            };
            std::fs::create_dir_all(directory).map_err(|e| output_error(e.to_string()))?;

            let appender = RollingFileAppender::builder()
                .rotation(Rotation::NEVER)
                .filename_prefix(file_name.to_string_lossy())
                .build(directory)
                .map_err(|e| output_error(e.to_string()))?;
            Ok(BoxMakeWriter::new(appender))
        }
    }
}
