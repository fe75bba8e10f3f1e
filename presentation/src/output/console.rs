//! Console output for `--show-config`

use colored::Colorize;
use logboot_domain::{AppliedConfiguration, SettingsOrigin};
use std::path::Path;

/// Formats resolved logging configuration for console display
pub struct SettingsFormatter;

impl SettingsFormatter {
    /// Configuration sources in priority order, marking the one in use.
    pub fn format_sources(
        applied: &AppliedConfiguration,
        explicit: Option<&Path>,
        default_path: &Path,
    ) -> String {
        let mut output = format!(
            "{}\n",
            "Configuration sources (in priority order):".cyan().bold()
        );

        let used = match &applied.origin {
            SettingsOrigin::File(path) => Some(path.as_path()),
            SettingsOrigin::Fallback => None,
        };
        let marker = |path: &Path| {
            if used == Some(path) {
                "[USED ]".green().bold().to_string()
            } else if path.exists() {
                "[FOUND]".yellow().to_string()
            } else {
                "[     ]".dimmed().to_string()
            }
        };

        if let Some(path) = explicit {
            output.push_str(&format!("  {} Explicit: {}\n", marker(path), path.display()));
        }
        output.push_str(&format!(
            "  {} Default:  {}\n",
            marker(default_path),
            default_path.display()
        ));

        let fallback = if applied.is_fallback() {
            "[USED ]".green().bold().to_string()
        } else {
            "[     ]".dimmed().to_string()
        };
        output.push_str(&format!("  {} Fallback: built-in defaults\n", fallback));

        output
    }

    /// Effective settings as readable text.
    pub fn format_settings(applied: &AppliedConfiguration) -> String {
        let settings = &applied.settings;
        let mut output = format!("{}\n", "Effective settings:".cyan().bold());

        output.push_str(&format!("  source:    {}\n", applied.origin));
        output.push_str(&format!("  level:     {}\n", settings.root_level));
        output.push_str(&format!("  format:    {}\n", settings.format));
        output.push_str(&format!("  timestamp: {}\n", settings.timestamp));
        output.push_str(&format!("  output:    {}\n", settings.output));

        if !settings.loggers.is_empty() {
            output.push_str(&format!("{}\n", "Loggers:".cyan().bold()));
            for (name, logger) in &settings.loggers {
                output.push_str(&format!("  {}", name.to_string().yellow()));
                if let Some(level) = logger.level {
                    output.push_str(&format!(" level={}", level));
                }
                if let Some(format) = &logger.format {
                    output.push_str(&format!(" format=\"{}\"", format));
                }
                output.push('\n');
            }
        }

        output
    }

    pub fn format_json(applied: &AppliedConfiguration) -> String {
        serde_json::to_string_pretty(applied)
            .unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use logboot_domain::{LineFormat, LoggerSettings, LoggingSettings, Severity};
    use std::path::PathBuf;

    fn applied_from_file(path: &Path) -> AppliedConfiguration {
        let settings = LoggingSettings::fallback().with_logger(
            "module.a",
            LoggerSettings {
                level: Some(Severity::Debug),
                format: Some(LineFormat::parse("{level} {message}").unwrap()),
            },
        );
        AppliedConfiguration::new(SettingsOrigin::File(path.to_path_buf()), settings)
    }

    #[test]
    fn test_format_settings_lists_loggers() {
        colored::control::set_override(false);
        let output =
            SettingsFormatter::format_settings(&applied_from_file(Path::new("logging.toml")));

        assert!(output.contains("source:    logging.toml"));
        assert!(output.contains("level:     INFO"));
        assert!(output.contains("format:    {timestamp} {level} [{name}] {message}"));
        assert!(output.contains("output:    stderr"));
        assert!(output.contains("module.a level=DEBUG format=\"{level} {message}\""));
    }

    #[test]
    fn test_format_sources_marks_fallback() {
        colored::control::set_override(false);
        let applied =
            AppliedConfiguration::new(SettingsOrigin::Fallback, LoggingSettings::fallback());
        let output = SettingsFormatter::format_sources(
            &applied,
            None,
            &PathBuf::from("/nonexistent/config/logging.toml"),
        );

        assert!(output.contains("[     ] Default:  /nonexistent/config/logging.toml"));
        assert!(output.contains("[USED ] Fallback"));
        assert!(!output.contains("Explicit"));
    }

    #[test]
    fn test_format_sources_marks_explicit_file() {
        colored::control::set_override(false);
        let dir = std::env::temp_dir();
        let explicit = dir.join("logboot-explicit.toml");
        let applied = applied_from_file(&explicit);
        let output = SettingsFormatter::format_sources(
            &applied,
            Some(&explicit),
            Path::new("/nonexistent/config/logging.toml"),
        );

        assert!(output.contains(&format!("[USED ] Explicit: {}", explicit.display())));
        assert!(output.contains("[     ] Fallback"));
    }

    #[test]
    fn test_format_json() {
        let output =
            SettingsFormatter::format_json(&applied_from_file(Path::new("logging.toml")));
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["origin"]["kind"], "file");
        assert_eq!(value["origin"]["path"], "logging.toml");
        assert_eq!(value["settings"]["root_level"], "info");
        assert_eq!(value["settings"]["loggers"]["module.a"]["level"], "debug");
        assert_eq!(value["settings"]["output"]["target"], "stderr");
    }
}
