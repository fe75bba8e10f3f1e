//! Logging bootstrap use case
//!
//! [`LoggingBootstrap`] applies a logging configuration exactly once and hands
//! out named [`Logger`] handles.
//!
//! # Resolution
//!
//! 1. An explicit path passed to [`configure`](LoggingBootstrap::configure)
//! 2. The default path the bootstrap was constructed with
//!
//! If the resolved file exists it is loaded through the [`SettingsSource`]
//! port; otherwise [`LoggingSettings::fallback`] is used. Either way the
//! result is applied through the [`LogInstaller`] port.
//!
//! # State
//!
//! The bootstrap starts unconfigured and becomes configured after the first
//! successful install. It never goes back. A failed attempt (malformed file,
//! failed install) leaves it unconfigured, so a corrected file can be picked
//! up by the next call.
//!
//! ```ignore
//! use logboot_application::LoggingBootstrap;
//!
//! let bootstrap = LoggingBootstrap::new("config/logging.toml", source, installer);
//! let logger = bootstrap.get_logger("module.a")?;
//! logger.info("started");
//! ```

use crate::error::ConfigurationError;
use crate::logger::Logger;
use crate::ports::log_installer::LogInstaller;
use crate::ports::settings_source::SettingsSource;
use logboot_domain::{AppliedConfiguration, LoggerName, LoggingSettings, SettingsOrigin};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, warn};

pub struct LoggingBootstrap {
    default_path: PathBuf,
    source: Arc<dyn SettingsSource>,
    installer: Arc<dyn LogInstaller>,
    state: Mutex<Option<Arc<AppliedConfiguration>>>,
}

impl LoggingBootstrap {
    pub fn new(
        default_path: impl Into<PathBuf>,
        source: Arc<dyn SettingsSource>,
        installer: Arc<dyn LogInstaller>,
    ) -> Self {
        Self {
            default_path: default_path.into(),
            source,
            installer,
            state: Mutex::new(None),
        }
    }

    /// Path used when `configure` is called without an explicit one.
    pub fn default_path(&self) -> &Path {
        &self.default_path
    }

    pub fn is_configured(&self) -> bool {
        self.lock_state().is_some()
    }

    /// The installed configuration, if any.
    pub fn applied(&self) -> Option<Arc<AppliedConfiguration>> {
        self.lock_state().clone()
    }

    /// Resolve and load settings without installing anything.
    pub fn resolve(
        &self,
        config_path: Option<&Path>,
    ) -> Result<AppliedConfiguration, ConfigurationError> {
        let path = config_path.unwrap_or(&self.default_path);
        if path.exists() {
            let settings = self.source.load(path)?;
            Ok(AppliedConfiguration::new(
                SettingsOrigin::File(path.to_path_buf()),
                settings,
            ))
        } else {
            Ok(AppliedConfiguration::new(
                SettingsOrigin::Fallback,
                LoggingSettings::fallback(),
            ))
        }
    }

    /// Apply the logging configuration once.
    ///
    /// Later calls return the already installed configuration and ignore
    /// `config_path`. The lock is held for the whole attempt, so concurrent
    /// first callers wait for the winner instead of configuring twice.
    pub fn configure(
        &self,
        config_path: Option<&Path>,
    ) -> Result<Arc<AppliedConfiguration>, ConfigurationError> {
        let mut state = self.lock_state();
        if let Some(applied) = state.as_ref() {
            return Ok(Arc::clone(applied));
        }

        let applied = self.resolve(config_path)?;
        if let Err(e) = self.installer.install(&applied.settings) {
            warn!(
                "Logging configuration from {} was not installed: {}",
                applied.origin, e
            );
            return Err(e);
        }

        let applied = Arc::new(applied);
        *state = Some(Arc::clone(&applied));
        drop(state);

        debug!(
            origin = %applied.origin,
            level = %applied.settings.root_level,
            output = %applied.settings.output,
            "logging configured"
        );
        Ok(applied)
    }

    /// Handle for `name`, configuring with the default path first if needed.
    pub fn get_logger(&self, name: &str) -> Result<Logger, ConfigurationError> {
        let applied = self.configure(None)?;
        Ok(Logger::new(LoggerName::new(name), applied))
    }

    fn lock_state(&self) -> MutexGuard<'_, Option<Arc<AppliedConfiguration>>> {
        // Only written after a successful install; a poisoned guard is still consistent.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use logboot_domain::{LoggerSettings, Severity};
    use std::sync::Barrier;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::thread;

    /// Source returning a scripted result and recording the paths it was asked for.
    struct ScriptedSource {
        result: Mutex<Result<LoggingSettings, String>>,
        loaded: Mutex<Vec<PathBuf>>,
    }

    impl ScriptedSource {
        fn ok(settings: LoggingSettings) -> Arc<Self> {
            Arc::new(Self {
                result: Mutex::new(Ok(settings)),
                loaded: Mutex::new(Vec::new()),
            })
        }

        fn malformed(reason: &str) -> Arc<Self> {
            Arc::new(Self {
                result: Mutex::new(Err(reason.to_string())),
                loaded: Mutex::new(Vec::new()),
            })
        }

        fn set(&self, result: Result<LoggingSettings, String>) {
            *self.result.lock().unwrap() = result;
        }

        fn loaded(&self) -> Vec<PathBuf> {
            self.loaded.lock().unwrap().clone()
        }
    }

    impl SettingsSource for ScriptedSource {
        fn load(&self, path: &Path) -> Result<LoggingSettings, ConfigurationError> {
            self.loaded.lock().unwrap().push(path.to_path_buf());
            self.result
                .lock()
                .unwrap()
                .clone()
                .map_err(|reason| ConfigurationError::Malformed {
                    path: path.to_path_buf(),
                    reason,
                })
        }
    }

    #[derive(Default)]
    struct CountingInstaller {
        installs: AtomicUsize,
        fail: Mutex<bool>,
        last: Mutex<Option<LoggingSettings>>,
    }

    impl CountingInstaller {
        fn installs(&self) -> usize {
            self.installs.load(Ordering::SeqCst)
        }
    }

    impl LogInstaller for CountingInstaller {
        fn install(&self, settings: &LoggingSettings) -> Result<(), ConfigurationError> {
            if *self.fail.lock().unwrap() {
                return Err(ConfigurationError::Install {
                    reason: "subscriber already set".to_string(),
                });
            }
            self.installs.fetch_add(1, Ordering::SeqCst);
            *self.last.lock().unwrap() = Some(settings.clone());
            Ok(())
        }
    }

    fn debug_settings() -> LoggingSettings {
        LoggingSettings {
            root_level: Severity::Warn,
            ..LoggingSettings::fallback()
        }
        .with_logger(
            "module.a",
            LoggerSettings {
                level: Some(Severity::Debug),
                format: None,
            },
        )
    }

    fn touch(dir: &tempfile::TempDir, name: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, "").unwrap();
        path
    }

    #[test]
    fn test_missing_file_applies_fallback() {
        let dir = tempfile::tempdir().unwrap();
        let source = ScriptedSource::ok(debug_settings());
        let installer = Arc::new(CountingInstaller::default());
        let bootstrap = LoggingBootstrap::new(
            dir.path().join("config/logging.toml"),
            source.clone(),
            installer.clone(),
        );

        let applied = bootstrap.configure(None).unwrap();

        assert!(applied.is_fallback());
        assert_eq!(applied.settings, LoggingSettings::fallback());
        assert!(source.loaded().is_empty());
        assert_eq!(installer.installs(), 1);
        assert_eq!(
            installer.last.lock().unwrap().as_ref().unwrap().root_level,
            Severity::Info
        );
    }

    #[test]
    fn test_existing_file_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = touch(&dir, "logging.toml");
        let source = ScriptedSource::ok(debug_settings());
        let installer = Arc::new(CountingInstaller::default());
        let bootstrap = LoggingBootstrap::new(&path, source.clone(), installer.clone());

        let logger = bootstrap.get_logger("module.a").unwrap();

        assert_eq!(logger.level(), Severity::Debug);
        assert_eq!(logger.configuration().origin, SettingsOrigin::File(path.clone()));
        assert_eq!(bootstrap.get_logger("other").unwrap().level(), Severity::Warn);
        assert_eq!(source.loaded(), vec![path]);
    }

    #[test]
    fn test_explicit_path_wins_over_default() {
        let dir = tempfile::tempdir().unwrap();
        let default = touch(&dir, "default.toml");
        let explicit = touch(&dir, "explicit.toml");
        let source = ScriptedSource::ok(debug_settings());
        let bootstrap = LoggingBootstrap::new(
            &default,
            source.clone(),
            Arc::new(CountingInstaller::default()),
        );

        let applied = bootstrap.configure(Some(&explicit)).unwrap();

        assert_eq!(applied.origin, SettingsOrigin::File(explicit.clone()));
        assert_eq!(source.loaded(), vec![explicit]);
    }

    #[test]
    fn test_configure_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let other = touch(&dir, "other.toml");
        let source = ScriptedSource::ok(debug_settings());
        let installer = Arc::new(CountingInstaller::default());
        let bootstrap = LoggingBootstrap::new(
            dir.path().join("missing.toml"),
            source.clone(),
            installer.clone(),
        );

        let first = bootstrap.configure(None).unwrap();
        let second = bootstrap.configure(Some(&other)).unwrap();
        bootstrap.get_logger("module.a").unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert!(second.is_fallback());
        assert!(source.loaded().is_empty());
        assert_eq!(installer.installs(), 1);
    }

    #[test]
    fn test_malformed_file_leaves_state_unset_and_allows_retry() {
        let dir = tempfile::tempdir().unwrap();
        let path = touch(&dir, "logging.toml");
        let source = ScriptedSource::malformed("expected `=`");
        let installer = Arc::new(CountingInstaller::default());
        let bootstrap = LoggingBootstrap::new(&path, source.clone(), installer.clone());

        let err = bootstrap.get_logger("module.a").unwrap_err();
        assert!(matches!(err, ConfigurationError::Malformed { .. }));
        assert_eq!(err.path(), Some(path.as_path()));
        assert!(!bootstrap.is_configured());
        assert_eq!(installer.installs(), 0);

        source.set(Ok(debug_settings()));
        let logger = bootstrap.get_logger("module.a").unwrap();
        assert_eq!(logger.level(), Severity::Debug);
        assert!(bootstrap.is_configured());
        assert_eq!(installer.installs(), 1);
    }

    #[test]
    fn test_failed_install_leaves_state_unset() {
        let dir = tempfile::tempdir().unwrap();
        let installer = Arc::new(CountingInstaller::default());
        *installer.fail.lock().unwrap() = true;
        let bootstrap = LoggingBootstrap::new(
            dir.path().join("missing.toml"),
            ScriptedSource::ok(debug_settings()),
            installer.clone(),
        );

        assert!(matches!(
            bootstrap.configure(None),
            Err(ConfigurationError::Install { .. })
        ));
        assert!(bootstrap.applied().is_none());

        *installer.fail.lock().unwrap() = false;
        assert!(bootstrap.configure(None).is_ok());
        assert_eq!(installer.installs(), 1);
    }

    #[test]
    fn test_concurrent_first_calls_configure_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = touch(&dir, "logging.toml");
        let source = ScriptedSource::ok(debug_settings());
        let installer = Arc::new(CountingInstaller::default());
        let bootstrap = Arc::new(LoggingBootstrap::new(
            &path,
            source.clone(),
            installer.clone(),
        ));

        let threads = 16;
        let barrier = Arc::new(Barrier::new(threads));
        let handles: Vec<_> = (0..threads)
            .map(|i| {
                let bootstrap = Arc::clone(&bootstrap);
                let barrier = Arc::clone(&barrier);
                thread::spawn(move || {
                    barrier.wait();
                    let name = if i % 2 == 0 { "module.a" } else { "module.b" };
                    bootstrap.get_logger(name).unwrap()
                })
            })
            .collect();

        let loggers: Vec<Logger> = handles.into_iter().map(|h| h.join().unwrap()).collect();

        assert_eq!(installer.installs(), 1);
        assert_eq!(source.loaded().len(), 1);
        for logger in &loggers {
            let expected = if logger.name().as_str() == "module.a" {
                Severity::Debug
            } else {
                Severity::Warn
            };
            assert_eq!(logger.level(), expected);
        }
    }

    #[test]
    fn test_same_name_yields_identical_handles() {
        let dir = tempfile::tempdir().unwrap();
        let bootstrap = LoggingBootstrap::new(
            dir.path().join("missing.toml"),
            ScriptedSource::ok(debug_settings()),
            Arc::new(CountingInstaller::default()),
        );

        let first = bootstrap.get_logger("module.a").unwrap();
        let second = bootstrap.get_logger("module.a").unwrap();

        assert_eq!(first, second);
        assert_eq!(first.level(), Severity::Info);
    }

    #[test]
    fn test_resolve_does_not_install() {
        let dir = tempfile::tempdir().unwrap();
        let path = touch(&dir, "logging.toml");
        let installer = Arc::new(CountingInstaller::default());
        let bootstrap = LoggingBootstrap::new(
            &path,
            ScriptedSource::ok(debug_settings()),
            installer.clone(),
        );

        let applied = bootstrap.resolve(None).unwrap();

        assert_eq!(applied.settings.root_level, Severity::Warn);
        assert_eq!(installer.installs(), 0);
        assert!(!bootstrap.is_configured());
    }
}
