//! Logging context for a run.
//!
//! A `LogContext` is built once from a [`LoggingConfig`] and entered for the
//! lifetime of the run; it is a scoped default dispatcher, not a process-global
//! subscriber, so tests and embedders can build as many as they like.
use std::fmt;
use std::fs::{File, OpenOptions};
use std::sync::Mutex;

use tracing::Dispatch;
use tracing::dispatcher::DefaultGuard;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{EnvFilter, Registry};

use crate::core::params::LoggingConfig;
use crate::error::{Error, Result};

/// `2024-05-01 13:37:00,123`
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalTimestamp;

impl FormatTime for LocalTimestamp {
    fn format_time(&self, w: &mut Writer<'_>) -> fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S,%3f"))
    }
}

pub struct LogContext {
    dispatch: Dispatch,
    config: LoggingConfig,
}

impl LogContext {
    pub fn new(config: &LoggingConfig) -> Result<Self> {
        let filter = EnvFilter::new(config.min_level.to_string());

        let console = config.target.console().then(|| {
            tracing_subscriber::fmt::layer()
                .with_timer(LocalTimestamp)
                .with_target(false)
                .with_writer(std::io::stderr)
        });

        let file = if config.target.file() {
            let handle = open_append(config)?;
            Some(
                tracing_subscriber::fmt::layer()
                    .with_timer(LocalTimestamp)
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(Mutex::new(handle)),
            )
        } else {
            None
        };

        let subscriber = Registry::default().with(filter).with(console).with(file);

        Ok(Self {
            dispatch: Dispatch::new(subscriber),
            config: config.clone(),
        })
    }

    pub fn config(&self) -> &LoggingConfig {
        &self.config
    }

    /// Route this thread's events to this context until the guard drops.
    pub fn enter(&self) -> DefaultGuard {
        tracing::dispatcher::set_default(&self.dispatch)
    }

    /// Run `f` with this context as the active dispatcher.
    pub fn scope<T>(&self, f: impl FnOnce() -> T) -> T {
        tracing::dispatcher::with_default(&self.dispatch, f)
    }
}

fn open_append(config: &LoggingConfig) -> Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.file)
        .map_err(|e| Error::Logging(format!("cannot open {}: {}", config.file.display(), e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{LogLevel, LogTarget};

    fn file_config(dir: &std::path::Path, min_level: LogLevel) -> LoggingConfig {
        LoggingConfig {
            target: LogTarget::File,
            min_level,
            file: dir.join("conversion.log"),
        }
    }

    #[test]
    fn file_target_writes_plain_lines() {
        let dir = tempfile::tempdir().unwrap();
        let config = file_config(dir.path(), LogLevel::Info);
        let ctx = LogContext::new(&config).unwrap();
        ctx.scope(|| {
            tracing::info!("Starting batch conversion");
            tracing::debug!("hidden detail");
        });

        let text = std::fs::read_to_string(&config.file).unwrap();
        assert!(text.contains("INFO"));
        assert!(text.contains("Starting batch conversion"));
        assert!(!text.contains("hidden detail"));
        assert!(!text.contains('\u{1b}'), "no ANSI escapes in file output");
    }

    #[test]
    fn debug_level_lets_debug_through() {
        let dir = tempfile::tempdir().unwrap();
        let config = file_config(dir.path(), LogLevel::Debug);
        let ctx = LogContext::new(&config).unwrap();
        ctx.scope(|| tracing::debug!("Valid JSON: a.json"));
        let text = std::fs::read_to_string(&config.file).unwrap();
        assert!(text.contains("Valid JSON: a.json"));
    }

    #[test]
    fn log_file_is_appended_across_contexts() {
        let dir = tempfile::tempdir().unwrap();
        let config = file_config(dir.path(), LogLevel::Warning);
        LogContext::new(&config)
            .unwrap()
            .scope(|| tracing::warn!("first run"));
        LogContext::new(&config)
            .unwrap()
            .scope(|| tracing::error!("second run"));
        let text = std::fs::read_to_string(&config.file).unwrap();
        assert!(text.contains("first run"));
        assert!(text.contains("second run"));
    }

    #[test]
    fn unopenable_log_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = LoggingConfig {
            target: LogTarget::Both,
            min_level: LogLevel::Info,
            file: dir.path().join("missing").join("conversion.log"),
        };
        assert!(matches!(LogContext::new(&config), Err(Error::Logging(_))));
    }

    #[test]
    fn console_target_needs_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = LoggingConfig {
            target: LogTarget::Console,
            min_level: LogLevel::Info,
            file: dir.path().join("missing").join("conversion.log"),
        };
        assert!(LogContext::new(&config).is_ok());
        assert!(!config.file.exists());
    }
}
