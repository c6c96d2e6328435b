//! Logging setup for the CLI.
//!
//! Human-readable events go to stderr. When a log file or directory is
//! configured, every event passing the filter is also written as JSON lines
//! through a non-blocking appender.

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, fmt};

/// Explicit log file path.
pub const LOG_PATH_ENV: &str = "INDAGA_LOG_PATH";
/// Log directory; files roll daily.
pub const LOG_DIR_ENV: &str = "INDAGA_LOG_DIR";

const LOG_FILE_PREFIX: &str = "indaga.jsonl";

/// Where, if anywhere, JSONL logs are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// No file logging.
    None,
    /// Append to exactly this file.
    File(PathBuf),
    /// Daily-rolling files in this directory.
    Directory(PathBuf),
}

/// Resolved logging settings.
#[derive(Debug, Clone)]
pub struct ObservabilityConfig {
    /// File log destination.
    pub target: LogTarget,
    /// Most verbose level shown on stderr.
    pub stderr_level: LevelFilter,
}

impl ObservabilityConfig {
    /// Resolve from the environment, falling back to the configured `log_dir`.
    ///
    /// `INDAGA_LOG_PATH` beats `INDAGA_LOG_DIR`, which beats `config_log_dir`.
    pub fn from_env_with_overrides(config_log_dir: Option<PathBuf>) -> Self {
        Self::resolve(
            non_empty_env(LOG_PATH_ENV),
            non_empty_env(LOG_DIR_ENV),
            config_log_dir,
        )
    }

    fn resolve(path: Option<PathBuf>, dir: Option<PathBuf>, config_dir: Option<PathBuf>) -> Self {
        let target = match (path, dir.or(config_dir)) {
            (Some(path), _) => LogTarget::File(path),
            (None, Some(dir)) => LogTarget::Directory(dir),
            (None, None) => LogTarget::None,
        };
        Self {
            target,
            stderr_level: LevelFilter::WARN,
        }
    }

    /// Set the stderr threshold.
    pub const fn with_stderr_level(mut self, level: LevelFilter) -> Self {
        self.stderr_level = level;
        self
    }
}

fn non_empty_env(name: &str) -> Option<PathBuf> {
    std::env::var_os(name)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

/// Global event filter.
///
/// `RUST_LOG` wins when set. Otherwise `-q` keeps errors only, `-v` enables
/// debug, `-vv` trace, and the configured level applies.
pub fn env_filter(quiet: bool, verbose: u8, log_level: &str) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    let directive = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => log_level,
        (false, 1) => "debug",
        (false, _) => "trace",
    };
    EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Stderr threshold: warnings by default so command output stays clean.
pub fn stderr_level(quiet: bool, verbose: u8) -> LevelFilter {
    if std::env::var_os("RUST_LOG").is_some() {
        return LevelFilter::TRACE;
    }
    match (quiet, verbose) {
        (true, _) => LevelFilter::ERROR,
        (false, 0) => LevelFilter::WARN,
        (false, 1) => LevelFilter::DEBUG,
        (false, _) => LevelFilter::TRACE,
    }
}

/// Install the global subscriber.
///
/// Hold the returned guard until exit so buffered file events are flushed.
pub fn init_observability(
    config: &ObservabilityConfig,
    env_filter: EnvFilter,
) -> anyhow::Result<Option<WorkerGuard>> {
    let (file_writer, guard) = match file_appender(&config.target)? {
        Some(appender) => {
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (Some(writer), Some(guard))
        }
        None => (None, None),
    };

    let file_layer = file_writer.map(|writer| {
        fmt::layer()
            .json()
            .with_ansi(false)
            .with_current_span(true)
            .with_writer(writer)
    });
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(config.stderr_level);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("a global tracing subscriber is already installed")?;

    Ok(guard)
}

fn file_appender(
    target: &LogTarget,
) -> anyhow::Result<Option<tracing_appender::rolling::RollingFileAppender>> {
    match target {
        LogTarget::None => Ok(None),
        LogTarget::Directory(dir) => {
            ensure_dir(dir)?;
            Ok(Some(tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX)))
        }
        LogTarget::File(path) => {
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."));
            let name = path
                .file_name()
                .with_context(|| format!("log path has no file name: {}", path.display()))?;
            ensure_dir(dir)?;
            Ok(Some(tracing_appender::rolling::never(dir, name)))
        }
    }
}

fn ensure_dir(dir: &Path) -> anyhow::Result<()> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create log directory {}", dir.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_path_wins() {
        let config = ObservabilityConfig::resolve(
            Some(PathBuf::from("/tmp/a.jsonl")),
            Some(PathBuf::from("/tmp/env")),
            Some(PathBuf::from("/tmp/config")),
        );
        assert_eq!(config.target, LogTarget::File(PathBuf::from("/tmp/a.jsonl")));
    }

    #[test]
    fn env_dir_beats_config_dir() {
        let config = ObservabilityConfig::resolve(
            None,
            Some(PathBuf::from("/tmp/env")),
            Some(PathBuf::from("/tmp/config")),
        );
        assert_eq!(config.target, LogTarget::Directory(PathBuf::from("/tmp/env")));
    }

    #[test]
    fn config_dir_is_last_resort() {
        let config = ObservabilityConfig::resolve(None, None, Some(PathBuf::from("/tmp/config")));
        assert_eq!(config.target, LogTarget::Directory(PathBuf::from("/tmp/config")));
        let config = ObservabilityConfig::resolve(None, None, None);
        assert_eq!(config.target, LogTarget::None);
        assert_eq!(config.stderr_level, LevelFilter::WARN);
    }

    #[test]
    fn file_appender_creates_directory() {
        let tmp = tempfile::TempDir::new().unwrap();
        let dir = tmp.path().join("logs").join("indaga");
        let appender = file_appender(&LogTarget::Directory(dir.clone())).unwrap();
        assert!(appender.is_some());
        assert!(dir.is_dir());
        assert!(file_appender(&LogTarget::None).unwrap().is_none());
    }
}
