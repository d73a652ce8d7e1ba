//! Structured logging with tracing
//!
//! Installs the global subscriber: an `EnvFilter`, a stdout layer (plain or
//! JSON) and, optionally, a daily rotating log file.

use crate::config::LoggingConfig;
use crate::constants::{DEFAULT_LOG_NAME, LOG_FILE_EXTENSION, LOG_FILTER_ENV};
use std::path::{Path, PathBuf};
use tcache_domain::error::{Error, Result};
use tracing::{Level, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt};

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Keeps the log file writer alive
///
/// Buffered file output is flushed when the guard is dropped, so hold it
/// for as long as logging is needed.
#[derive(Debug)]
#[must_use = "dropping the guard stops file logging"]
pub struct LoggingGuard {
    _file: Option<WorkerGuard>,
}

/// Initialize logging with the provided configuration
///
/// `TCACHE_LOG` overrides the configured level with a full filter
/// directive. Fails if a global subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<LoggingGuard> {
    let level = parse_log_level(&config.level)?;
    let filter = EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| {
        EnvFilter::default().add_directive(LevelFilter::from_level(level).into())
    });

    let mut layers: Vec<BoxedLayer> = vec![stdout_layer(config.json_format)];

    let mut file_guard = None;
    if config.file_output {
        let appender = rolling_appender(config)?;
        let (writer, guard) = tracing_appender::non_blocking(appender);
        file_guard = Some(guard);
        layers.push(if config.json_format {
            fmt::layer()
                .json()
                .with_writer(writer)
                .with_ansi(false)
                .with_file(true)
                .with_line_number(true)
                .boxed()
        } else {
            fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_file(true)
                .with_line_number(true)
                .boxed()
        });
    }

    Registry::default()
        .with(layers)
        .with(filter)
        .try_init()
        .map_err(|e| Error::configuration_with_source("Failed to install logging subscriber", e))?;

    info!(level = %level, file_output = config.file_output, "Logging initialized");
    Ok(LoggingGuard { _file: file_guard })
}

fn stdout_layer(json_format: bool) -> BoxedLayer {
    if json_format {
        fmt::layer()
            .json()
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .boxed()
    } else {
        fmt::layer()
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .boxed()
    }
}

fn rolling_appender(config: &LoggingConfig) -> Result<RollingFileAppender> {
    let path = log_file_path(&config.log_dir, &config.log_name);
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(DEFAULT_LOG_NAME);

    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(stem)
        .filename_suffix(LOG_FILE_EXTENSION)
        .max_log_files(config.max_files.max(1))
        .build(dir)
        .map_err(|e| {
            Error::configuration_with_source(
                format!("Failed to open log file in {}", dir.display()),
                e,
            )
        })
}

/// Path of the log file for a directory and logger name
///
/// Trailing slashes on `dir` are ignored; path separators in `name` are
/// replaced so the file always lands directly inside `dir`.
///
/// # Example
///
/// ```
/// use tcache_infrastructure::logging::log_file_path;
///
/// assert_eq!(log_file_path("/var/log/", "api/v1"), std::path::PathBuf::from("/var/log/api_v1.log"));
/// ```
pub fn log_file_path(dir: &str, name: &str) -> PathBuf {
    let dir = dir.trim_end_matches(['/', '\\']);
    let name = name.replace(['/', '\\'], "_");
    PathBuf::from(format!("{dir}/{name}.{LOG_FILE_EXTENSION}"))
}

/// Parse log level string to tracing Level
pub fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" | "warning" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => Err(Error::configuration(format!(
            "Invalid log level: {level}. Use trace, debug, info, warn, or error"
        ))),
    }
}

/// Log configuration loading status
pub fn log_config_loaded(config_path: &Path, success: bool) {
    if success {
        info!(path = %config_path.display(), "Configuration loaded");
    } else {
        warn!(path = %config_path.display(), "Configuration file not found");
    }
}
