//! Configuration types

use crate::constants::{DEFAULT_LOG_DIR, DEFAULT_LOG_LEVEL, DEFAULT_LOG_NAME, LOG_MAX_FILES};
use serde::{Deserialize, Serialize};
use tcache_domain::value_objects::CacheSettings;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Raw cache settings, validated when a cache is built
    pub cache: CacheSettings,

    /// Logging configuration
    pub logging: LoggingConfig,

    /// External store connection
    pub store: StoreConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Enable JSON output format
    pub json_format: bool,

    /// Also write to a rotating log file
    pub file_output: bool,

    /// Directory holding log files
    pub log_dir: String,

    /// Logger name, used as the log file stem
    pub log_name: String,

    /// Maximum number of rotated files to keep
    pub max_files: usize,

    /// Report cache request/response events through tracing
    pub record_events: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            json_format: false,
            file_output: false,
            log_dir: DEFAULT_LOG_DIR.to_string(),
            log_name: DEFAULT_LOG_NAME.to_string(),
            max_files: LOG_MAX_FILES,
            record_events: false,
        }
    }
}

/// External store connection
///
/// Only used when the cache method selects the external store and the
/// caller does not inject its own handle.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct StoreConfig {
    /// Redis connection URL, e.g. `redis://127.0.0.1/`
    pub url: Option<String>,
}
