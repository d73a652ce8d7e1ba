//! Infrastructure constants

// ============================================================================
// Configuration
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "tcache.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "tcache";

/// Environment variable prefix for configuration overrides
pub const CONFIG_ENV_PREFIX: &str = "TCACHE";

/// Separator between nesting levels in environment variable names
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// Logging
// ============================================================================

/// Environment variable overriding the log filter
pub const LOG_FILTER_ENV: &str = "TCACHE_LOG";

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Default directory for log files
pub const DEFAULT_LOG_DIR: &str = "/tmp";

/// Default logger name, also the log file stem
pub const DEFAULT_LOG_NAME: &str = "tcache";

/// Log file extension
pub const LOG_FILE_EXTENSION: &str = "log";

/// Maximum number of rotated log files kept
pub const LOG_MAX_FILES: usize = 10;
