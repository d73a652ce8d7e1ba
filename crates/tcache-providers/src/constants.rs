//! Provider-specific constants

// ============================================================================
// FILESYSTEM BACKEND CONSTANTS
// ============================================================================

/// Prefix of temporary files written before being renamed into place
pub const FILESYSTEM_TEMP_FILE_PREFIX: &str = ".tcache-";

/// Suffix of temporary files written before being renamed into place
pub const FILESYSTEM_TEMP_FILE_SUFFIX: &str = ".tmp";

