//! Domain layer constants
//!
//! Values that shape cache keys and the physical storage layout. Changing
//! any of them makes previously stored entries unreachable.

// ============================================================================
// KEY DERIVATION CONSTANTS
// ============================================================================

/// Key prefix used when the configuration does not name one
pub const DEFAULT_KEY_PREFIX: &str = "th_";

/// Separator between the tenant handle and the resource digest
pub const KEY_SEPARATOR: &str = "_";

// ============================================================================
// STORAGE LAYOUT CONSTANTS
// ============================================================================

/// File extension of filesystem cache entries (without the dot)
pub const CACHE_FILE_EXTENSION: &str = "json";
