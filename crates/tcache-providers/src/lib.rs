//! # Tenant Cache - Backend Implementations
//!
//! Implementations of the ports defined in `tcache-domain`. Cache backends
//! register themselves into the `tcache-application` registry at link time.
//!
//! | Category | Port | Implementations |
//! |----------|------|-----------------|
//! | Cache backend | `CacheBackend` | Filesystem, External store |
//! | Key-value store | `KeyValueStore` | Redis, InMemory |
//!
//! ## Feature Flags
//!
//! ```toml
//! [dependencies]
//! tcache-providers = { version = "0.1", default-features = false, features = ["store-memory"] }
//! ```

pub use tcache_domain::error::{Error, Result};
pub use tcache_domain::ports::{CacheBackend, KeyValueStore};

/// Provider-specific constants
pub mod constants;

/// Cache backend implementations
pub mod cache;

/// Key-value store implementations
pub mod store;
