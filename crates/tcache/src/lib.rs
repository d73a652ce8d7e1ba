//! # Tenant Cache
//!
//! A tenant-aware cache that stores serializable values under namespaced
//! keys with time-based expiry, on the local filesystem or in an external
//! key-value store such as Redis.
//!
//! ## Example
//!
//! ```ignore
//! use tcache::{CacheSettings, TenantCache};
//!
//! let cache = TenantCache::new(
//!     &CacheSettings::new("file")
//!         .with_storage_dir("/var/cache/tenants")
//!         .with_ttl_secs(60),
//!     None,
//! )?;
//!
//! cache.save("tenantA", "/users/1", &serde_json::json!({"name": "Bob"}));
//! let user: Option<serde_json::Value> = cache.get("tenantA", "/users/1");
//! cache.clear_tenant_cache("tenantA");
//! ```
//!
//! ## Architecture
//!
//! - `domain` - Errors, value objects and ports
//! - `application` - Validation, key derivation, backend registry, the cache facade
//! - `providers` - Filesystem and external store backends, Redis and in-memory stores
//! - `infrastructure` - Configuration loading, logging, event recording, async access

/// Domain layer - errors, value objects and ports
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use tcache_domain::*;
}

/// Application layer - the cache facade and its collaborators
pub mod application {
    pub use tcache_application::*;
}

/// Providers - backend and store implementations
pub mod providers {
    pub use tcache_providers::*;
}

/// Infrastructure layer - configuration, logging and async access
pub mod infrastructure {
    pub use tcache_infrastructure::*;
}

// Re-export commonly used domain types at the crate root
pub use domain::*;

pub use application::{TenantCache, TenantCacheBuilder, list_cache_backends};
pub use infrastructure::{
    AppConfig, AsyncTenantCache, ConfigLoader, build_tenant_cache, init_logging,
};
pub use providers::store::{InMemoryStore, RedisStore};
