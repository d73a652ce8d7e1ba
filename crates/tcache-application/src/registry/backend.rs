//! Cache Backend Registry
//!
//! Auto-registration system for cache backends.
//! Backends register themselves via `#[linkme::distributed_slice(CACHE_BACKENDS)]`
//! and are resolved by the name of the configured [`CacheMethod`](tcache_domain::CacheMethod).

use std::sync::Arc;
use tcache_domain::error::{Error, Result};
use tcache_domain::ports::{CacheBackend, KeyValueStore};
use tcache_domain::value_objects::CacheConfig;

/// Everything a backend factory may need
///
/// Backends use what they need and ignore the rest.
#[derive(Debug, Clone)]
pub struct CacheBackendConfig {
    /// Validated cache configuration
    pub config: CacheConfig,
    /// Caller-owned store handle (external store backend)
    pub store: Option<Arc<dyn KeyValueStore>>,
}

impl CacheBackendConfig {
    /// Create a backend config without a store handle
    pub fn new(config: CacheConfig) -> Self {
        Self {
            config,
            store: None,
        }
    }

    /// Attach a store handle
    pub fn with_store(mut self, store: Arc<dyn KeyValueStore>) -> Self {
        self.store = Some(store);
        self
    }
}

/// Registry entry for cache backends
pub struct CacheBackendEntry {
    /// Unique backend name, matching `CacheMethod::as_str`
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Factory function to create the backend
    pub factory: fn(&CacheBackendConfig) -> Result<Arc<dyn CacheBackend>>,
}

#[linkme::distributed_slice]
pub static CACHE_BACKENDS: [CacheBackendEntry] = [..];

/// Resolve the backend for the configured method and create it
///
/// # Returns
/// * `Ok(Arc<dyn CacheBackend>)` - Created backend
/// * `Err(Error::UnknownBackend)` - No backend registered under that name
/// * `Err(_)` - The factory rejected the configuration
pub fn resolve_cache_backend(config: &CacheBackendConfig) -> Result<Arc<dyn CacheBackend>> {
    let name = config.config.method.as_str();

    if let Some(entry) = CACHE_BACKENDS.iter().find(|entry| entry.name == name) {
        return (entry.factory)(config);
    }

    Err(Error::UnknownBackend {
        name: name.to_string(),
        available: CACHE_BACKENDS
            .iter()
            .map(|entry| entry.name.to_string())
            .collect(),
    })
}

/// List all registered backends as (name, description) pairs
pub fn list_cache_backends() -> Vec<(&'static str, &'static str)> {
    CACHE_BACKENDS
        .iter()
        .map(|entry| (entry.name, entry.description))
        .collect()
}
