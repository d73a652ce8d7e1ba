//! External store cache backend
//!
//! Delegates storage and expiry to an injected [`KeyValueStore`]. A
//! positive TTL uses the store's expiring set; zero or a negative TTL
//! stores without expiry. No local staleness check is done on reads.
//!
//! Clearing a tenant lists matching keys and then deletes them in bulk;
//! an entry created between the two steps survives the clear.

use std::sync::Arc;
use tcache_application::registry::{CACHE_BACKENDS, CacheBackendConfig, CacheBackendEntry};
use tcache_domain::error::{ConfigError, Result};
use tcache_domain::ports::{CacheBackend, KeyValueStore};
use tcache_domain::value_objects::{CacheKey, tenant_key_pattern};
use tracing::debug;

/// Cache backend over an external key-value store
#[derive(Debug, Clone)]
pub struct ExternalStoreCacheBackend {
    store: Arc<dyn KeyValueStore>,
    ttl_seconds: i64,
}

impl ExternalStoreCacheBackend {
    /// Create a backend over a caller-owned store handle
    pub fn new(store: Arc<dyn KeyValueStore>, ttl_seconds: i64) -> Self {
        Self { store, ttl_seconds }
    }

    /// TTL passed to the store, if entries expire at all
    fn store_ttl(&self) -> Option<u64> {
        u64::try_from(self.ttl_seconds).ok().filter(|ttl| *ttl > 0)
    }
}

impl CacheBackend for ExternalStoreCacheBackend {
    fn put(&self, key: &CacheKey, payload: &str) -> Result<bool> {
        match self.store_ttl() {
            Some(ttl) => self.store.set_with_ttl(key.as_str(), payload, ttl),
            None => self.store.set(key.as_str(), payload),
        }
    }

    fn fetch(&self, key: &CacheKey) -> Result<Option<String>> {
        self.store.get(key.as_str())
    }

    fn remove(&self, key: &CacheKey) -> Result<()> {
        self.store.delete(&[key.to_string()]).map(drop)
    }

    fn remove_tenant(&self, key_prefix: &str, tenant: &str) -> Result<usize> {
        let pattern = tenant_key_pattern(key_prefix, tenant);
        let keys = self.store.keys(&pattern)?;
        if keys.is_empty() {
            return Ok(0);
        }
        debug!(pattern = %pattern, matched = keys.len(), "Deleting tenant keys");
        self.store.delete(&keys)
    }

    fn remove_all(&self) -> Result<()> {
        self.store.flush_all()
    }

    fn backend_name(&self) -> &str {
        "external_store"
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

fn external_store_backend_factory(config: &CacheBackendConfig) -> Result<Arc<dyn CacheBackend>> {
    let store = config
        .store
        .clone()
        .ok_or(ConfigError::MissingStoreHandle)?;

    Ok(Arc::new(ExternalStoreCacheBackend::new(
        store,
        config.config.ttl_seconds,
    )))
}

#[linkme::distributed_slice(CACHE_BACKENDS)]
static EXTERNAL_STORE_BACKEND: CacheBackendEntry = CacheBackendEntry {
    name: "external_store",
    description: "External key-value store (Redis), expiry enforced by the store",
    factory: external_store_backend_factory,
};
