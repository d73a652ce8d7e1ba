//! Async access to the tenant cache
//!
//! [`TenantCache`] performs blocking I/O. This wrapper moves every
//! operation onto tokio's blocking pool so async callers never stall a
//! runtime worker.

use serde::Serialize;
use serde::de::DeserializeOwned;
use tcache_application::TenantCache;
use tcache_domain::value_objects::CacheKey;
use tokio::task::JoinError;
use tracing::warn;

/// Async wrapper around a [`TenantCache`]
///
/// A blocking task that panics or is cancelled degrades the same way a
/// backend failure does.
#[derive(Debug, Clone)]
pub struct AsyncTenantCache {
    cache: TenantCache,
}

impl AsyncTenantCache {
    /// Wrap an existing cache
    pub fn new(cache: TenantCache) -> Self {
        Self { cache }
    }

    /// The wrapped synchronous cache
    pub fn inner(&self) -> &TenantCache {
        &self.cache
    }

    /// See [`TenantCache::save`]
    pub async fn save<T>(&self, tenant: &str, uri: &str, value: T) -> bool
    where
        T: Serialize + Send + 'static,
    {
        let (cache, tenant, uri) = self.owned(tenant, uri);
        tokio::task::spawn_blocking(move || cache.save(&tenant, &uri, &value))
            .await
            .unwrap_or_else(|e| {
                join_failed("save", &e);
                false
            })
    }

    /// See [`TenantCache::get`]
    pub async fn get<T>(&self, tenant: &str, uri: &str) -> Option<T>
    where
        T: DeserializeOwned + Send + 'static,
    {
        let (cache, tenant, uri) = self.owned(tenant, uri);
        tokio::task::spawn_blocking(move || cache.get::<T>(&tenant, &uri))
            .await
            .unwrap_or_else(|e| {
                join_failed("get", &e);
                None
            })
    }

    /// See [`TenantCache::clear_by_key`]
    pub async fn clear_by_key(&self, key: &str) {
        let cache = self.cache.clone();
        let key = key.to_string();
        tokio::task::spawn_blocking(move || cache.clear_by_key(&key))
            .await
            .unwrap_or_else(|e| join_failed("clear_by_key", &e));
    }

    /// See [`TenantCache::clear_tenant_cache`]
    pub async fn clear_tenant_cache(&self, tenant: &str) {
        let cache = self.cache.clone();
        let tenant = tenant.to_string();
        tokio::task::spawn_blocking(move || cache.clear_tenant_cache(&tenant))
            .await
            .unwrap_or_else(|e| join_failed("clear_tenant_cache", &e));
    }

    /// See [`TenantCache::clear_all`]
    pub async fn clear_all(&self) {
        let cache = self.cache.clone();
        tokio::task::spawn_blocking(move || cache.clear_all())
            .await
            .unwrap_or_else(|e| join_failed("clear_all", &e));
    }

    /// See [`TenantCache::form_key`]
    pub fn form_key(&self, tenant: &str, uri: &str) -> CacheKey {
        self.cache.form_key(tenant, uri)
    }

    /// See [`TenantCache::set_key_prefix`]
    pub fn set_key_prefix(&self, prefix: impl Into<String>) -> &Self {
        self.cache.set_key_prefix(prefix);
        self
    }

    /// See [`TenantCache::key_prefix`]
    pub fn key_prefix(&self) -> String {
        self.cache.key_prefix()
    }

    fn owned(&self, tenant: &str, uri: &str) -> (TenantCache, String, String) {
        (self.cache.clone(), tenant.to_string(), uri.to_string())
    }
}

impl From<TenantCache> for AsyncTenantCache {
    fn from(cache: TenantCache) -> Self {
        Self::new(cache)
    }
}

fn join_failed(operation: &str, error: &JoinError) {
    warn!(operation, error = %error, "Blocking cache task did not complete");
}
