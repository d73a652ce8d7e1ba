//! Tenant Cache
//!
//! Facade over a single storage backend. Callers configure it once and then
//! save, read and clear entries by (tenant, resource) pairs.
//!
//! Runtime operations never fail from the caller's point of view: backend
//! errors become `false` for writes, `None` for reads and a logged no-op for
//! clears. Payloads that no longer deserialize are treated as misses.
//!
//! ## Example
//!
//! ```ignore
//! use tcache_application::TenantCache;
//! use tcache_domain::CacheSettings;
//!
//! let cache = TenantCache::new(
//!     &CacheSettings::new("file").with_storage_dir("/tmp/c").with_ttl_secs(60),
//!     None,
//! )?;
//! cache.save("tenantA", "/users/1", &serde_json::json!({"name": "Bob"}));
//! let user: Option<serde_json::Value> = cache.get("tenantA", "/users/1");
//! ```

use crate::key_deriver::KeyDeriver;
use crate::registry::{CacheBackendConfig, resolve_cache_backend};
use crate::validation::validate;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use std::fmt;
use std::sync::Arc;
use tcache_domain::error::Result;
use tcache_domain::ports::{CacheBackend, EventKind, EventRecorder, KeyValueStore};
use tcache_domain::value_objects::{CacheConfig, CacheKey, CacheSettings};
use tracing::{debug, warn};

/// Tenant-aware cache
///
/// Cheap to clone; clones share the backend, the configuration and the key
/// prefix.
#[derive(Clone)]
pub struct TenantCache {
    inner: Arc<Inner>,
}

struct Inner {
    config: CacheConfig,
    keys: KeyDeriver,
    backend: Arc<dyn CacheBackend>,
    events: Option<Arc<dyn EventRecorder>>,
}

impl TenantCache {
    /// Validate settings and create a cache with the matching backend
    ///
    /// `store` is the caller-owned handle used by the external store backend.
    pub fn new(settings: &CacheSettings, store: Option<Arc<dyn KeyValueStore>>) -> Result<Self> {
        let mut builder = TenantCacheBuilder::new(settings.clone());
        if let Some(store) = store {
            builder = builder.with_store(store);
        }
        builder.build()
    }

    /// Start building a cache from raw settings
    pub fn builder(settings: CacheSettings) -> TenantCacheBuilder {
        TenantCacheBuilder::new(settings)
    }

    /// Create a cache over an already constructed backend
    pub fn with_backend(config: CacheConfig, backend: Arc<dyn CacheBackend>) -> Self {
        Self::assemble(config, backend, None)
    }

    fn assemble(
        config: CacheConfig,
        backend: Arc<dyn CacheBackend>,
        events: Option<Arc<dyn EventRecorder>>,
    ) -> Self {
        Self {
            inner: Arc::new(Inner {
                keys: KeyDeriver::new(config.key_prefix.clone()),
                config,
                backend,
                events,
            }),
        }
    }

    /// Serialize `value` and store it for the tenant's resource
    ///
    /// # Returns
    /// `true` if the backend reports the write as successful
    pub fn save<T: Serialize + ?Sized>(&self, tenant: &str, uri: &str, value: &T) -> bool {
        self.record(
            EventKind::RequestReceived,
            json!({ "operation": "save", "tenant": tenant, "uri": uri }),
        );
        let key = self.form_key(tenant, uri);

        let saved = match serde_json::to_string(value) {
            Ok(payload) => match self.inner.backend.put(&key, &payload) {
                Ok(saved) => saved,
                Err(e) => {
                    warn!(key = %key, backend = self.backend_name(), error = %e, "Cache save failed");
                    false
                }
            },
            Err(e) => {
                warn!(key = %key, error = %e, "Cache value could not be serialized");
                false
            }
        };

        self.record(
            EventKind::ResponseReceived,
            json!({ "operation": "save", "key": key.as_str(), "saved": saved }),
        );
        saved
    }

    /// Read and deserialize the tenant's resource
    ///
    /// # Returns
    /// `None` if the entry is absent, expired, unreadable or does not
    /// deserialize into `T`
    pub fn get<T: DeserializeOwned>(&self, tenant: &str, uri: &str) -> Option<T> {
        self.record(
            EventKind::RequestReceived,
            json!({ "operation": "get", "tenant": tenant, "uri": uri }),
        );
        let key = self.form_key(tenant, uri);

        let value = match self.inner.backend.fetch(&key) {
            Ok(Some(payload)) => match serde_json::from_str::<T>(&payload) {
                Ok(value) => {
                    debug!(key = %key, "Cache hit");
                    Some(value)
                }
                Err(e) => {
                    warn!(key = %key, error = %e, "Corrupted cache entry treated as a miss");
                    None
                }
            },
            Ok(None) => {
                debug!(key = %key, "Cache miss");
                None
            }
            Err(e) => {
                warn!(key = %key, backend = self.backend_name(), error = %e, "Cache read failed");
                None
            }
        };

        self.record(
            EventKind::ResponseReceived,
            json!({ "operation": "get", "key": key.as_str(), "hit": value.is_some() }),
        );
        value
    }

    /// Remove the entry stored under an already derived key
    ///
    /// The key is used verbatim. Absent keys are a no-op.
    pub fn clear_by_key(&self, key: &str) {
        self.record(
            EventKind::RequestReceived,
            json!({ "operation": "clear_by_key", "key": key }),
        );
        let cleared = self
            .inner
            .backend
            .remove(&CacheKey::from_raw(key))
            .map_err(|e| warn!(key, backend = self.backend_name(), error = %e, "Cache clear failed"))
            .is_ok();
        self.record(
            EventKind::ResponseReceived,
            json!({ "operation": "clear_by_key", "key": key, "cleared": cleared }),
        );
    }

    /// Remove every entry of a tenant under the current key prefix
    pub fn clear_tenant_cache(&self, tenant: &str) {
        self.record(
            EventKind::RequestReceived,
            json!({ "operation": "clear_tenant_cache", "tenant": tenant }),
        );
        let prefix = self.key_prefix();
        let removed = match self.inner.backend.remove_tenant(&prefix, tenant) {
            Ok(removed) => {
                debug!(tenant, removed, "Tenant cache cleared");
                Some(removed)
            }
            Err(e) => {
                warn!(tenant, backend = self.backend_name(), error = %e, "Tenant cache clear failed");
                None
            }
        };
        self.record(
            EventKind::ResponseReceived,
            json!({ "operation": "clear_tenant_cache", "tenant": tenant, "removed": removed }),
        );
    }

    /// Remove every entry the backend can see
    ///
    /// Not scoped by prefix or tenant: the filesystem backend empties the
    /// storage directory of cache files, the external store is flushed.
    pub fn clear_all(&self) {
        self.record(
            EventKind::RequestReceived,
            json!({ "operation": "clear_all" }),
        );
        let cleared = self
            .inner
            .backend
            .remove_all()
            .map_err(|e| warn!(backend = self.backend_name(), error = %e, "Cache clear all failed"))
            .is_ok();
        self.record(
            EventKind::ResponseReceived,
            json!({ "operation": "clear_all", "cleared": cleared }),
        );
    }

    /// Derive the storage key of a tenant's resource
    pub fn form_key(&self, tenant: &str, uri: &str) -> CacheKey {
        self.inner.keys.form_key(tenant, uri)
    }

    /// Replace the key prefix used by subsequent operations
    ///
    /// Entries stored under the previous prefix are not moved.
    pub fn set_key_prefix(&self, prefix: impl Into<String>) -> &Self {
        self.inner.keys.set_prefix(prefix);
        self
    }

    /// The current key prefix
    pub fn key_prefix(&self) -> String {
        self.inner.keys.prefix()
    }

    /// The validated configuration this cache was built from
    pub fn config(&self) -> &CacheConfig {
        &self.inner.config
    }

    /// Name of the active backend
    pub fn backend_name(&self) -> &str {
        self.inner.backend.backend_name()
    }

    fn record(&self, kind: EventKind, payload: Value) {
        if let Some(events) = &self.inner.events {
            events.record_event(kind, &payload);
        }
    }
}

impl fmt::Debug for TenantCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TenantCache")
            .field("config", &self.inner.config)
            .field("key_prefix", &self.key_prefix())
            .field("backend", &self.inner.backend)
            .finish_non_exhaustive()
    }
}

/// Builder for [`TenantCache`]
#[derive(Debug)]
pub struct TenantCacheBuilder {
    settings: CacheSettings,
    store: Option<Arc<dyn KeyValueStore>>,
    events: Option<Arc<dyn EventRecorder>>,
}

impl TenantCacheBuilder {
    /// Create a builder for the given settings
    pub fn new(settings: CacheSettings) -> Self {
        Self {
            settings,
            store: None,
            events: None,
        }
    }

    /// Inject the caller-owned store handle
    pub fn with_store(mut self, store: Arc<dyn KeyValueStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Inject an event recorder
    pub fn with_event_recorder(mut self, events: Arc<dyn EventRecorder>) -> Self {
        self.events = Some(events);
        self
    }

    /// Validate the settings and create the cache
    ///
    /// Fails on the first invalid setting; no cache exists afterwards.
    pub fn build(self) -> Result<TenantCache> {
        let config = validate(&self.settings)?;

        let mut backend_config = CacheBackendConfig::new(config.clone());
        if let Some(store) = self.store {
            backend_config = backend_config.with_store(store);
        }
        let backend = resolve_cache_backend(&backend_config)?;

        debug!(
            backend = backend.backend_name(),
            key_prefix = %config.key_prefix,
            ttl_seconds = config.ttl_seconds,
            "Tenant cache created"
        );
        Ok(TenantCache::assemble(config, backend, self.events))
    }
}
