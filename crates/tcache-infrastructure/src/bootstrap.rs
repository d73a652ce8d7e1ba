//! Bootstrap helpers
//!
//! Build a ready-to-use cache from an [`AppConfig`].

use crate::config::AppConfig;
use crate::events::TracingEventRecorder;
use std::sync::Arc;
use tcache_application::TenantCache;
use tcache_domain::error::Result;
use tcache_domain::ports::KeyValueStore;
use tcache_domain::value_objects::CacheMethod;
use tcache_providers::store::RedisStore;
use tracing::info;

/// Build a tenant cache from application configuration
///
/// An injected `store` always wins. Otherwise, when the cache method
/// selects the external store and `store.url` is set, a Redis connection
/// is opened for it. Event reporting through tracing is attached when
/// `logging.record_events` is enabled.
pub fn build_tenant_cache(
    config: &AppConfig,
    store: Option<Arc<dyn KeyValueStore>>,
) -> Result<TenantCache> {
    let mut builder = TenantCache::builder(config.cache.clone());

    let store = match store {
        Some(store) => Some(store),
        None => open_configured_store(config)?,
    };
    if let Some(store) = store {
        builder = builder.with_store(store);
    }

    if config.logging.record_events {
        builder = builder.with_event_recorder(Arc::new(TracingEventRecorder::new()));
    }

    let cache = builder.build()?;
    info!(
        backend = cache.backend_name(),
        ttl_seconds = cache.config().ttl_seconds,
        "Tenant cache ready"
    );
    Ok(cache)
}

fn open_configured_store(config: &AppConfig) -> Result<Option<Arc<dyn KeyValueStore>>> {
    let wants_store = config
        .cache
        .method
        .as_deref()
        .and_then(|method| method.parse::<CacheMethod>().ok())
        == Some(CacheMethod::ExternalStore);

    match (&config.store.url, wants_store) {
        (Some(url), true) => {
            let store: Arc<dyn KeyValueStore> = Arc::new(RedisStore::open(url)?);
            Ok(Some(store))
        }
        _ => Ok(None),
    }
}
