//! Backend registry
//!
//! Backends register themselves at link time through a `linkme`
//! distributed slice, so adding a backend never touches the cache facade.

pub mod backend;

pub use backend::{
    CACHE_BACKENDS, CacheBackendConfig, CacheBackendEntry, list_cache_backends,
    resolve_cache_backend,
};
