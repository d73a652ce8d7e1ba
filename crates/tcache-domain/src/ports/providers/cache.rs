//! Cache Backend Port
//!
//! Physical storage contract shared by every backend. Backends report
//! failures through [`Result`]; the cache facade is the boundary that turns
//! them into booleans and misses.

use crate::error::Result;
use crate::value_objects::CacheKey;
use std::fmt;

/// Cache Backend Port
///
/// Backends receive already derived keys and already serialized payloads.
/// Expiry is the backend's concern: the filesystem backend compares file
/// age against the TTL, the external store delegates to the store.
///
/// # Implementations
///
/// - **Filesystem**: one file per entry, freshness from modification time
/// - **External store**: delegates to an injected [`KeyValueStore`](super::KeyValueStore)
pub trait CacheBackend: Send + Sync + fmt::Debug {
    /// Store a payload under a key, replacing any previous entry
    ///
    /// # Returns
    /// The success signal of the underlying storage
    fn put(&self, key: &CacheKey, payload: &str) -> Result<bool>;

    /// Read a fresh payload
    ///
    /// # Returns
    /// `None` if the entry does not exist or has expired
    fn fetch(&self, key: &CacheKey) -> Result<Option<String>>;

    /// Remove one entry; absent entries are not an error
    fn remove(&self, key: &CacheKey) -> Result<()>;

    /// Remove every entry of a tenant under the given key prefix
    ///
    /// # Returns
    /// The number of removed entries
    fn remove_tenant(&self, key_prefix: &str, tenant: &str) -> Result<usize>;

    /// Remove every entry the backend can see, regardless of prefix
    fn remove_all(&self) -> Result<()>;

    /// Identifier of this backend implementation (e.g. "file")
    fn backend_name(&self) -> &str;
}
