//! Key-Value Store Port
//!
//! The narrow slice of an external store (Redis or compatible) the external
//! store backend needs. Handles are created and owned by the caller; the
//! cache never opens or closes the underlying connection.

use crate::error::Result;
use std::fmt;

/// External key-value store with native expiry and pattern listing
pub trait KeyValueStore: Send + Sync + fmt::Debug {
    /// Store a value without expiry
    fn set(&self, key: &str, value: &str) -> Result<bool>;

    /// Store a value that the store expires after `ttl_secs` seconds
    fn set_with_ttl(&self, key: &str, value: &str, ttl_secs: u64) -> Result<bool>;

    /// Read a value; expired values are absent
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Delete keys, returning how many existed
    fn delete(&self, keys: &[String]) -> Result<usize>;

    /// List keys matching a glob-style pattern (`*`, `?`, `[...]`, `\` escapes)
    fn keys(&self, pattern: &str) -> Result<Vec<String>>;

    /// Remove every key in every namespace of the store
    fn flush_all(&self) -> Result<()>;

    /// Identifier of the store implementation (e.g. "redis")
    fn store_name(&self) -> &str;
}
