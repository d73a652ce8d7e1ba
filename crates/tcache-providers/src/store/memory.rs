//! In-memory key-value store
//!
//! A process-local [`KeyValueStore`] with native expiry. Expired values are
//! dropped lazily when they are touched. Useful for tests and for
//! single-process deployments that still want store semantics.

use dashmap::DashMap;
use globset::GlobBuilder;
use std::time::{Duration, Instant};
use tcache_domain::error::{Error, Result};
use tcache_domain::ports::KeyValueStore;

#[derive(Debug, Clone)]
struct StoredValue {
    value: String,
    expires_at: Option<Instant>,
}

impl StoredValue {
    fn is_expired(&self, now: Instant) -> bool {
        self.expires_at.is_some_and(|at| at <= now)
    }
}

/// In-memory key-value store
///
/// # Example
///
/// ```
/// use tcache_domain::ports::KeyValueStore;
/// use tcache_providers::store::InMemoryStore;
///
/// let store = InMemoryStore::new();
/// store.set("k", "v").unwrap();
/// assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
/// ```
#[derive(Debug, Default)]
pub struct InMemoryStore {
    entries: DashMap<String, StoredValue>,
}

impl InMemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live (unexpired) values
    pub fn len(&self) -> usize {
        let now = Instant::now();
        self.entries
            .iter()
            .filter(|entry| !entry.is_expired(now))
            .count()
    }

    /// Whether the store holds no live values
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn insert(&self, key: &str, value: &str, expires_at: Option<Instant>) {
        self.entries.insert(
            key.to_string(),
            StoredValue {
                value: value.to_string(),
                expires_at,
            },
        );
    }
}

impl KeyValueStore for InMemoryStore {
    fn set(&self, key: &str, value: &str) -> Result<bool> {
        self.insert(key, value, None);
        Ok(true)
    }

    fn set_with_ttl(&self, key: &str, value: &str, ttl_secs: u64) -> Result<bool> {
        let expires_at = Instant::now().checked_add(Duration::from_secs(ttl_secs));
        self.insert(key, value, expires_at);
        Ok(true)
    }

    fn get(&self, key: &str) -> Result<Option<String>> {
        let now = Instant::now();
        if let Some(entry) = self.entries.get(key) {
            if !entry.is_expired(now) {
                return Ok(Some(entry.value.clone()));
            }
        } else {
            return Ok(None);
        }
        self.entries.remove_if(key, |_, entry| entry.is_expired(now));
        Ok(None)
    }

    fn delete(&self, keys: &[String]) -> Result<usize> {
        let now = Instant::now();
        Ok(keys
            .iter()
            .filter_map(|key| self.entries.remove(key))
            .filter(|(_, entry)| !entry.is_expired(now))
            .count())
    }

    fn keys(&self, pattern: &str) -> Result<Vec<String>> {
        let matcher = GlobBuilder::new(pattern)
            .literal_separator(false)
            .backslash_escape(true)
            .build()
            .map_err(|e| Error::store_with_source(format!("Invalid key pattern '{pattern}'"), e))?
            .compile_matcher();

        let now = Instant::now();
        Ok(self
            .entries
            .iter()
            .filter(|entry| !entry.is_expired(now) && matcher.is_match(entry.key()))
            .map(|entry| entry.key().clone())
            .collect())
    }

    fn flush_all(&self) -> Result<()> {
        self.entries.clear();
        Ok(())
    }

    fn store_name(&self) -> &str {
        "memory"
    }
}
