//! Key derivation with a mutable prefix
//!
//! The prefix can change at runtime. A change only affects keys derived
//! afterwards; entries stored under the old prefix stay where they are.

use std::sync::{PoisonError, RwLock};
use tcache_domain::value_objects::CacheKey;

/// Derives namespaced keys from tenant handles and resource identifiers
#[derive(Debug)]
pub struct KeyDeriver {
    prefix: RwLock<String>,
}

impl KeyDeriver {
    /// Create a deriver with the given initial prefix
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: RwLock::new(prefix.into()),
        }
    }

    /// Derive the key of a tenant's resource under the current prefix
    pub fn form_key(&self, tenant: &str, uri: &str) -> CacheKey {
        let prefix = self.prefix.read().unwrap_or_else(PoisonError::into_inner);
        CacheKey::derive(&prefix, tenant, uri)
    }

    /// Replace the prefix for subsequent derivations
    pub fn set_prefix(&self, prefix: impl Into<String>) {
        let mut current = self.prefix.write().unwrap_or_else(PoisonError::into_inner);
        *current = prefix.into();
    }

    /// The current prefix
    pub fn prefix(&self) -> String {
        self.prefix
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}
