//! Value objects
//!
//! Immutable types describing cache configuration and derived keys.

/// Cache configuration (raw settings and validated config)
pub mod config;
/// Derived cache keys
pub mod key;

pub use config::{CacheConfig, CacheMethod, CacheSettings, numeric_ttl};
pub use key::{
    CacheKey, is_tenant_key, resource_digest, tenant_key_pattern, tenant_key_stem,
};
