//! Use cases

/// Tenant-aware cache facade
pub mod tenant_cache;

pub use tenant_cache::{TenantCache, TenantCacheBuilder};
