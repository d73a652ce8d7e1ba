//! Application Layer - Tenant Cache
//!
//! Wires configuration validation, key derivation and backend dispatch into
//! the [`TenantCache`] facade.
//!
//! ## Components
//!
//! - [`validation`] - Rejects unusable configuration before a cache exists
//! - [`key_deriver`] - Turns (tenant, resource) pairs into storage keys
//! - [`registry`] - Link-time registry of storage backends
//! - [`use_cases`] - The cache facade itself
//!
//! ## Dependencies
//!
//! This crate depends only on `tcache-domain` and pure libraries. Backends
//! live in `tcache-providers` and register themselves into [`registry::CACHE_BACKENDS`].

pub mod key_deriver;
pub mod registry;
pub mod use_cases;
pub mod validation;

pub use key_deriver::KeyDeriver;
pub use registry::{list_cache_backends, resolve_cache_backend};
pub use use_cases::{TenantCache, TenantCacheBuilder};
pub use validation::validate;
