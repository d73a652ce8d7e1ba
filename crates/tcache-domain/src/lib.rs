//! # Tenant Cache - Domain Layer
//!
//! Core types of the tenant-aware cache: the error taxonomy, configuration
//! and key value objects, and the ports that storage backends and
//! collaborators implement.
//!
//! ## Modules
//!
//! - [`error`] - `Error`, `ConfigError` and the `Result` alias
//! - [`constants`] - Key and storage layout constants
//! - [`value_objects`] - `CacheSettings`, `CacheConfig`, `CacheMethod`, `CacheKey`
//! - [`ports`] - `CacheBackend`, `KeyValueStore`, `EventRecorder`

pub mod constants;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use error::{ConfigError, Error, Result};
pub use ports::{CacheBackend, EventKind, EventRecorder, KeyValueStore};
pub use value_objects::{CacheConfig, CacheKey, CacheMethod, CacheSettings};
