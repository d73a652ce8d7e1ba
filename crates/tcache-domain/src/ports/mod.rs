//! Domain Port Interfaces
//!
//! Boundary contracts between the cache core and the outside world.
//!
//! ## Organization
//!
//! - **providers/** - Storage ports (cache backends, key-value stores)
//! - **infrastructure/** - Cross-cutting collaborators (event recording)

/// Infrastructure service ports
pub mod infrastructure;
/// Storage provider ports
pub mod providers;

pub use infrastructure::{EventKind, EventRecorder};
pub use providers::{CacheBackend, KeyValueStore};
