//! Storage provider ports

/// Cache backend port
pub mod cache;
/// External key-value store port
pub mod store;

pub use cache::CacheBackend;
pub use store::KeyValueStore;
