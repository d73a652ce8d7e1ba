//! Key-Value Store Implementations
//!
//! | Store | Feature | Description |
//! |-------|---------|-------------|
//! | [`InMemoryStore`] | `store-memory` | Process-local, lazy expiry |
//! | [`RedisStore`] | `store-redis` | Caller-owned Redis connection |

#[cfg(feature = "store-memory")]
pub mod memory;
#[cfg(feature = "store-redis")]
pub mod redis;

#[cfg(feature = "store-memory")]
pub use memory::InMemoryStore;
#[cfg(feature = "store-redis")]
pub use redis::RedisStore;
