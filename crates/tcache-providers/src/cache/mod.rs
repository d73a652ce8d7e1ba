//! Cache Backend Implementations
//!
//! ## Available Backends
//!
//! | Backend | Registry name | Description |
//! |---------|---------------|-------------|
//! | [`FilesystemCacheBackend`] | `file` | One JSON file per entry in a storage directory |
//! | [`ExternalStoreCacheBackend`] | `external_store` | Delegates to an injected key-value store |

pub mod external;
pub mod filesystem;

pub use external::ExternalStoreCacheBackend;
pub use filesystem::FilesystemCacheBackend;
