//! Infrastructure Layer - Tenant Cache
//!
//! Cross-cutting concerns around the cache facade.
//!
//! - [`config`] - figment-based configuration loading
//! - [`logging`] - tracing subscriber setup and rotating log files
//! - [`events`] - tracing-backed event recorder
//! - [`bootstrap`] - building a cache from configuration
//! - [`async_cache`] - tokio wrapper over the blocking cache

pub mod async_cache;
pub mod bootstrap;
pub mod config;
pub mod constants;
pub mod error_ext;
pub mod events;
pub mod logging;

pub use async_cache::AsyncTenantCache;
pub use bootstrap::build_tenant_cache;
pub use config::{AppConfig, ConfigLoader, LoggingConfig, StoreConfig};
pub use error_ext::ErrorContext;
pub use events::{NullEventRecorder, TracingEventRecorder};
pub use logging::{LoggingGuard, init_logging, log_file_path, parse_log_level};
