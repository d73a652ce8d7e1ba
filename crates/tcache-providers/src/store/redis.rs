//! Redis key-value store
//!
//! Adapts a caller-owned, already established Redis connection to the
//! [`KeyValueStore`] port. The caller keeps its own handle to the
//! connection; this store only locks it for the duration of one command.
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::{Arc, Mutex};
//! use tcache_providers::store::RedisStore;
//!
//! let client = redis::Client::open("redis://127.0.0.1/")?;
//! let connection = Arc::new(Mutex::new(client.get_connection()?));
//! let store = RedisStore::new(Arc::clone(&connection));
//! ```

use redis::{ConnectionLike, FromRedisValue, RedisResult};
use std::fmt;
use std::sync::{Arc, Mutex};
use tcache_domain::error::{Error, Result};
use tcache_domain::ports::KeyValueStore;

/// Redis-backed key-value store
pub struct RedisStore<C = redis::Connection> {
    connection: Arc<Mutex<C>>,
}

impl<C: ConnectionLike + Send> RedisStore<C> {
    /// Wrap a shared connection handle
    pub fn new(connection: Arc<Mutex<C>>) -> Self {
        Self { connection }
    }

    /// Run one command on the locked connection
    fn query<T: FromRedisValue>(&self, name: &str, cmd: &redis::Cmd) -> Result<T> {
        let mut connection = self
            .connection
            .lock()
            .map_err(|_| Error::store("Redis connection lock poisoned"))?;
        let result: RedisResult<T> = cmd.query(&mut *connection);
        result.map_err(|e| Error::store_with_source(format!("Redis {name} failed: {e}"), e))
    }
}

impl RedisStore<redis::Connection> {
    /// Open a connection to `url` and wrap it
    ///
    /// Convenience for callers that do not manage a connection themselves.
    pub fn open(url: &str) -> Result<Self> {
        let client = redis::Client::open(url).map_err(|e| {
            Error::store_with_source(format!("Failed to create Redis client: {e}"), e)
        })?;
        let connection = client.get_connection().map_err(|e| {
            Error::store_with_source(format!("Failed to connect to Redis: {e}"), e)
        })?;
        Ok(Self::new(Arc::new(Mutex::new(connection))))
    }
}

impl<C: ConnectionLike + Send> KeyValueStore for RedisStore<C> {
    fn set(&self, key: &str, value: &str) -> Result<bool> {
        self.query::<()>("SET", redis::cmd("SET").arg(key).arg(value))?;
        Ok(true)
    }

    fn set_with_ttl(&self, key: &str, value: &str, ttl_secs: u64) -> Result<bool> {
        self.query::<()>(
            "SETEX",
            redis::cmd("SETEX").arg(key).arg(ttl_secs).arg(value),
        )?;
        Ok(true)
    }

    fn get(&self, key: &str) -> Result<Option<String>> {
        self.query("GET", redis::cmd("GET").arg(key))
    }

    fn delete(&self, keys: &[String]) -> Result<usize> {
        if keys.is_empty() {
            return Ok(0);
        }
        self.query("DEL", redis::cmd("DEL").arg(keys))
    }

    fn keys(&self, pattern: &str) -> Result<Vec<String>> {
        self.query("KEYS", redis::cmd("KEYS").arg(pattern))
    }

    fn flush_all(&self) -> Result<()> {
        self.query("FLUSHALL", &redis::cmd("FLUSHALL"))
    }

    fn store_name(&self) -> &str {
        "redis"
    }
}

impl<C> fmt::Debug for RedisStore<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RedisStore").finish_non_exhaustive()
    }
}
