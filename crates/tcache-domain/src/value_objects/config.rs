//! Cache configuration value objects
//!
//! [`CacheSettings`] is the raw, unvalidated shape that callers and
//! configuration files provide. [`CacheConfig`] is what survives
//! validation and is immutable for the lifetime of a cache instance.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Storage backend selected for a cache instance
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum CacheMethod {
    /// One file per entry inside a storage directory
    File,
    /// An external key-value store (Redis or compatible)
    ExternalStore,
}

impl CacheMethod {
    /// Canonical name, also used as the backend registry key
    pub fn as_str(self) -> &'static str {
        match self {
            Self::File => "file",
            Self::ExternalStore => "external_store",
        }
    }
}

impl fmt::Display for CacheMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CacheMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "file" => Ok(Self::File),
            "redis" | "external" | "external_store" => Ok(Self::ExternalStore),
            other => Err(format!("unrecognized cache method '{other}'")),
        }
    }
}

/// Raw cache settings as provided by callers or configuration sources
///
/// Every field is optional so that absence can be reported precisely
/// during validation.
///
/// # Example
///
/// ```
/// use tcache_domain::value_objects::CacheSettings;
///
/// let settings = CacheSettings::new("file")
///     .with_storage_dir("/tmp/cache")
///     .with_ttl_secs(60);
/// assert_eq!(settings.method.as_deref(), Some("file"));
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CacheSettings {
    /// Backend name (`file`, `redis`, `external`, `external_store`)
    pub method: Option<String>,
    /// Storage directory for the filesystem backend
    pub storage_dir: Option<PathBuf>,
    /// Time to live in seconds; numbers or numeric strings
    pub ttl: Option<Value>,
    /// Prefix for derived keys
    pub key_prefix: Option<String>,
}

impl CacheSettings {
    /// Create settings for the given backend method
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: Some(method.into()),
            ..Default::default()
        }
    }

    /// Set the storage directory
    pub fn with_storage_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.storage_dir = Some(dir.into());
        self
    }

    /// Set the TTL in seconds
    pub fn with_ttl_secs(mut self, secs: i64) -> Self {
        self.ttl = Some(Value::from(secs));
        self
    }

    /// Set the TTL from an arbitrary value (validated later)
    pub fn with_ttl_value(mut self, ttl: impl Into<Value>) -> Self {
        self.ttl = Some(ttl.into());
        self
    }

    /// Set the key prefix
    pub fn with_key_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.key_prefix = Some(prefix.into());
        self
    }
}

/// Interpret a TTL value as whole seconds
///
/// Accepts JSON numbers and strings holding a number. Fractional values
/// round up to the next whole second, so a positive TTL below one second
/// still expires; out-of-range values saturate. Returns `None` for
/// anything that is not numeric.
pub fn numeric_ttl(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(ceil_secs)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>().ok().or_else(|| {
                s.parse::<f64>()
                    .ok()
                    .filter(|f| f.is_finite())
                    .map(ceil_secs)
            })
        }
        _ => None,
    }
}

#[allow(clippy::cast_possible_truncation)]
fn ceil_secs(secs: f64) -> i64 {
    secs.ceil() as i64
}

/// Validated cache configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CacheConfig {
    /// Active backend
    pub method: CacheMethod,
    /// Storage directory (filesystem backend only)
    pub storage_dir: Option<PathBuf>,
    /// Time to live in seconds. Zero or negative disables expiry on the
    /// external store; on the filesystem every entry is then stale.
    pub ttl_seconds: i64,
    /// Initial key prefix
    pub key_prefix: String,
}

impl CacheConfig {
    /// Whether entries written by the external store should carry a TTL
    pub fn expires(&self) -> bool {
        self.ttl_seconds > 0
    }
}
