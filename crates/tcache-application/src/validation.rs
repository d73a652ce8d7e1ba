//! Configuration validation
//!
//! Turns raw [`CacheSettings`] into a [`CacheConfig`]. Checks run in a
//! fixed order and stop at the first violation:
//!
//! 1. the method names a recognized backend
//! 2. the filesystem backend has a storage directory
//! 3. that directory is writable
//! 4. the TTL is present and numeric
//!
//! The only side effect is the writability probe, which creates and
//! immediately removes a temporary file in the storage directory.

use std::path::Path;
use tcache_domain::constants::DEFAULT_KEY_PREFIX;
use tcache_domain::error::ConfigError;
use tcache_domain::value_objects::{CacheConfig, CacheMethod, CacheSettings, numeric_ttl};

/// Prefix of the temporary file created by the writability probe
const PROBE_FILE_PREFIX: &str = ".tcache-probe";

/// Validate raw settings
pub fn validate(settings: &CacheSettings) -> Result<CacheConfig, ConfigError> {
    let method = settings
        .method
        .as_deref()
        .and_then(|m| m.parse::<CacheMethod>().ok())
        .ok_or_else(|| ConfigError::InvalidMethod {
            method: settings.method.clone(),
        })?;

    let storage_dir = match method {
        CacheMethod::File => {
            let dir = settings
                .storage_dir
                .as_ref()
                .filter(|dir| !dir.as_os_str().is_empty())
                .ok_or(ConfigError::MissingStorageDir)?;
            probe_writable(dir)?;
            Some(dir.clone())
        }
        CacheMethod::ExternalStore => settings.storage_dir.clone(),
    };

    let ttl_seconds = settings
        .ttl
        .as_ref()
        .and_then(numeric_ttl)
        .ok_or_else(|| ConfigError::InvalidTtl {
            value: settings
                .ttl
                .as_ref()
                .map_or_else(|| "(none)".to_string(), ToString::to_string),
        })?;

    Ok(CacheConfig {
        method,
        storage_dir,
        ttl_seconds,
        key_prefix: settings
            .key_prefix
            .clone()
            .unwrap_or_else(|| DEFAULT_KEY_PREFIX.to_string()),
    })
}

/// Check that `dir` is an existing directory this process can create files in
pub fn probe_writable(dir: &Path) -> Result<(), ConfigError> {
    let not_writable = |reason: String| ConfigError::StorageDirNotWritable {
        path: dir.to_path_buf(),
        reason,
    };

    let metadata = std::fs::metadata(dir).map_err(|e| not_writable(e.to_string()))?;
    if !metadata.is_dir() {
        return Err(not_writable("not a directory".to_string()));
    }

    tempfile::Builder::new()
        .prefix(PROBE_FILE_PREFIX)
        .tempfile_in(dir)
        .map(drop)
        .map_err(|e| not_writable(e.to_string()))
}
