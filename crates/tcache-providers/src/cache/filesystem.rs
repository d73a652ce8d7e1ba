//! Filesystem cache backend
//!
//! One file per entry at `<storage_dir>/<key>.json`, holding the serialized
//! payload and nothing else. Freshness comes from the file's modification
//! time: an entry is fresh while its age in whole seconds is below the TTL.
//!
//! Because the modification time is an external attribute, touching a file
//! makes it fresh again, and a TTL of zero or less makes every entry stale.
//!
//! Writes go to a temporary file in the storage directory which is then
//! renamed over the target, so readers never observe a partial entry.

use crate::constants::{FILESYSTEM_TEMP_FILE_PREFIX, FILESYSTEM_TEMP_FILE_SUFFIX};
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::SystemTime;
use tcache_application::registry::{CACHE_BACKENDS, CacheBackendConfig, CacheBackendEntry};
use tcache_domain::constants::CACHE_FILE_EXTENSION;
use tcache_domain::error::{ConfigError, Error, Result};
use tcache_domain::ports::CacheBackend;
use tcache_domain::value_objects::{CacheKey, is_tenant_key};
use tracing::debug;

/// Filesystem cache backend
#[derive(Debug, Clone)]
pub struct FilesystemCacheBackend {
    storage_dir: PathBuf,
    ttl_seconds: i64,
}

impl FilesystemCacheBackend {
    /// Create a backend storing entries in `storage_dir`
    ///
    /// The directory is not created; it must already exist.
    pub fn new(storage_dir: impl Into<PathBuf>, ttl_seconds: i64) -> Self {
        Self {
            storage_dir: storage_dir.into(),
            ttl_seconds,
        }
    }

    /// Directory holding the entries
    pub fn storage_dir(&self) -> &Path {
        &self.storage_dir
    }

    /// Path of the file backing `key`
    pub fn entry_path(&self, key: &CacheKey) -> PathBuf {
        self.storage_dir.join(key.file_name(CACHE_FILE_EXTENSION))
    }

    /// Whether an entry last modified at `modified` is fresh at `now`
    ///
    /// Age is measured in whole seconds and the entry is fresh iff
    /// `age < ttl`. Modification times in the future count as age zero.
    pub fn is_fresh(&self, modified: SystemTime, now: SystemTime) -> bool {
        let age = now
            .duration_since(modified)
            .map_or(0, |elapsed| elapsed.as_secs());
        i64::try_from(age).unwrap_or(i64::MAX) < self.ttl_seconds
    }

    /// Paths of every cache file in the storage directory
    ///
    /// Matching is on the raw extension, so file names that are not valid
    /// UTF-8 are listed too.
    fn cache_files(&self) -> Result<Vec<PathBuf>> {
        let entries = fs::read_dir(&self.storage_dir).map_err(|e| {
            Error::io_with_source(
                format!("Failed to list {}", self.storage_dir.display()),
                e,
            )
        })?;

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry?;
            let path = entry.path();
            let is_cache_file = path
                .extension()
                .is_some_and(|ext| ext == CACHE_FILE_EXTENSION);
            if is_cache_file && entry.file_type()?.is_file() {
                files.push(path);
            }
        }
        Ok(files)
    }

    fn remove_file(path: &Path) -> Result<bool> {
        match fs::remove_file(path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(Error::io_with_source(
                format!("Failed to remove {}", path.display()),
                e,
            )),
        }
    }
}

impl CacheBackend for FilesystemCacheBackend {
    fn put(&self, key: &CacheKey, payload: &str) -> Result<bool> {
        let path = self.entry_path(key);

        let mut temp = tempfile::Builder::new()
            .prefix(FILESYSTEM_TEMP_FILE_PREFIX)
            .suffix(FILESYSTEM_TEMP_FILE_SUFFIX)
            .tempfile_in(&self.storage_dir)
            .map_err(|e| Error::io_with_source("Failed to create temporary cache file", e))?;
        temp.write_all(payload.as_bytes())
            .map_err(|e| Error::io_with_source("Failed to write temporary cache file", e))?;
        temp.persist(&path).map_err(|e| {
            Error::io_with_source(format!("Failed to replace {}", path.display()), e.error)
        })?;

        debug!(path = %path.display(), bytes = payload.len(), "Cache file written");
        Ok(true)
    }

    fn fetch(&self, key: &CacheKey) -> Result<Option<String>> {
        let path = self.entry_path(key);

        let modified = match fs::metadata(&path) {
            Ok(metadata) => metadata.modified()?,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        if !self.is_fresh(modified, SystemTime::now()) {
            debug!(path = %path.display(), "Cache file is stale");
            return Ok(None);
        }

        match fs::read_to_string(&path) {
            Ok(payload) => Ok(Some(payload)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(Error::io_with_source(
                format!("Failed to read {}", path.display()),
                e,
            )),
        }
    }

    fn remove(&self, key: &CacheKey) -> Result<()> {
        Self::remove_file(&self.entry_path(key)).map(drop)
    }

    fn remove_tenant(&self, key_prefix: &str, tenant: &str) -> Result<usize> {
        let mut removed = 0;
        for path in self.cache_files()? {
            let owned = path
                .file_stem()
                .and_then(|stem| stem.to_str())
                .is_some_and(|stem| is_tenant_key(stem, key_prefix, tenant));
            if owned && Self::remove_file(&path)? {
                removed += 1;
            }
        }
        Ok(removed)
    }

    fn remove_all(&self) -> Result<()> {
        for path in self.cache_files()? {
            Self::remove_file(&path)?;
        }
        Ok(())
    }

    fn backend_name(&self) -> &str {
        "file"
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

fn filesystem_backend_factory(config: &CacheBackendConfig) -> Result<Arc<dyn CacheBackend>> {
    let storage_dir = config
        .config
        .storage_dir
        .clone()
        .ok_or(ConfigError::MissingStorageDir)?;

    Ok(Arc::new(FilesystemCacheBackend::new(
        storage_dir,
        config.config.ttl_seconds,
    )))
}

#[linkme::distributed_slice(CACHE_BACKENDS)]
static FILESYSTEM_BACKEND: CacheBackendEntry = CacheBackendEntry {
    name: "file",
    description: "One JSON file per entry, expiry from modification time",
    factory: filesystem_backend_factory,
};
