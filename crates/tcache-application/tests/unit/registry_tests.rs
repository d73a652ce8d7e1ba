//! Backend Registry Tests
//!
//! Validates that the linkme registry resolves the real backends.

use std::sync::Arc;
use tcache_application::registry::{
    CacheBackendConfig, list_cache_backends, resolve_cache_backend,
};
use tcache_domain::error::{ConfigError, Error};
use tcache_domain::value_objects::{CacheConfig, CacheMethod};
use tcache_providers::store::InMemoryStore;
use tempfile::TempDir;

fn config(method: CacheMethod, storage_dir: Option<std::path::PathBuf>) -> CacheConfig {
    CacheConfig {
        method,
        storage_dir,
        ttl_seconds: 60,
        key_prefix: "th_".to_string(),
    }
}

#[test]
fn test_backends_are_registered() {
    let names: Vec<&str> = list_cache_backends().into_iter().map(|(n, _)| n).collect();
    assert!(names.contains(&"file"));
    assert!(names.contains(&"external_store"));
}

#[test]
fn test_every_method_has_a_backend() {
    let names: Vec<&str> = list_cache_backends().into_iter().map(|(n, _)| n).collect();
    for method in [CacheMethod::File, CacheMethod::ExternalStore] {
        assert!(names.contains(&method.as_str()), "missing backend for {method}");
    }
}

#[test]
fn test_resolve_file_backend() {
    let dir = TempDir::new().unwrap();
    let backend = resolve_cache_backend(&CacheBackendConfig::new(config(
        CacheMethod::File,
        Some(dir.path().to_path_buf()),
    )))
    .unwrap();
    assert_eq!(backend.backend_name(), "file");
}

#[test]
fn test_resolve_external_backend_with_store() {
    let backend_config = CacheBackendConfig::new(config(CacheMethod::ExternalStore, None))
        .with_store(Arc::new(InMemoryStore::new()));
    let backend = resolve_cache_backend(&backend_config).unwrap();
    assert_eq!(backend.backend_name(), "external_store");
}

#[test]
fn test_resolve_external_backend_requires_store() {
    let result = resolve_cache_backend(&CacheBackendConfig::new(config(
        CacheMethod::ExternalStore,
        None,
    )));
    match result {
        Err(Error::Config(ConfigError::MissingStoreHandle)) => {}
        other => panic!("Expected MissingStoreHandle, got {other:?}"),
    }
}
