//! Configuration Validation Tests

use serde_json::json;
use tcache_application::validation::{probe_writable, validate};
use tcache_domain::error::ConfigError;
use tcache_domain::value_objects::{CacheMethod, CacheSettings};
use tempfile::TempDir;

#[test]
fn test_valid_file_settings() {
    let dir = TempDir::new().unwrap();
    let config = validate(
        &CacheSettings::new("file")
            .with_storage_dir(dir.path())
            .with_ttl_secs(60),
    )
    .unwrap();

    assert_eq!(config.method, CacheMethod::File);
    assert_eq!(config.storage_dir.as_deref(), Some(dir.path()));
    assert_eq!(config.ttl_seconds, 60);
    assert_eq!(config.key_prefix, "th_");
}

#[test]
fn test_valid_external_settings_need_no_directory() {
    let config = validate(
        &CacheSettings::new("redis")
            .with_ttl_value("0")
            .with_key_prefix("app_"),
    )
    .unwrap();

    assert_eq!(config.method, CacheMethod::ExternalStore);
    assert!(config.storage_dir.is_none());
    assert_eq!(config.ttl_seconds, 0);
    assert_eq!(config.key_prefix, "app_");
}

#[test]
fn test_invalid_method() {
    let error = validate(&CacheSettings::new("invalid").with_ttl_secs(60)).unwrap_err();
    assert_eq!(
        error,
        ConfigError::InvalidMethod {
            method: Some("invalid".to_string())
        }
    );
}

#[test]
fn test_missing_method() {
    let settings = CacheSettings {
        ttl: Some(json!(60)),
        ..Default::default()
    };
    assert_eq!(
        validate(&settings).unwrap_err(),
        ConfigError::InvalidMethod { method: None }
    );
}

#[test]
fn test_missing_storage_dir() {
    let error = validate(&CacheSettings::new("file").with_ttl_secs(60)).unwrap_err();
    assert_eq!(error, ConfigError::MissingStorageDir);

    let empty = CacheSettings::new("file")
        .with_storage_dir("")
        .with_ttl_secs(60);
    assert_eq!(validate(&empty).unwrap_err(), ConfigError::MissingStorageDir);
}

#[test]
fn test_storage_dir_must_exist() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("does-not-exist");
    let error = validate(
        &CacheSettings::new("file")
            .with_storage_dir(&missing)
            .with_ttl_secs(60),
    )
    .unwrap_err();

    match error {
        ConfigError::StorageDirNotWritable { path, .. } => assert_eq!(path, missing),
        other => panic!("Expected StorageDirNotWritable, got {other:?}"),
    }
}

#[test]
fn test_storage_dir_must_be_a_directory() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("plain-file");
    std::fs::write(&file, "x").unwrap();

    assert!(matches!(
        probe_writable(&file),
        Err(ConfigError::StorageDirNotWritable { .. })
    ));
}

#[test]
fn test_probe_leaves_directory_empty() {
    let dir = TempDir::new().unwrap();
    probe_writable(dir.path()).unwrap();
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_invalid_ttl() {
    let dir = TempDir::new().unwrap();
    let base = CacheSettings::new("file").with_storage_dir(dir.path());

    assert!(matches!(
        validate(&base).unwrap_err(),
        ConfigError::InvalidTtl { .. }
    ));
    assert!(matches!(
        validate(&base.clone().with_ttl_value("sixty")).unwrap_err(),
        ConfigError::InvalidTtl { .. }
    ));
    assert!(matches!(
        validate(&base.with_ttl_value(json!({"secs": 60}))).unwrap_err(),
        ConfigError::InvalidTtl { .. }
    ));
}

#[test]
fn test_checks_run_in_order() {
    // Method is checked before anything else
    let settings = CacheSettings::new("invalid").with_ttl_value("sixty");
    assert!(matches!(
        validate(&settings).unwrap_err(),
        ConfigError::InvalidMethod { .. }
    ));

    // Storage directory is checked before the TTL
    let settings = CacheSettings::new("file").with_ttl_value("sixty");
    assert_eq!(validate(&settings).unwrap_err(), ConfigError::MissingStorageDir);
}
