//! Filesystem Backend Tests

use std::fs;
use std::path::Path;
use std::time::{Duration, SystemTime};
use tcache_domain::ports::CacheBackend;
use tcache_domain::value_objects::CacheKey;
use tcache_providers::cache::FilesystemCacheBackend;
use tempfile::TempDir;

fn backend(ttl_seconds: i64) -> (TempDir, FilesystemCacheBackend) {
    let dir = TempDir::new().unwrap();
    let backend = FilesystemCacheBackend::new(dir.path(), ttl_seconds);
    (dir, backend)
}

/// Move a file's modification time `secs` seconds into the past
fn age_file(path: &Path, secs: u64) {
    let file = fs::File::options().write(true).open(path).unwrap();
    file.set_modified(SystemTime::now() - Duration::from_secs(secs))
        .unwrap();
}

fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn test_put_then_fetch() {
    let (_dir, backend) = backend(60);
    let key = CacheKey::derive("th_", "tenantA", "/users/1");

    assert!(backend.put(&key, r#"{"name":"Bob"}"#).unwrap());
    assert_eq!(
        backend.fetch(&key).unwrap().as_deref(),
        Some(r#"{"name":"Bob"}"#)
    );
}

#[test]
fn test_entry_layout_has_no_header() {
    let (dir, backend) = backend(60);
    let key = CacheKey::derive("th_", "tenantA", "/users/1");
    backend.put(&key, "[1,2,3]").unwrap();

    let path = dir.path().join(format!("{key}.json"));
    assert_eq!(backend.entry_path(&key), path);
    assert_eq!(fs::read_to_string(path).unwrap(), "[1,2,3]");
}

#[test]
fn test_fetch_missing_is_none() {
    let (_dir, backend) = backend(60);
    let key = CacheKey::derive("th_", "tenantA", "/missing");
    assert!(backend.fetch(&key).unwrap().is_none());
}

#[test]
fn test_stale_entry_is_absent_but_kept() {
    let (_dir, backend) = backend(60);
    let key = CacheKey::derive("th_", "tenantA", "/users/1");
    backend.put(&key, "1").unwrap();

    age_file(&backend.entry_path(&key), 61);

    assert!(backend.fetch(&key).unwrap().is_none());
    assert!(backend.entry_path(&key).exists());
}

#[test]
fn test_entry_just_under_ttl_is_fresh() {
    let (_dir, backend) = backend(60);
    let key = CacheKey::derive("th_", "tenantA", "/users/1");
    backend.put(&key, "1").unwrap();

    age_file(&backend.entry_path(&key), 50);

    assert_eq!(backend.fetch(&key).unwrap().as_deref(), Some("1"));
}

#[test]
fn test_freshness_boundary() {
    let (_dir, backend) = backend(60);
    let now = SystemTime::now();

    assert!(!backend.is_fresh(now - Duration::from_secs(60), now));
    assert!(backend.is_fresh(now - Duration::from_millis(59_999), now));
    assert!(backend.is_fresh(now - Duration::from_secs(59), now));
    assert!(backend.is_fresh(now + Duration::from_secs(30), now));
}

#[test]
fn test_non_positive_ttl_is_always_stale() {
    let now = SystemTime::now();
    for ttl in [0, -1] {
        let (_dir, backend) = backend(ttl);
        let key = CacheKey::derive("th_", "tenantA", "/users/1");
        backend.put(&key, "1").unwrap();

        assert!(!backend.is_fresh(now, now));
        assert!(backend.fetch(&key).unwrap().is_none());
    }
}

#[test]
fn test_put_overwrites_and_leaves_no_temporary_files() {
    let (dir, backend) = backend(60);
    let key = CacheKey::derive("th_", "tenantA", "/users/1");

    backend.put(&key, "first").unwrap();
    backend.put(&key, "second").unwrap();

    assert_eq!(backend.fetch(&key).unwrap().as_deref(), Some("second"));
    assert_eq!(file_names(dir.path()), vec![key.file_name("json")]);
}

#[test]
fn test_put_into_missing_directory_fails() {
    let dir = TempDir::new().unwrap();
    let backend = FilesystemCacheBackend::new(dir.path().join("gone"), 60);
    let key = CacheKey::derive("th_", "tenantA", "/users/1");

    assert!(backend.put(&key, "1").is_err());
}

#[test]
fn test_remove_is_idempotent() {
    let (_dir, backend) = backend(60);
    let key = CacheKey::derive("th_", "tenantA", "/users/1");
    backend.put(&key, "1").unwrap();

    backend.remove(&key).unwrap();
    backend.remove(&key).unwrap();
    assert!(backend.fetch(&key).unwrap().is_none());
}

#[test]
fn test_remove_tenant_is_scoped() {
    let (_dir, backend) = backend(60);
    let a1 = CacheKey::derive("th_", "a", "/1");
    let a2 = CacheKey::derive("th_", "a", "/2");
    let ab = CacheKey::derive("th_", "ab", "/1");
    let other_prefix = CacheKey::derive("v2_", "a", "/1");
    for key in [&a1, &a2, &ab, &other_prefix] {
        backend.put(key, "1").unwrap();
    }

    assert_eq!(backend.remove_tenant("th_", "a").unwrap(), 2);

    assert!(backend.fetch(&a1).unwrap().is_none());
    assert!(backend.fetch(&a2).unwrap().is_none());
    assert!(backend.fetch(&ab).unwrap().is_some());
    assert!(backend.fetch(&other_prefix).unwrap().is_some());
}

#[test]
fn test_remove_tenant_spares_tenants_sharing_the_stem() {
    let (_dir, backend) = backend(60);
    let a = CacheKey::derive("th_", "a", "/x");
    let a_b = CacheKey::derive("th_", "a_b", "/x");
    backend.put(&a, "1").unwrap();
    backend.put(&a_b, "7").unwrap();

    assert_eq!(backend.remove_tenant("th_", "a").unwrap(), 1);

    assert!(backend.fetch(&a).unwrap().is_none());
    assert_eq!(backend.fetch(&a_b).unwrap().as_deref(), Some("7"));
}

#[test]
fn test_remove_tenant_ignores_files_without_digest() {
    let (dir, backend) = backend(60);
    fs::write(dir.path().join("th_a_notes.json"), "{}").unwrap();

    assert_eq!(backend.remove_tenant("th_", "a").unwrap(), 0);
    assert!(dir.path().join("th_a_notes.json").exists());
}

#[cfg(unix)]
#[test]
fn test_remove_all_handles_non_utf8_names() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let (dir, backend) = backend(60);
    let odd = dir.path().join(OsStr::from_bytes(b"th_\xff\xfe.json"));
    fs::write(&odd, "{}").unwrap();
    backend.put(&CacheKey::derive("th_", "a", "/1"), "1").unwrap();

    backend.remove_tenant("th_", "a").unwrap();
    assert!(odd.exists());

    backend.remove_all().unwrap();
    assert!(!odd.exists());
    assert!(file_names(dir.path()).is_empty());
}

#[test]
fn test_remove_all_ignores_prefix_but_keeps_foreign_files() {
    let (dir, backend) = backend(60);
    backend.put(&CacheKey::derive("th_", "a", "/1"), "1").unwrap();
    backend.put(&CacheKey::derive("v2_", "b", "/1"), "1").unwrap();
    fs::write(dir.path().join("manual.json"), "{}").unwrap();
    fs::write(dir.path().join("notes.txt"), "keep me").unwrap();

    backend.remove_all().unwrap();

    assert_eq!(file_names(dir.path()), vec!["notes.txt".to_string()]);
}

#[test]
fn test_backend_name() {
    let (_dir, backend) = backend(60);
    assert_eq!(backend.backend_name(), "file");
}
