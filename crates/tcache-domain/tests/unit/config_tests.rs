//! Unit tests for configuration value objects

use serde_json::json;
use tcache_domain::value_objects::{CacheConfig, CacheMethod, CacheSettings, numeric_ttl};

#[test]
fn test_method_parsing() {
    assert_eq!("file".parse::<CacheMethod>(), Ok(CacheMethod::File));
    assert_eq!("FILE".parse::<CacheMethod>(), Ok(CacheMethod::File));
    assert_eq!("redis".parse::<CacheMethod>(), Ok(CacheMethod::ExternalStore));
    assert_eq!("external".parse::<CacheMethod>(), Ok(CacheMethod::ExternalStore));
    assert_eq!(
        " external_store ".parse::<CacheMethod>(),
        Ok(CacheMethod::ExternalStore)
    );
    assert!("invalid".parse::<CacheMethod>().is_err());
    assert!("".parse::<CacheMethod>().is_err());
}

#[test]
fn test_method_names_round_trip() {
    for method in [CacheMethod::File, CacheMethod::ExternalStore] {
        assert_eq!(method.as_str().parse::<CacheMethod>(), Ok(method));
        assert_eq!(method.to_string(), method.as_str());
    }
}

#[test]
fn test_numeric_ttl_accepts_numbers_and_numeric_strings() {
    assert_eq!(numeric_ttl(&json!(60)), Some(60));
    assert_eq!(numeric_ttl(&json!(-5)), Some(-5));
    assert_eq!(numeric_ttl(&json!(0)), Some(0));
    assert_eq!(numeric_ttl(&json!(90.9)), Some(91));
    assert_eq!(numeric_ttl(&json!("120")), Some(120));
    assert_eq!(numeric_ttl(&json!(" 30 ")), Some(30));
    assert_eq!(numeric_ttl(&json!("1.5")), Some(2));
    assert_eq!(numeric_ttl(&json!(-1.5)), Some(-1));
}

#[test]
fn test_numeric_ttl_sub_second_stays_positive() {
    assert_eq!(numeric_ttl(&json!(0.5)), Some(1));
    assert_eq!(numeric_ttl(&json!("0.001")), Some(1));
    assert_eq!(numeric_ttl(&json!(-0.5)), Some(0));
}

#[test]
fn test_numeric_ttl_rejects_non_numbers() {
    assert_eq!(numeric_ttl(&json!("sixty")), None);
    assert_eq!(numeric_ttl(&json!("")), None);
    assert_eq!(numeric_ttl(&json!("NaN")), None);
    assert_eq!(numeric_ttl(&json!("inf")), None);
    assert_eq!(numeric_ttl(&json!(true)), None);
    assert_eq!(numeric_ttl(&json!(null)), None);
    assert_eq!(numeric_ttl(&json!([60])), None);
    assert_eq!(numeric_ttl(&json!({"ttl": 60})), None);
}

#[test]
fn test_settings_builder() {
    let settings = CacheSettings::new("file")
        .with_storage_dir("/tmp/c")
        .with_ttl_secs(60)
        .with_key_prefix("app_");

    assert_eq!(settings.method.as_deref(), Some("file"));
    assert_eq!(settings.storage_dir, Some("/tmp/c".into()));
    assert_eq!(settings.ttl, Some(json!(60)));
    assert_eq!(settings.key_prefix.as_deref(), Some("app_"));
}

#[test]
fn test_settings_deserialize_with_missing_fields() {
    let settings: CacheSettings = serde_json::from_value(json!({ "method": "redis" })).unwrap();
    assert_eq!(settings.method.as_deref(), Some("redis"));
    assert!(settings.storage_dir.is_none());
    assert!(settings.ttl.is_none());
    assert!(settings.key_prefix.is_none());
}

#[test]
fn test_config_expires() {
    let mut config = CacheConfig {
        method: CacheMethod::ExternalStore,
        storage_dir: None,
        ttl_seconds: 60,
        key_prefix: "th_".to_string(),
    };
    assert!(config.expires());
    config.ttl_seconds = 0;
    assert!(!config.expires());
    config.ttl_seconds = -1;
    assert!(!config.expires());
}
