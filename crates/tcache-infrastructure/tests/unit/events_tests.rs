//! Event Recorder Tests

use serde_json::json;
use std::sync::Arc;
use tcache_application::TenantCache;
use tcache_domain::ports::{EventKind, EventRecorder};
use tcache_domain::value_objects::CacheSettings;
use tcache_infrastructure::events::{NullEventRecorder, TracingEventRecorder};
use tempfile::TempDir;

#[test]
fn test_recorders_accept_both_kinds() {
    let payload = json!({ "operation": "get", "tenant": "t1" });
    for recorder in [
        Arc::new(TracingEventRecorder::new()) as Arc<dyn EventRecorder>,
        Arc::new(NullEventRecorder) as Arc<dyn EventRecorder>,
    ] {
        recorder.record_event(EventKind::RequestReceived, &payload);
        recorder.record_event(EventKind::ResponseReceived, &payload);
    }
}

#[test]
fn test_cache_with_tracing_recorder() {
    let dir = TempDir::new().unwrap();
    let cache = TenantCache::builder(
        CacheSettings::new("file")
            .with_storage_dir(dir.path())
            .with_ttl_secs(60),
    )
    .with_event_recorder(Arc::new(TracingEventRecorder::new()))
    .build()
    .unwrap();

    assert!(cache.save("t1", "/a", &json!({"x": 1})));
    assert_eq!(cache.get::<serde_json::Value>("t1", "/a"), Some(json!({"x": 1})));
}
