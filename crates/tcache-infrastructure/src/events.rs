//! Event recorders
//!
//! Implementations of the [`EventRecorder`] port.

use serde_json::Value;
use tcache_domain::ports::{EventKind, EventRecorder};
use tracing::info;

/// Emits cache events as `info` level tracing events
///
/// The payload is attached as a JSON field named `payload`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingEventRecorder;

impl TracingEventRecorder {
    /// Create a new recorder
    pub fn new() -> Self {
        Self
    }
}

impl EventRecorder for TracingEventRecorder {
    fn record_event(&self, kind: EventKind, payload: &Value) {
        match kind {
            EventKind::RequestReceived => {
                info!(target: "tcache::events", event = ?kind, payload = %payload, "Request received");
            }
            EventKind::ResponseReceived => {
                info!(target: "tcache::events", event = ?kind, payload = %payload, "Response received");
            }
        }
    }
}

/// Discards every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NullEventRecorder;

impl EventRecorder for NullEventRecorder {
    fn record_event(&self, _kind: EventKind, _payload: &Value) {}
}
