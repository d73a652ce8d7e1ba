//! Event Recording Port
//!
//! The cache optionally reports what it was asked to do and what it
//! answered. The recorder decides how events are formatted and where they
//! go.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Kinds of events reported by the cache
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// An operation was requested
    RequestReceived,
    /// An operation produced its result
    ResponseReceived,
}

impl EventKind {
    /// Human readable message for the event
    pub fn message(self) -> &'static str {
        match self {
            Self::RequestReceived => "Request received",
            Self::ResponseReceived => "Response received",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Collaborator accepting leveled events with structured context
pub trait EventRecorder: Send + Sync + fmt::Debug {
    /// Record one event with an arbitrary structured payload
    fn record_event(&self, kind: EventKind, payload: &Value);
}
