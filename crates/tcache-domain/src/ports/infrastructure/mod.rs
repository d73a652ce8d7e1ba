//! Infrastructure service ports

/// Event recording port
pub mod events;

pub use events::{EventKind, EventRecorder};
