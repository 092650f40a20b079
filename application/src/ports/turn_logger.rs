//! Port for structured turn logging.
//!
//! Defines the [`TurnLogger`] trait for recording turn events (routing,
//! per-model answers, produced replies, forward requests) to a structured
//! log.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostic messages, while this port captures the turn
//! record in a machine-readable format (JSONL).

use serde_json::Value;

/// A structured turn event for logging.
///
/// Each event has a type string and a JSON payload containing event-specific
/// fields; the adapter adds the timestamp.
pub struct TurnEvent {
    /// Event type identifier (e.g., "turn_started", "model_answer").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl TurnEvent {
    /// Create a new turn event.
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for logging turn events to a structured log.
///
/// Implementations write each event as a single record (e.g., one JSONL
/// line). The `log` method is intentionally synchronous and non-fallible to
/// avoid disrupting the turn flow; logging failures are silently ignored.
pub trait TurnLogger: Send + Sync {
    /// Record a turn event.
    fn log(&self, event: TurnEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoTurnLogger;

impl TurnLogger for NoTurnLogger {
    fn log(&self, _event: TurnEvent) {}
}
