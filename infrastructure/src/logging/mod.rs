//! Logging infrastructure — structured turn logging.
//!
//! Provides [`JsonlTurnLogger`], a JSONL file writer that implements
//! the [`TurnLogger`](moot_application::TurnLogger) port.

mod jsonl_logger;

pub use jsonl_logger::JsonlTurnLogger;
