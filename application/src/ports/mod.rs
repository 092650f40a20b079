//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod chat_backend;
pub mod forward_intent;
pub mod persistence;
pub mod progress;
pub mod turn_logger;
