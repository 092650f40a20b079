//! OpenRouter chat adapter
//!
//! Implements `ChatBackend` against the OpenRouter chat-completions API.

pub mod gateway;
pub mod wire;

pub use gateway::OpenRouterBackend;
