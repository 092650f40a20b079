//! Chat backend port
//!
//! Defines the interface for issuing one completion call against an LLM
//! backend.

use async_trait::async_trait;
use moot_domain::{Message, SamplingParams};
use thiserror::Error;

/// Errors that can occur during a backend call
#[derive(Error, Debug)]
pub enum BackendError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Missing credentials: {0}")]
    MissingCredentials(String),

    #[error("Request timed out")]
    Timeout,
}

/// Gateway for one-shot chat completions
///
/// This port defines how the application layer talks to LLM backends.
/// Implementations (adapters) live in the infrastructure layer. Calls are
/// stateless: the full message list is supplied every time, and the caller
/// owns the conversation history.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    /// Issue one completion call and return the raw answer text.
    ///
    /// `backend_id` is the provider-side model identifier from the registry,
    /// not the registry key. An empty answer is returned as-is; substituting
    /// a placeholder is the dispatcher's concern.
    async fn complete(
        &self,
        backend_id: &str,
        messages: &[Message],
        params: SamplingParams,
    ) -> Result<String, BackendError>;
}
