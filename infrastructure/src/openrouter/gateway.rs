//! OpenRouter gateway implementation

use crate::openrouter::wire::{ChatCompletionRequest, ChatCompletionResponse};
use async_trait::async_trait;
use moot_application::{BackendError, ChatBackend};
use moot_domain::{Message, SamplingParams};
use std::time::Duration;
use tracing::debug;

/// Environment variable holding the OpenRouter API key
pub const API_KEY_VAR: &str = "OPENROUTER_API_KEY";

/// Deadline for establishing a connection
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Longest error-body excerpt quoted in failure messages
const MAX_ERROR_BODY: usize = 300;

/// Chat backend for the OpenRouter chat-completions API
pub struct OpenRouterBackend {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl OpenRouterBackend {
    /// Create a backend with an explicit API key.
    ///
    /// `request_timeout` bounds each HTTP request inside the client;
    /// the dispatcher layers its own per-call deadline on top.
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        request_timeout: Duration,
    ) -> Result<Self, BackendError> {
        let client = reqwest::Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(request_timeout)
            .build()
            .map_err(|e| BackendError::Connection(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            api_key: api_key.into(),
        })
    }

    /// Create a backend reading the API key from `OPENROUTER_API_KEY`.
    ///
    /// Fails when the variable is unset or empty, so a missing key
    /// surfaces at assembly time instead of on the first model call.
    pub fn from_env(
        base_url: impl Into<String>,
        request_timeout: Duration,
    ) -> Result<Self, BackendError> {
        match std::env::var(API_KEY_VAR) {
            Ok(key) if !key.is_empty() => Self::new(base_url, key, request_timeout),
            _ => Err(BackendError::MissingCredentials(format!(
                "{API_KEY_VAR} is not set"
            ))),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl ChatBackend for OpenRouterBackend {
    async fn complete(
        &self,
        backend_id: &str,
        messages: &[Message],
        params: SamplingParams,
    ) -> Result<String, BackendError> {
        let request = ChatCompletionRequest::new(backend_id, messages, params);

        debug!(
            model = backend_id,
            messages = messages.len(),
            "Sending chat completion request"
        );

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    BackendError::Timeout
                } else {
                    BackendError::Connection(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(BackendError::RequestFailed(format!(
                "HTTP {}: {}",
                status,
                excerpt(body.trim())
            )));
        }

        let parsed: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| BackendError::MalformedResponse(e.to_string()))?;

        extract_content(parsed)
    }
}

/// Pull the answer text out of a decoded response.
///
/// A response without choices is malformed. A choice with `null`
/// content yields an empty answer, which callers substitute with the
/// no-response placeholder.
fn extract_content(response: ChatCompletionResponse) -> Result<String, BackendError> {
    let choice = response.choices.into_iter().next().ok_or_else(|| {
        BackendError::MalformedResponse("response contained no choices".to_string())
    })?;

    Ok(choice.message.content.unwrap_or_default())
}

fn excerpt(body: &str) -> &str {
    match body.char_indices().nth(MAX_ERROR_BODY) {
        Some((index, _)) => &body[..index],
        None => body,
    }
}
