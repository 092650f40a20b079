//! Request and response types for the OpenRouter chat-completions API
//!
//! Payload messages reuse the domain `Message` serialization: the
//! persisted history record and the wire message are the same
//! `{"role": ..., "content": ...}` shape.

use moot_domain::{Message, SamplingParams};
use serde::{Deserialize, Serialize};

/// Body of `POST /chat/completions`
#[derive(Debug, Serialize)]
pub struct ChatCompletionRequest<'a> {
    pub model: &'a str,
    pub messages: &'a [Message],
    pub temperature: f32,
    pub top_p: f32,
}

impl<'a> ChatCompletionRequest<'a> {
    pub fn new(model: &'a str, messages: &'a [Message], params: SamplingParams) -> Self {
        Self {
            model,
            messages,
            temperature: params.temperature,
            top_p: params.top_p,
        }
    }
}

/// Successful chat-completions response
#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ResponseMessage,
}

/// The assistant message inside a choice
///
/// `content` is nullable in OpenAI-style APIs; absent and `null` both
/// decode to `None`.
#[derive(Debug, Deserialize)]
pub struct ResponseMessage {
    #[serde(default)]
    pub content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_shape() {
        let messages = vec![Message::system("be brief"), Message::user("hi")];
        let request =
            ChatCompletionRequest::new("deepseek/deepseek-chat", &messages, SamplingParams::FIXED);

        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["model"], "deepseek/deepseek-chat");
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][1]["content"], "hi");
        assert_eq!(body["temperature"], 0.5);
        assert_eq!(body["top_p"], 0.95);
    }

    #[test]
    fn test_response_with_content() {
        let json = r#"{"choices":[{"message":{"role":"assistant","content":"hello"}}]}"#;
        let response: ChatCompletionResponse = serde_json::from_str(json).unwrap();
        assert_eq!(
            response.choices[0].message.content.as_deref(),
            Some("hello")
        );
    }

    #[test]
    fn test_response_with_null_content() {
        let json = r#"{"choices":[{"message":{"content":null}}]}"#;
        let response: ChatCompletionResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.choices[0].message.content, None);
    }

    #[test]
    fn test_response_without_choices() {
        let response: ChatCompletionResponse = serde_json::from_str("{}").unwrap();
        assert!(response.choices.is_empty());
    }
}
