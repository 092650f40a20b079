//! Orchestration value objects - immutable per-call and per-turn result types.
//!
//! These types carry backend results across the dispatcher boundary:
//! - [`ModelAnswer`] - One model's answer (or captured failure) to one call
//! - [`FanOutReport`] - One answer per registered model, in registry order
//! - [`SamplingParams`] - The fixed sampling parameters every call uses

use serde::{Deserialize, Serialize};

/// Placeholder answer for a call that succeeded but returned no content.
pub const NO_RESPONSE_PLACEHOLDER: &str = "(No response)";

/// Fixed sampling parameters. (Value Object)
///
/// Every backend call, single or fan-out, uses the same values; they are
/// invariant system behavior, not a configuration knob.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SamplingParams {
    pub temperature: f32,
    pub top_p: f32,
}

impl SamplingParams {
    pub const FIXED: SamplingParams = SamplingParams {
        temperature: 0.5,
        top_p: 0.95,
    };
}

/// One model's answer to one backend call. (Value Object)
///
/// Failures are captured here rather than propagated: no error crosses the
/// dispatcher boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelAnswer {
    /// Registry key of the model that was called
    pub model_key: String,
    /// The answer content (empty when the call failed)
    pub content: String,
    /// Whether the call succeeded
    pub success: bool,
    /// Error message if failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ModelAnswer {
    /// Creates a successful answer.
    ///
    /// # Arguments
    /// * `model_key` - Registry key of the model that answered
    /// * `content` - The model's answer text
    pub fn success(model_key: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            model_key: model_key.into(),
            content: content.into(),
            success: true,
            error: None,
        }
    }

    /// Creates a successful answer from raw backend content, substituting
    /// [`NO_RESPONSE_PLACEHOLDER`] when the backend returned nothing.
    pub fn from_content(model_key: impl Into<String>, content: String) -> Self {
        if content.is_empty() {
            Self::success(model_key, NO_RESPONSE_PLACEHOLDER)
        } else {
            Self::success(model_key, content)
        }
    }

    /// Creates a failed answer capturing why the call did not produce one.
    ///
    /// # Arguments
    /// * `model_key` - Registry key of the model
    /// * `error` - Description of why the call failed
    pub fn failure(model_key: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            model_key: model_key.into(),
            content: String::new(),
            success: false,
            error: Some(error.into()),
        }
    }

    /// Returns `true` if the call produced an answer.
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// The text this answer contributes downstream: the content on success,
    /// `Error: {message}` on failure.
    pub fn display_text(&self) -> String {
        if self.success {
            self.content.clone()
        } else {
            format!("Error: {}", self.error.as_deref().unwrap_or("unknown"))
        }
    }
}

/// Result of one fan-out turn: exactly one answer per registered model,
/// in registry order. (Value Object)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FanOutReport {
    answers: Vec<ModelAnswer>,
}

impl FanOutReport {
    /// Creates a report from answers already in registry order.
    pub fn new(answers: Vec<ModelAnswer>) -> Self {
        Self { answers }
    }

    /// All answers, in registry order.
    pub fn answers(&self) -> &[ModelAnswer] {
        &self.answers
    }

    /// Look up one model's answer by registry key.
    pub fn answer_for(&self, model_key: &str) -> Option<&ModelAnswer> {
        self.answers.iter().find(|a| a.model_key == model_key)
    }

    /// Returns an iterator over only the successful answers.
    pub fn successes(&self) -> impl Iterator<Item = &ModelAnswer> {
        self.answers.iter().filter(|a| a.success)
    }

    /// Returns an iterator over only the failed answers.
    pub fn failures(&self) -> impl Iterator<Item = &ModelAnswer> {
        self.answers.iter().filter(|a| !a.success)
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_sampling_params() {
        assert_eq!(SamplingParams::FIXED.temperature, 0.5);
        assert_eq!(SamplingParams::FIXED.top_p, 0.95);
    }

    #[test]
    fn test_success_display_text() {
        let answer = ModelAnswer::success("deepseek", "hi there");
        assert!(answer.is_success());
        assert_eq!(answer.display_text(), "hi there");
    }

    #[test]
    fn test_failure_display_text() {
        let answer = ModelAnswer::failure("gemma", "connection refused");
        assert!(!answer.is_success());
        assert_eq!(answer.display_text(), "Error: connection refused");
    }

    #[test]
    fn test_from_content_substitutes_placeholder() {
        let empty = ModelAnswer::from_content("qwen", String::new());
        assert!(empty.is_success());
        assert_eq!(empty.content, NO_RESPONSE_PLACEHOLDER);

        let full = ModelAnswer::from_content("qwen", "text".to_string());
        assert_eq!(full.content, "text");
    }

    #[test]
    fn test_report_lookup_and_partition() {
        let report = FanOutReport::new(vec![
            ModelAnswer::success("gemma", "a"),
            ModelAnswer::failure("deepseek", "boom"),
        ]);
        assert_eq!(report.len(), 2);
        assert!(report.answer_for("deepseek").is_some());
        assert!(report.answer_for("mistral").is_none());
        assert_eq!(report.successes().count(), 1);
        assert_eq!(report.failures().count(), 1);
    }
}
