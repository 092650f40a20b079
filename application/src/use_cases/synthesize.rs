//! Synthesis reducer.
//!
//! Joins a fan-out report into one combined answer by issuing a single
//! further call against the registry's default model.

use crate::ports::chat_backend::ChatBackend;
use crate::ports::progress::TurnProgress;
use crate::use_cases::dispatch::Dispatcher;
use moot_domain::{compose, FanOutReport, Message, ModelRegistry};
use std::sync::Arc;
use tracing::{info, warn};

/// Apology returned when the synthesis call itself fails.
pub const SYNTHESIS_APOLOGY: &str =
    "Sorry, I encountered an error during the discussion synthesis.";

/// Reduces N fan-out answers to one synthesized answer.
pub struct SynthesisReducer<B: ChatBackend + 'static> {
    dispatcher: Arc<Dispatcher<B>>,
}

impl<B: ChatBackend + 'static> SynthesisReducer<B> {
    pub fn new(dispatcher: Arc<Dispatcher<B>>) -> Self {
        Self { dispatcher }
    }

    /// Combine the report into one answer.
    ///
    /// The moderator is the registry's default model and its persona is
    /// injected unconditionally; failed fan-out answers contribute their
    /// error text to the combined prompt. A failure here degrades to the
    /// fixed apology rather than propagating.
    pub async fn synthesize(
        &self,
        registry: &ModelRegistry,
        report: &FanOutReport,
        progress: &dyn TurnProgress,
    ) -> String {
        progress.on_synthesis_start();
        let moderator = registry.default_model();
        info!(
            "Synthesizing {} answers with {}",
            report.len(),
            moderator.key
        );

        let prompt = compose::synthesis_prompt(report);
        let messages = vec![
            Message::system(moderator.persona.as_str()),
            Message::user(prompt),
        ];

        let answer = self.dispatcher.invoke(moderator, &messages).await;
        if answer.is_success() {
            answer.content
        } else {
            warn!(
                "Synthesis call failed: {}",
                answer.error.as_deref().unwrap_or("unknown")
            );
            SYNTHESIS_APOLOGY.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::chat_backend::BackendError;
    use crate::ports::progress::NoTurnProgress;
    use async_trait::async_trait;
    use moot_domain::{ModelAnswer, Role, SamplingParams};
    use std::sync::Mutex;
    use std::time::Duration;

    /// Records the synthesis call and returns one scripted outcome.
    struct RecordingBackend {
        outcome: Result<String, String>,
        calls: Mutex<Vec<(String, Vec<Message>)>>,
    }

    impl RecordingBackend {
        fn answering(text: &str) -> Self {
            Self {
                outcome: Ok(text.to_string()),
                calls: Mutex::new(Vec::new()),
            }
        }

        fn failing(error: &str) -> Self {
            Self {
                outcome: Err(error.to_string()),
                calls: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl ChatBackend for RecordingBackend {
        async fn complete(
            &self,
            backend_id: &str,
            messages: &[Message],
            _params: SamplingParams,
        ) -> Result<String, BackendError> {
            self.calls
                .lock()
                .unwrap()
                .push((backend_id.to_string(), messages.to_vec()));
            match &self.outcome {
                Ok(text) => Ok(text.clone()),
                Err(error) => Err(BackendError::RequestFailed(error.clone())),
            }
        }
    }

    fn reducer(backend: Arc<RecordingBackend>) -> SynthesisReducer<RecordingBackend> {
        SynthesisReducer::new(Arc::new(Dispatcher::new(backend, Duration::from_secs(5))))
    }

    fn sample_report() -> FanOutReport {
        FanOutReport::new(vec![
            ModelAnswer::success("gemma", "gemma thinks so"),
            ModelAnswer::failure("deepseek", "boom"),
        ])
    }

    #[tokio::test]
    async fn test_synthesis_targets_default_model_with_persona() {
        let registry = ModelRegistry::builtin();
        let backend = Arc::new(RecordingBackend::answering("the combined answer"));

        let combined = reducer(backend.clone())
            .synthesize(&registry, &sample_report(), &NoTurnProgress)
            .await;
        assert_eq!(combined, "the combined answer");

        let calls = backend.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        let (backend_id, messages) = &calls[0];
        assert_eq!(backend_id, &registry.default_model().backend_id);
        assert_eq!(messages[0].role, Role::System);
        assert_eq!(messages[0].content, registry.default_model().persona);
        assert_eq!(messages[1].role, Role::User);
        assert!(messages[1].content.contains("GEMMA says: gemma thinks so"));
        assert!(messages[1].content.contains("DEEPSEEK says: Error: boom"));
    }

    #[tokio::test]
    async fn test_synthesis_failure_degrades_to_apology() {
        let registry = ModelRegistry::builtin();
        let backend = Arc::new(RecordingBackend::failing("rate limited"));

        let combined = reducer(backend)
            .synthesize(&registry, &sample_report(), &NoTurnProgress)
            .await;
        assert_eq!(combined, SYNTHESIS_APOLOGY);
    }
}
