//! Backend dispatcher.
//!
//! Executes composed requests against the [`ChatBackend`] port, single-shot
//! or fanned out across the whole registry. No error leaves this module:
//! every call, however it went, becomes a [`ModelAnswer`].

use crate::ports::chat_backend::{BackendError, ChatBackend};
use crate::ports::progress::TurnProgress;
use moot_domain::{
    compose, FanOutReport, Message, ModelAnswer, ModelDescriptor, ModelRegistry,
    SamplingParams,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinSet;
use tokio::time::timeout;
use tracing::{debug, info, warn};

/// Dispatches backend calls with a per-call timeout.
///
/// Stateless with respect to conversations: the caller supplies everything a
/// call needs and owns whatever the answer is used for.
pub struct Dispatcher<B: ChatBackend + 'static> {
    backend: Arc<B>,
    call_timeout: Duration,
}

impl<B: ChatBackend + 'static> Dispatcher<B> {
    pub fn new(backend: Arc<B>, call_timeout: Duration) -> Self {
        Self {
            backend,
            call_timeout,
        }
    }

    /// Issue one call against one model.
    ///
    /// Failure and timeout are captured in the answer; an empty reply is
    /// substituted with the no-response placeholder.
    pub async fn invoke(&self, model: &ModelDescriptor, messages: &[Message]) -> ModelAnswer {
        Self::call(&self.backend, self.call_timeout, model, messages).await
    }

    /// Issue one fresh one-shot call per registered model, concurrently.
    ///
    /// The returned report holds exactly one answer per model, in registry
    /// order, regardless of completion order or individual failures.
    pub async fn fan_out(
        &self,
        registry: &ModelRegistry,
        tone_instruction: Option<&str>,
        user_text: &str,
        progress: &dyn TurnProgress,
    ) -> FanOutReport {
        info!("Fanning out to {} models", registry.len());
        progress.on_fan_out_start(registry.len());

        let mut join_set = JoinSet::new();

        for (index, model) in registry.all().iter().enumerate() {
            let backend = Arc::clone(&self.backend);
            let call_timeout = self.call_timeout;
            let model = model.clone();
            let messages = compose::one_shot_messages(&model, tone_instruction, user_text);

            join_set.spawn(async move {
                let answer = Self::call(&backend, call_timeout, &model, &messages).await;
                (index, answer)
            });
        }

        // Answers complete in arbitrary order; slot them back into registry
        // order before reporting.
        let mut slots: Vec<Option<ModelAnswer>> = vec![None; registry.len()];

        while let Some(result) = join_set.join_next().await {
            match result {
                Ok((index, answer)) => {
                    progress.on_model_answer(&answer.model_key, answer.is_success());
                    slots[index] = Some(answer);
                }
                Err(e) => {
                    warn!("Fan-out task join error: {}", e);
                }
            }
        }

        let answers = slots
            .into_iter()
            .zip(registry.all())
            .map(|(slot, model)| {
                slot.unwrap_or_else(|| {
                    ModelAnswer::failure(model.key.as_str(), "task failed to complete")
                })
            })
            .collect();

        progress.on_fan_out_complete();
        FanOutReport::new(answers)
    }

    async fn call(
        backend: &B,
        call_timeout: Duration,
        model: &ModelDescriptor,
        messages: &[Message],
    ) -> ModelAnswer {
        debug!("Calling {} ({})", model.key, model.backend_id);
        match timeout(
            call_timeout,
            backend.complete(&model.backend_id, messages, SamplingParams::FIXED),
        )
        .await
        {
            Ok(Ok(content)) => ModelAnswer::from_content(model.key.as_str(), content),
            Ok(Err(e)) => {
                warn!("Model {} failed: {}", model.key, e);
                ModelAnswer::failure(model.key.as_str(), e.to_string())
            }
            Err(_) => {
                warn!("Model {} timed out after {:?}", model.key, call_timeout);
                ModelAnswer::failure(model.key.as_str(), BackendError::Timeout.to_string())
            }
        }
    }
}
