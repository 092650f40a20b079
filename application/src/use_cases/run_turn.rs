//! Run turn use case.
//!
//! The entry point for one conversation turn: routes on the conversation's
//! state, runs the single-call or fan-out path, persists what must be
//! persisted, and produces the final formatted reply.
//!
//! Turns for the same conversation are strictly serialized behind a
//! per-conversation gate; turns for different conversations run freely in
//! parallel.

use crate::config::BehaviorConfig;
use crate::ports::chat_backend::ChatBackend;
use crate::ports::persistence::{HistoryStore, StoreError};
use crate::ports::progress::{NoTurnProgress, TurnProgress};
use crate::ports::turn_logger::{NoTurnLogger, TurnEvent, TurnLogger};
use crate::stores::last_reply::LastReplyCache;
use crate::stores::session_state::SessionStateStore;
use crate::use_cases::dispatch::Dispatcher;
use crate::use_cases::synthesize::SynthesisReducer;
use moot_domain::{compose, ConversationId, ConversationState, Message, ModelRegistry, ToneTable};
use serde_json::json;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tracing::{debug, info};

/// Banner prefixed to every discussion-mode reply.
pub const DISCUSSION_BANNER: &str = "Discussion mode result:\n";

/// Errors that abort a turn
///
/// Backend failures never appear here; they degrade to reply text. Only a
/// failed persistence write is fatal to the turn.
#[derive(thiserror::Error, Debug)]
pub enum TurnError {
    #[error("Failed to persist conversation state: {0}")]
    Persistence(#[from] StoreError),
}

/// Input for one turn
#[derive(Debug, Clone)]
pub struct TurnInput {
    /// The conversation this turn belongs to
    pub conversation: ConversationId,
    /// The user's message text
    pub text: String,
}

impl TurnInput {
    pub fn new(conversation: impl Into<ConversationId>, text: impl Into<String>) -> Self {
        Self {
            conversation: conversation.into(),
            text: text.into(),
        }
    }
}

/// Use case for running one conversation turn
pub struct RunTurnUseCase<B: ChatBackend + 'static> {
    registry: Arc<ModelRegistry>,
    tones: Arc<ToneTable>,
    dispatcher: Arc<Dispatcher<B>>,
    reducer: SynthesisReducer<B>,
    session: Arc<SessionStateStore>,
    history: Arc<dyn HistoryStore>,
    last_reply: Arc<LastReplyCache>,
    logger: Arc<dyn TurnLogger>,
    sender_tag: String,
    gates: Mutex<HashMap<String, Arc<tokio::sync::Mutex<()>>>>,
}

impl<B: ChatBackend + 'static> RunTurnUseCase<B> {
    pub fn new(
        backend: Arc<B>,
        registry: Arc<ModelRegistry>,
        tones: Arc<ToneTable>,
        session: Arc<SessionStateStore>,
        history: Arc<dyn HistoryStore>,
        last_reply: Arc<LastReplyCache>,
        behavior: BehaviorConfig,
    ) -> Self {
        let dispatcher = Arc::new(Dispatcher::new(backend, behavior.call_timeout));
        let reducer = SynthesisReducer::new(Arc::clone(&dispatcher));
        Self {
            registry,
            tones,
            dispatcher,
            reducer,
            session,
            history,
            last_reply,
            logger: Arc::new(NoTurnLogger),
            sender_tag: behavior.sender_tag,
            gates: Mutex::new(HashMap::new()),
        }
    }

    /// Attach a structured turn logger (defaults to a no-op).
    pub fn with_logger(mut self, logger: Arc<dyn TurnLogger>) -> Self {
        self.logger = logger;
        self
    }

    /// Execute the turn with default (no-op) progress
    pub async fn execute(&self, input: TurnInput) -> Result<String, TurnError> {
        self.execute_with_progress(input, &NoTurnProgress).await
    }

    /// Execute the turn with progress callbacks
    pub async fn execute_with_progress(
        &self,
        input: TurnInput,
        progress: &dyn TurnProgress,
    ) -> Result<String, TurnError> {
        // Serialize turns per conversation: history is read-modify-write.
        let gate = self.gate(&input.conversation);
        let _serial = gate.lock().await;

        let state = self.session.state_of(&input.conversation);
        let tone_instruction = self
            .tones
            .instruction(&state.tone_key)
            .map(str::to_string);

        info!(
            "Turn for {} ({} mode)",
            input.conversation,
            if state.discussion { "discussion" } else { "single" }
        );
        self.logger.log(TurnEvent::new(
            "turn_started",
            json!({
                "conversation": input.conversation.as_str(),
                "mode": if state.discussion { "discussion" } else { "single" },
                "tone": state.tone_key,
            }),
        ));

        if state.discussion {
            self.discussion_turn(&input, tone_instruction.as_deref(), progress)
                .await
        } else {
            self.single_turn(&input, &state, tone_instruction.as_deref())
                .await
        }
    }

    /// One call against the conversation's model, with durable history.
    async fn single_turn(
        &self,
        input: &TurnInput,
        state: &ConversationState,
        tone_instruction: Option<&str>,
    ) -> Result<String, TurnError> {
        // A stale persisted key (model no longer registered) falls back to
        // the default model, same as never having chosen one.
        let model = state
            .model_key
            .as_deref()
            .and_then(|key| self.registry.resolve(key))
            .unwrap_or_else(|| self.registry.default_model());
        debug!("Single turn for {} via {}", input.conversation, model.key);

        let history = self.history.load(&input.conversation);
        let mut messages =
            compose::conversation_messages(&history, &input.text, model, tone_instruction);

        let answer = self.dispatcher.invoke(model, &messages).await;
        self.logger.log(TurnEvent::new(
            "model_answer",
            json!({
                "conversation": input.conversation.as_str(),
                "model": answer.model_key,
                "success": answer.is_success(),
            }),
        ));

        // A failed call still becomes the assistant's turn, apology text and
        // all, so the conversation stays usable.
        let reply = if answer.is_success() {
            answer.content
        } else {
            single_call_apology(answer.error.as_deref().unwrap_or("unknown"))
        };

        messages.push(Message::assistant(reply.as_str()));
        self.history.save(&input.conversation, &messages)?;

        let formatted = format!("{} ({}):\n{}", self.sender_tag, model.key, reply);
        self.last_reply.set(&input.conversation, formatted.as_str());
        self.logger.log(TurnEvent::new(
            "reply_produced",
            json!({
                "conversation": input.conversation.as_str(),
                "mode": "single",
                "chars": formatted.len(),
            }),
        ));
        Ok(formatted)
    }

    /// Fan-out plus synthesis; leaves no trace in durable history.
    async fn discussion_turn(
        &self,
        input: &TurnInput,
        tone_instruction: Option<&str>,
        progress: &dyn TurnProgress,
    ) -> Result<String, TurnError> {
        let report = self
            .dispatcher
            .fan_out(&self.registry, tone_instruction, &input.text, progress)
            .await;
        for answer in report.answers() {
            self.logger.log(TurnEvent::new(
                "model_answer",
                json!({
                    "conversation": input.conversation.as_str(),
                    "model": answer.model_key,
                    "success": answer.is_success(),
                }),
            ));
        }

        let synthesized = self
            .reducer
            .synthesize(&self.registry, &report, progress)
            .await;
        self.logger.log(TurnEvent::new(
            "synthesis_result",
            json!({
                "conversation": input.conversation.as_str(),
                "moderator": self.registry.default_key(),
                "chars": synthesized.len(),
            }),
        ));

        let formatted = format!("{DISCUSSION_BANNER}{synthesized}");
        self.last_reply.set(&input.conversation, formatted.as_str());
        self.logger.log(TurnEvent::new(
            "reply_produced",
            json!({
                "conversation": input.conversation.as_str(),
                "mode": "discussion",
                "chars": formatted.len(),
            }),
        ));
        Ok(formatted)
    }

    fn gate(&self, id: &ConversationId) -> Arc<tokio::sync::Mutex<()>> {
        let mut gates = self
            .gates
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        Arc::clone(gates.entry(id.as_str().to_string()).or_default())
    }
}

fn single_call_apology(error: &str) -> String {
    format!("Sorry, I encountered an error fetching the response. {error}")
}
