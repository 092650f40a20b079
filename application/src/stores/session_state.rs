//! Session state store: per-conversation model, tone, and discussion flag.
//!
//! The model choice is durable (persisted through a [`PreferenceStore`] on
//! every mutation, loaded once at construction). Tone and the discussion
//! flag are process-lifetime only; losing them on restart is the intended
//! contract, not an oversight.

use crate::ports::persistence::{PreferenceStore, StoreError};
use moot_domain::{
    ConversationId, ConversationState, DomainError, ModelDescriptor, ModelRegistry,
    ToneDescriptor, ToneTable, DEFAULT_TONE,
};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;
use tracing::{debug, info};

/// Errors from session state operations
#[derive(Error, Debug)]
pub enum SessionError {
    /// Caller error: the requested model or tone key does not exist.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The preference map could not be persisted.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Per-conversation session state, keyed by [`ConversationId`].
///
/// Three independent maps, each behind its own mutex; operations never hold
/// more than one lock at a time. `set_model` persists the whole preference
/// map under its lock so concurrent writers cannot interleave a stale map
/// into the store.
pub struct SessionStateStore {
    registry: Arc<ModelRegistry>,
    tones: Arc<ToneTable>,
    store: Arc<dyn PreferenceStore>,
    models: Mutex<HashMap<String, String>>,
    tone_keys: Mutex<HashMap<String, String>>,
    discussion: Mutex<HashMap<String, bool>>,
}

impl SessionStateStore {
    /// Build the store, loading the persisted model preferences.
    pub fn new(
        registry: Arc<ModelRegistry>,
        tones: Arc<ToneTable>,
        store: Arc<dyn PreferenceStore>,
    ) -> Self {
        let models = store.load();
        debug!("Loaded {} persisted model preferences", models.len());
        Self {
            registry,
            tones,
            store,
            models: Mutex::new(models),
            tone_keys: Mutex::new(HashMap::new()),
            discussion: Mutex::new(HashMap::new()),
        }
    }

    /// The conversation's chosen model key, if one was ever set.
    pub fn model(&self, id: &ConversationId) -> Option<String> {
        super::lock(&self.models).get(id.as_str()).cloned()
    }

    /// Select a model for the conversation and persist the choice.
    ///
    /// Rejects keys absent from the registry without mutating anything.
    /// Returns the selected descriptor so callers can confirm with its
    /// description.
    pub fn set_model(
        &self,
        id: &ConversationId,
        key: &str,
    ) -> Result<ModelDescriptor, SessionError> {
        let descriptor = self
            .registry
            .resolve(key)
            .ok_or_else(|| DomainError::UnknownModel(key.to_string()))?
            .clone();

        let mut models = super::lock(&self.models);
        models.insert(id.as_str().to_string(), descriptor.key.clone());
        self.store.save(&models)?;
        info!("Conversation {} switched to model {}", id, descriptor.key);
        Ok(descriptor)
    }

    /// The conversation's tone key, defaulting to [`DEFAULT_TONE`].
    pub fn tone(&self, id: &ConversationId) -> String {
        super::lock(&self.tone_keys)
            .get(id.as_str())
            .cloned()
            .unwrap_or_else(|| DEFAULT_TONE.to_string())
    }

    /// Select a tone for the conversation (process-lifetime only).
    pub fn set_tone(
        &self,
        id: &ConversationId,
        key: &str,
    ) -> Result<ToneDescriptor, SessionError> {
        let descriptor = self
            .tones
            .resolve(key)
            .ok_or_else(|| DomainError::UnknownTone(key.to_string()))?
            .clone();

        super::lock(&self.tone_keys).insert(id.as_str().to_string(), descriptor.key.clone());
        info!("Conversation {} switched to tone {}", id, descriptor.key);
        Ok(descriptor)
    }

    /// Whether discussion mode is on for the conversation.
    pub fn discussion_enabled(&self, id: &ConversationId) -> bool {
        super::lock(&self.discussion)
            .get(id.as_str())
            .copied()
            .unwrap_or(false)
    }

    /// Flip the discussion flag and return the new value.
    ///
    /// Toggle-only by contract: there is no way to set an explicit value.
    pub fn toggle_discussion(&self, id: &ConversationId) -> bool {
        let mut discussion = super::lock(&self.discussion);
        let flag = discussion.entry(id.as_str().to_string()).or_insert(false);
        *flag = !*flag;
        info!(
            "Conversation {} discussion mode {}",
            id,
            if *flag { "enabled" } else { "disabled" }
        );
        *flag
    }

    /// One routing snapshot of the conversation's state.
    pub fn state_of(&self, id: &ConversationId) -> ConversationState {
        ConversationState {
            model_key: self.model(id),
            tone_key: self.tone(id),
            discussion: self.discussion_enabled(id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    struct MemoryPreferenceStore {
        prefs: Mutex<HashMap<String, String>>,
        save_calls: Mutex<usize>,
    }

    impl MemoryPreferenceStore {
        fn new() -> Self {
            Self {
                prefs: Mutex::new(HashMap::new()),
                save_calls: Mutex::new(0),
            }
        }

        fn saves(&self) -> usize {
            *self.save_calls.lock().unwrap()
        }
    }

    impl PreferenceStore for MemoryPreferenceStore {
        fn load(&self) -> HashMap<String, String> {
            self.prefs.lock().unwrap().clone()
        }

        fn save(&self, prefs: &HashMap<String, String>) -> Result<(), StoreError> {
            *self.prefs.lock().unwrap() = prefs.clone();
            *self.save_calls.lock().unwrap() += 1;
            Ok(())
        }
    }

    struct FailingPreferenceStore;

    impl PreferenceStore for FailingPreferenceStore {
        fn load(&self) -> HashMap<String, String> {
            HashMap::new()
        }

        fn save(&self, _prefs: &HashMap<String, String>) -> Result<(), StoreError> {
            Err(StoreError::Write {
                path: "model_prefs.json".into(),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
            })
        }
    }

    fn store_with(backing: Arc<dyn PreferenceStore>) -> SessionStateStore {
        SessionStateStore::new(
            Arc::new(ModelRegistry::builtin()),
            Arc::new(ToneTable::builtin()),
            backing,
        )
    }

    #[test]
    fn test_set_model_persists_and_confirms() {
        let backing = Arc::new(MemoryPreferenceStore::new());
        let store = store_with(backing.clone());
        let id = ConversationId::from("42");

        let descriptor = store.set_model(&id, "mistral").unwrap();
        assert_eq!(descriptor.key, "mistral");
        assert!(descriptor.description.starts_with("Mistral:"));
        assert_eq!(store.model(&id), Some("mistral".to_string()));
        assert_eq!(backing.saves(), 1);
        assert_eq!(
            backing.load().get("42"),
            Some(&"mistral".to_string())
        );
    }

    #[test]
    fn test_unknown_model_rejected_without_mutation() {
        let backing = Arc::new(MemoryPreferenceStore::new());
        let store = store_with(backing.clone());
        let id = ConversationId::from("42");
        store.set_model(&id, "deepseek").unwrap();

        let err = store.set_model(&id, "not-a-model").unwrap_err();
        assert!(matches!(
            err,
            SessionError::Domain(DomainError::UnknownModel(k)) if k == "not-a-model"
        ));
        assert_eq!(store.model(&id), Some("deepseek".to_string()));
        assert_eq!(backing.saves(), 1);
    }

    #[test]
    fn test_model_survives_restart() {
        let backing: Arc<MemoryPreferenceStore> = Arc::new(MemoryPreferenceStore::new());
        let id = ConversationId::from("42");

        let first = store_with(backing.clone());
        first.set_model(&id, "qwen").unwrap();
        drop(first);

        let second = store_with(backing);
        assert_eq!(second.model(&id), Some("qwen".to_string()));
    }

    #[test]
    fn test_persist_failure_propagates() {
        let store = store_with(Arc::new(FailingPreferenceStore));
        let err = store
            .set_model(&ConversationId::from("42"), "deepseek")
            .unwrap_err();
        assert!(matches!(err, SessionError::Store(_)));
    }

    #[test]
    fn test_tone_defaults_and_switches() {
        let store = store_with(Arc::new(MemoryPreferenceStore::new()));
        let id = ConversationId::from("42");

        assert_eq!(store.tone(&id), DEFAULT_TONE);

        let descriptor = store.set_tone(&id, "sarcastic").unwrap();
        assert_eq!(descriptor.key, "sarcastic");
        assert_eq!(store.tone(&id), "sarcastic");

        let err = store.set_tone(&id, "grumpy").unwrap_err();
        assert!(matches!(
            err,
            SessionError::Domain(DomainError::UnknownTone(k)) if k == "grumpy"
        ));
        assert_eq!(store.tone(&id), "sarcastic");
    }

    #[test]
    fn test_discussion_toggle_flips() {
        let store = store_with(Arc::new(MemoryPreferenceStore::new()));
        let id = ConversationId::from("42");

        assert!(!store.discussion_enabled(&id));
        assert!(store.toggle_discussion(&id));
        assert!(store.discussion_enabled(&id));
        assert!(!store.toggle_discussion(&id));
        assert!(!store.discussion_enabled(&id));
    }

    #[test]
    fn test_state_snapshot() {
        let store = store_with(Arc::new(MemoryPreferenceStore::new()));
        let id = ConversationId::from("42");
        store.set_model(&id, "nvidia").unwrap();
        store.set_tone(&id, "friendly").unwrap();
        store.toggle_discussion(&id);

        let state = store.state_of(&id);
        assert_eq!(state.model_key, Some("nvidia".to_string()));
        assert_eq!(state.tone_key, "friendly");
        assert!(state.discussion);
    }
}
