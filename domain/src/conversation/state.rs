//! Per-conversation routing state

use crate::tone::DEFAULT_TONE;

/// Snapshot of one conversation's routing state (Value Object)
///
/// `model_key` is the durable part; `tone_key` and `discussion` live for the
/// process lifetime only. The split is deliberate: a restart forgets tone and
/// discussion mode but keeps the chosen model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationState {
    /// Selected model key, if the user ever chose one.
    pub model_key: Option<String>,
    /// Selected tone key; starts at [`DEFAULT_TONE`].
    pub tone_key: String,
    /// Whether discussion mode (fan-out + synthesis) is active.
    pub discussion: bool,
}

impl Default for ConversationState {
    fn default() -> Self {
        Self {
            model_key: None,
            tone_key: DEFAULT_TONE.to_string(),
            discussion: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state() {
        let state = ConversationState::default();
        assert!(state.model_key.is_none());
        assert_eq!(state.tone_key, DEFAULT_TONE);
        assert!(!state.discussion);
    }
}
