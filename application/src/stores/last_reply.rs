//! Intent signal cache: the last fully-formatted reply per conversation.
//!
//! Consumed by the forward-reply flow. Purely in-memory, last-write-wins,
//! no persistence contract.

use moot_domain::ConversationId;
use std::collections::HashMap;
use std::sync::Mutex;

/// Per-conversation cache of the most recent formatted assistant reply.
///
/// Both single-mode and discussion-mode replies land here, always in their
/// final formatted shape (sender tag or discussion banner included).
#[derive(Default)]
pub struct LastReplyCache {
    replies: Mutex<HashMap<String, String>>,
}

impl LastReplyCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite the cached reply for `id`.
    pub fn set(&self, id: &ConversationId, text: impl Into<String>) {
        super::lock(&self.replies).insert(id.as_str().to_string(), text.into());
    }

    /// The cached reply for `id`, if any turn has completed yet.
    pub fn get(&self, id: &ConversationId) -> Option<String> {
        super::lock(&self.replies).get(id.as_str()).cloned()
    }
}
