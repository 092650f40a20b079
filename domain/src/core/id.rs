//! Conversation identifier value object

use serde::{Deserialize, Serialize};

/// Stable identifier for one chat thread (Value Object)
///
/// Every piece of per-conversation state — model choice, tone, discussion
/// flag, history, cached last reply — is keyed by this id. The transport
/// decides what the identifier contains; the core only compares and stores it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConversationId(String);

impl ConversationId {
    /// Create a new conversation id
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string
    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for ConversationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ConversationId {
    fn from(s: &str) -> Self {
        ConversationId::new(s)
    }
}

impl From<String> for ConversationId {
    fn from(s: String) -> Self {
        ConversationId::new(s)
    }
}
