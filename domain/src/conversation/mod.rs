//! Conversation domain: messages and per-conversation routing state

pub mod entities;
pub mod state;

pub use entities::{Message, Role};
pub use state::ConversationState;
