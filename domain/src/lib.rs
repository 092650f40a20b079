//! Domain layer for moot
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Conversation
//!
//! Every piece of state is keyed by a [`ConversationId`]: the selected model,
//! the selected tone, the discussion-mode flag, and the durable message
//! history. Conversations never interact with each other.
//!
//! ## Single / Discussion mode
//!
//! - **Single** (default): one backend call against the conversation's
//!   persisted history
//! - **Discussion**: every registered model answers the same question fresh,
//!   and a moderator call synthesizes one combined reply

pub mod conversation;
pub mod core;
pub mod model;
pub mod orchestration;
pub mod prompt;
pub mod tone;

// Re-export commonly used types
pub use conversation::{
    entities::{Message, Role},
    state::ConversationState,
};
pub use core::{error::DomainError, id::ConversationId};
pub use model::{descriptor::ModelDescriptor, registry::ModelRegistry};
pub use orchestration::value_objects::{
    FanOutReport, ModelAnswer, SamplingParams, NO_RESPONSE_PLACEHOLDER,
};
pub use prompt::compose;
pub use tone::{DEFAULT_TONE, ToneDescriptor, ToneTable};
