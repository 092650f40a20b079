//! Core domain primitives

pub mod error;
pub mod id;

pub use error::DomainError;
pub use id::ConversationId;
