//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Unknown model: {0}")]
    UnknownModel(String),

    #[error("Unknown tone: {0}")]
    UnknownTone(String),

    #[error("Model registry cannot be empty")]
    EmptyRegistry,

    #[error("Default model is not registered: {0}")]
    DefaultModelMissing(String),

    #[error("Duplicate model key: {0}")]
    DuplicateModelKey(String),
}

impl DomainError {
    /// Check if this error is a caller error (bad key from user input)
    pub fn is_caller_error(&self) -> bool {
        matches!(
            self,
            DomainError::UnknownModel(_) | DomainError::UnknownTone(_)
        )
    }
}
