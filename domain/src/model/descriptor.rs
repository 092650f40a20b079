//! Model descriptor value object

use serde::{Deserialize, Serialize};

/// One registered backend model (Value Object)
///
/// Immutable after startup. `accepts_persona` marks backends that honor a
/// leading system message; the composer skips persona/tone injection for the
/// rest, so their conversations never contain a system turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelDescriptor {
    /// Short key users select the model by (e.g. `"deepseek"`).
    pub key: String,
    /// Fully qualified backend identifier sent over the wire.
    pub backend_id: String,
    /// One-line description shown by the model commands.
    pub description: String,
    /// System-message text injected at the start of a fresh history.
    pub persona: String,
    /// Whether the backend honors a system/persona message at all.
    pub accepts_persona: bool,
}

impl ModelDescriptor {
    pub fn new(
        key: impl Into<String>,
        backend_id: impl Into<String>,
        description: impl Into<String>,
        persona: impl Into<String>,
        accepts_persona: bool,
    ) -> Self {
        Self {
            key: key.into(),
            backend_id: backend_id.into(),
            description: description.into(),
            persona: persona.into(),
            accepts_persona,
        }
    }
}

impl std::fmt::Display for ModelDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key)
    }
}
