//! Persistence ports for durable conversation state.
//!
//! Two stores survive restarts: the per-conversation message history and the
//! global model-preference map. Both follow whole-value overwrite semantics;
//! there is no partial or append write. Reads degrade: an absent or
//! unparsable record yields the empty value so a damaged file never takes a
//! conversation down. Writes are fallible and must propagate, since silently
//! losing history or preferences is unacceptable.

use moot_domain::{ConversationId, Message};
use std::collections::HashMap;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while persisting a record
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to encode record: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Durable store for per-conversation message history.
///
/// One record per [`ConversationId`]; every save rewrites the whole record.
/// Callers must read-modify-write under single-writer-per-conversation
/// discipline.
pub trait HistoryStore: Send + Sync {
    /// Load the stored history, or the empty history when the record is
    /// absent or unparsable.
    fn load(&self, id: &ConversationId) -> Vec<Message>;

    /// Overwrite the full stored record for `id`.
    fn save(&self, id: &ConversationId, history: &[Message]) -> Result<(), StoreError>;

    /// Reset the stored record to the empty history.
    fn clear(&self, id: &ConversationId) -> Result<(), StoreError> {
        self.save(id, &[])
    }
}

/// Durable store for the global conversation-to-model preference map.
///
/// A single record holding the whole map; every save rewrites it.
pub trait PreferenceStore: Send + Sync {
    /// Load the stored map, or the empty map when the record is absent or
    /// unparsable.
    fn load(&self) -> HashMap<String, String>;

    /// Overwrite the full stored map.
    fn save(&self, prefs: &HashMap<String, String>) -> Result<(), StoreError>;
}
