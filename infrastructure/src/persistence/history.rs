//! File-backed history store
//!
//! One pretty-printed JSON array of `{role, content}` records per
//! conversation, stored as `{id}.json` under the configured directory.

use moot_application::{HistoryStore, StoreError};
use moot_domain::{ConversationId, Message};
use std::fs;
use std::path::PathBuf;
use tracing::{debug, warn};

/// History store writing one JSON file per conversation
pub struct JsonHistoryStore {
    dir: PathBuf,
}

impl JsonHistoryStore {
    /// Create a store rooted at `dir`.
    ///
    /// The directory is created lazily on the first save, not here.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn record_path(&self, id: &ConversationId) -> PathBuf {
        self.dir.join(format!("{}.json", id.as_str()))
    }
}

impl HistoryStore for JsonHistoryStore {
    fn load(&self, id: &ConversationId) -> Vec<Message> {
        let path = self.record_path(id);
        if !path.exists() {
            return Vec::new();
        }

        match fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(history) => history,
                Err(e) => {
                    warn!("Unparsable history record {:?}, starting empty: {}", path, e);
                    Vec::new()
                }
            },
            Err(e) => {
                warn!("Failed to read history record {:?}: {}", path, e);
                Vec::new()
            }
        }
    }

    fn save(&self, id: &ConversationId, history: &[Message]) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir).map_err(|source| StoreError::Write {
            path: self.dir.clone(),
            source,
        })?;

        let path = self.record_path(id);
        let json = serde_json::to_string_pretty(history)?;
        fs::write(&path, json).map_err(|source| StoreError::Write { path, source })?;

        debug!(
            conversation = %id,
            messages = history.len(),
            "History record written"
        );
        Ok(())
    }
}
