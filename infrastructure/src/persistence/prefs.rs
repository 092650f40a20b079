//! File-backed model-preference store
//!
//! The whole conversation-to-model map lives in a single JSON object
//! file, rewritten on every save.

use moot_application::{PreferenceStore, StoreError};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Preference store backed by one global JSON file
pub struct JsonPreferenceStore {
    path: PathBuf,
}

impl JsonPreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl PreferenceStore for JsonPreferenceStore {
    fn load(&self) -> HashMap<String, String> {
        if !self.path.exists() {
            return HashMap::new();
        }

        match fs::read_to_string(&self.path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(prefs) => prefs,
                Err(e) => {
                    warn!(
                        "Unparsable preference record {:?}, starting empty: {}",
                        self.path, e
                    );
                    HashMap::new()
                }
            },
            Err(e) => {
                warn!("Failed to read preference record {:?}: {}", self.path, e);
                HashMap::new()
            }
        }
    }

    fn save(&self, prefs: &HashMap<String, String>) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|source| StoreError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let json = serde_json::to_string_pretty(prefs)?;
        fs::write(&self.path, json).map_err(|source| StoreError::Write {
            path: self.path.clone(),
            source,
        })?;

        debug!(entries = prefs.len(), "Preference record written");
        Ok(())
    }
}
