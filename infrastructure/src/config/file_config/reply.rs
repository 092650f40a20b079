//! Reply formatting configuration from TOML (`[reply]` section)

use serde::{Deserialize, Serialize};

/// Raw reply configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileReplyConfig {
    /// Sender tag prefixed to every formatted reply
    pub sender_tag: String,
}

impl Default for FileReplyConfig {
    fn default() -> Self {
        Self {
            sender_tag: "Moot".to_string(),
        }
    }
}
