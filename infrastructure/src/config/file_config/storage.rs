//! Storage configuration from TOML (`[storage]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw storage configuration from TOML
///
/// Relative paths resolve against the working directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileStorageConfig {
    /// Directory holding one history file per conversation
    pub history_dir: String,
    /// Path of the global model-preference file
    pub prefs_file: String,
}

impl FileStorageConfig {
    pub fn history_dir_path(&self) -> PathBuf {
        PathBuf::from(&self.history_dir)
    }

    pub fn prefs_file_path(&self) -> PathBuf {
        PathBuf::from(&self.prefs_file)
    }
}

impl Default for FileStorageConfig {
    fn default() -> Self {
        Self {
            history_dir: "chat_histories".to_string(),
            prefs_file: "model_prefs.json".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_storage_section_deserialize() {
        let toml_str = r#"
[storage]
history_dir = "/var/lib/moot/histories"
prefs_file = "/var/lib/moot/prefs.json"
"#;
        let config: super::super::FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.storage.history_dir, "/var/lib/moot/histories");
        assert_eq!(
            config.storage.prefs_file_path(),
            std::path::PathBuf::from("/var/lib/moot/prefs.json")
        );
    }
}
