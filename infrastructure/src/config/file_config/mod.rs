//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! Every section and field is optional in the file; absent values fall
//! back to the built-in defaults.

mod backend;
mod reply;
mod storage;

pub use backend::FileBackendConfig;
pub use reply::FileReplyConfig;
pub use storage::FileStorageConfig;

use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Backend gateway settings
    pub backend: FileBackendConfig,
    /// Durable storage locations
    pub storage: FileStorageConfig,
    /// Reply formatting settings
    pub reply: FileReplyConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_yields_defaults() {
        let config: FileConfig = toml::from_str("").unwrap();
        assert_eq!(config.backend.base_url, "https://openrouter.ai/api/v1");
        assert_eq!(config.backend.request_timeout_secs, 120);
        assert_eq!(config.storage.history_dir, "chat_histories");
        assert_eq!(config.storage.prefs_file, "model_prefs.json");
        assert_eq!(config.reply.sender_tag, "Moot");
    }

    #[test]
    fn test_partial_section_keeps_sibling_defaults() {
        let toml_str = r#"
[backend]
request_timeout_secs = 30
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.backend.request_timeout_secs, 30);
        assert_eq!(config.backend.base_url, "https://openrouter.ai/api/v1");
        assert_eq!(config.reply.sender_tag, "Moot");
    }
}
