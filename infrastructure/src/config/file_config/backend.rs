//! Backend gateway configuration from TOML (`[backend]` section)

use serde::{Deserialize, Serialize};

/// Raw backend configuration from TOML
///
/// The API key is deliberately not part of this struct; it is read
/// from the `OPENROUTER_API_KEY` environment variable only.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileBackendConfig {
    /// Base URL of the OpenAI-compatible chat API
    pub base_url: String,
    /// Per-model-call deadline in seconds
    pub request_timeout_secs: u64,
}

impl Default for FileBackendConfig {
    fn default() -> Self {
        Self {
            base_url: "https://openrouter.ai/api/v1".to_string(),
            request_timeout_secs: 120,
        }
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_backend_section_deserialize() {
        let toml_str = r#"
[backend]
base_url = "http://localhost:8080/v1"
request_timeout_secs = 15
"#;
        let config: super::super::FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.backend.base_url, "http://localhost:8080/v1");
        assert_eq!(config.backend.request_timeout_secs, 15);
    }
}
