//! Infrastructure layer for moot
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod intent;
pub mod logging;
pub mod openrouter;
pub mod persistence;

// Re-export commonly used types
pub use config::{
    ConfigLoader, FileBackendConfig, FileConfig, FileReplyConfig, FileStorageConfig,
};
pub use intent::MailIntentDetector;
pub use logging::JsonlTurnLogger;
pub use openrouter::OpenRouterBackend;
pub use persistence::{JsonHistoryStore, JsonPreferenceStore};
