//! Configuration file loading for moot
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. Project root: `./moot.toml` or `./.moot.toml`
//! 3. XDG config: `$XDG_CONFIG_HOME/moot/config.toml`
//! 4. Fallback: `~/.config/moot/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{FileBackendConfig, FileConfig, FileReplyConfig, FileStorageConfig};
pub use loader::ConfigLoader;
