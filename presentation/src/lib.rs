//! Presentation layer for moot
//!
//! This crate contains CLI definitions, the interactive chat REPL,
//! progress reporters, and reply output handling.

pub mod chat;
pub mod cli;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use chat::ChatRepl;
pub use cli::commands::Cli;
pub use output::reply::{MAX_CHUNK_CHARS, print_chunked, split_chunks};
pub use progress::reporter::{ProgressReporter, SimpleProgress};
