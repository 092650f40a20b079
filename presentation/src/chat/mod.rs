//! Interactive chat module
//!
//! Provides a readline-based interactive chat interface for moot.

mod repl;

pub use repl::ChatRepl;
