//! File-backed persistence adapters
//!
//! Implements the `HistoryStore` and `PreferenceStore` ports with plain
//! JSON files, one whole-record rewrite per save.

pub mod history;
pub mod prefs;

pub use history::JsonHistoryStore;
pub use prefs::JsonPreferenceStore;
