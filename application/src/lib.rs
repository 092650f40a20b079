//! Application layer for moot
//!
//! This crate contains use cases, keyed state stores, and port definitions.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod stores;
pub mod use_cases;

// Re-export commonly used types
pub use config::BehaviorConfig;
pub use ports::{
    chat_backend::{BackendError, ChatBackend},
    forward_intent::ForwardIntent,
    persistence::{HistoryStore, PreferenceStore, StoreError},
    progress::{NoTurnProgress, TurnProgress},
    turn_logger::{NoTurnLogger, TurnEvent, TurnLogger},
};
pub use stores::{
    last_reply::LastReplyCache,
    session_state::{SessionError, SessionStateStore},
};
pub use use_cases::dispatch::Dispatcher;
pub use use_cases::forward_reply::{ForwardOutcome, ForwardReplyUseCase};
pub use use_cases::run_turn::{RunTurnUseCase, TurnError, TurnInput, DISCUSSION_BANNER};
pub use use_cases::synthesize::{SynthesisReducer, SYNTHESIS_APOLOGY};
