//! Use cases orchestrating the turn flow.
//!
//! [`run_turn`] is the entry point; [`dispatch`] and [`synthesize`] are the
//! stages it composes; [`forward_reply`] consumes what turns leave behind.

pub mod dispatch;
pub mod forward_reply;
pub mod run_turn;
pub mod synthesize;
