//! Keyed per-conversation state stores.
//!
//! Each store owns one map from conversation id to value, guarded by its own
//! mutex; nothing else in the system touches the backing map directly.

pub mod last_reply;
pub mod session_state;

use std::sync::{Mutex, MutexGuard, PoisonError};

/// Locks a mutex, recovering the data if a previous holder panicked.
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
