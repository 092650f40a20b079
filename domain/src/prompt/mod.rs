//! Prompt composition for single-call, fan-out, and synthesis requests

pub mod compose;
