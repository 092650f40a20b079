//! Orchestration value objects for single and fan-out turns

pub mod value_objects;

pub use value_objects::{FanOutReport, ModelAnswer, SamplingParams, NO_RESPONSE_PLACEHOLDER};
