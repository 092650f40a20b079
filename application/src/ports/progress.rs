//! Progress notification port
//!
//! Defines the interface for reporting progress during a discussion-mode
//! turn.

/// Callback for progress updates while a turn runs
///
/// Implementations live in the presentation layer and can display progress
/// in various ways (console spinner, plain prints, etc.). Single-mode turns
/// report nothing; only the fan-out and synthesis stages are long enough to
/// be worth narrating.
pub trait TurnProgress: Send + Sync {
    /// Called when the fan-out stage starts, with the number of models.
    fn on_fan_out_start(&self, total: usize);

    /// Called when one model's answer (or failure) arrives.
    fn on_model_answer(&self, model_key: &str, success: bool);

    /// Called when every model has answered.
    fn on_fan_out_complete(&self);

    /// Called when the synthesis call starts.
    fn on_synthesis_start(&self);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoTurnProgress;

impl TurnProgress for NoTurnProgress {
    fn on_fan_out_start(&self, _total: usize) {}
    fn on_model_answer(&self, _model_key: &str, _success: bool) {}
    fn on_fan_out_complete(&self) {}
    fn on_synthesis_start(&self) {}
}
