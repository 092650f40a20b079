//! Forward-intent classifier port
//!
//! Detecting "forward this reply to someone" phrasing in user text is a
//! swappable concern: the default adapter is a literal-pattern matcher, but
//! nothing in the core depends on how the decision is made.

/// Classifier for forward-this-reply triggers
pub trait ForwardIntent: Send + Sync {
    /// Returns the recipient address when `text` asks to forward the last
    /// reply, `None` otherwise.
    fn detect(&self, text: &str) -> Option<String>;
}
