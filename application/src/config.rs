//! Application-level configuration.
//!
//! This module provides configuration types that control how use cases behave,
//! such as the per-call backend timeout and the sender tag on formatted
//! replies.

use std::time::Duration;

/// Application behavior configuration.
///
/// Controls runtime behavior of the turn use cases. Sampling parameters are
/// deliberately absent: they are fixed system behavior, not configuration.
#[derive(Debug, Clone)]
pub struct BehaviorConfig {
    /// Maximum time to wait for one backend call before timing out.
    pub call_timeout: Duration,
    /// Tag prefixed to every formatted reply.
    pub sender_tag: String,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            call_timeout: Duration::from_secs(120),
            sender_tag: "Moot".to_string(),
        }
    }
}

impl BehaviorConfig {
    /// Creates a BehaviorConfig with a call timeout specified in seconds.
    pub fn with_timeout_seconds(seconds: u64) -> Self {
        Self {
            call_timeout: Duration::from_secs(seconds),
            ..Self::default()
        }
    }

    /// Replaces the sender tag.
    pub fn with_sender_tag(mut self, tag: impl Into<String>) -> Self {
        self.sender_tag = tag.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BehaviorConfig::default();
        assert_eq!(config.call_timeout, Duration::from_secs(120));
        assert_eq!(config.sender_tag, "Moot");
    }

    #[test]
    fn test_builders() {
        let config = BehaviorConfig::with_timeout_seconds(5).with_sender_tag("Ryu");
        assert_eq!(config.call_timeout, Duration::from_secs(5));
        assert_eq!(config.sender_tag, "Ryu");
    }
}
