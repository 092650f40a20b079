//! Forward reply use case.
//!
//! Consumes the last-reply cache when the classifier recognizes a forward
//! request in the user's text. Delivery itself belongs to an external
//! collaborator; this use case only resolves what to forward and records
//! the request.

use crate::ports::forward_intent::ForwardIntent;
use crate::ports::turn_logger::{NoTurnLogger, TurnEvent, TurnLogger};
use crate::stores::last_reply::LastReplyCache;
use moot_domain::ConversationId;
use serde_json::json;
use std::sync::Arc;
use tracing::info;

/// What a piece of user text turned out to be.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ForwardOutcome {
    /// Not a forward request; treat the text as an ordinary turn.
    NotForward,
    /// A forward request, but no reply has been produced yet.
    NothingToForward { recipient: String },
    /// A forward request with the cached reply to hand off.
    Forwarded { recipient: String, body: String },
}

/// Use case for resolving forward-this-reply requests
pub struct ForwardReplyUseCase {
    classifier: Arc<dyn ForwardIntent>,
    cache: Arc<LastReplyCache>,
    logger: Arc<dyn TurnLogger>,
}

impl ForwardReplyUseCase {
    pub fn new(classifier: Arc<dyn ForwardIntent>, cache: Arc<LastReplyCache>) -> Self {
        Self {
            classifier,
            cache,
            logger: Arc::new(NoTurnLogger),
        }
    }

    /// Attach a structured turn logger (defaults to a no-op).
    pub fn with_logger(mut self, logger: Arc<dyn TurnLogger>) -> Self {
        self.logger = logger;
        self
    }

    /// Classify `text` and, on a match, resolve the reply to forward.
    pub fn execute(&self, id: &ConversationId, text: &str) -> ForwardOutcome {
        let Some(recipient) = self.classifier.detect(text) else {
            return ForwardOutcome::NotForward;
        };

        let cached = self.cache.get(id);
        info!(
            "Forward request for {} to {} ({})",
            id,
            recipient,
            if cached.is_some() { "reply cached" } else { "nothing cached" }
        );
        self.logger.log(TurnEvent::new(
            "forward_requested",
            json!({
                "conversation": id.as_str(),
                "recipient": recipient,
                "resolved": cached.is_some(),
            }),
        ));

        match cached {
            Some(body) => ForwardOutcome::Forwarded { recipient, body },
            None => ForwardOutcome::NothingToForward { recipient },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedIntent(Option<String>);

    impl ForwardIntent for FixedIntent {
        fn detect(&self, _text: &str) -> Option<String> {
            self.0.clone()
        }
    }

    #[test]
    fn test_plain_text_is_not_forward() {
        let use_case = ForwardReplyUseCase::new(
            Arc::new(FixedIntent(None)),
            Arc::new(LastReplyCache::new()),
        );
        let outcome = use_case.execute(&ConversationId::from("42"), "hello");
        assert_eq!(outcome, ForwardOutcome::NotForward);
    }

    #[test]
    fn test_forward_without_cached_reply() {
        let use_case = ForwardReplyUseCase::new(
            Arc::new(FixedIntent(Some("a@b.c".to_string()))),
            Arc::new(LastReplyCache::new()),
        );
        let outcome = use_case.execute(&ConversationId::from("42"), "mail it to a@b.c");
        assert_eq!(
            outcome,
            ForwardOutcome::NothingToForward {
                recipient: "a@b.c".to_string()
            }
        );
    }

    #[test]
    fn test_forward_resolves_cached_reply() {
        let cache = Arc::new(LastReplyCache::new());
        let id = ConversationId::from("42");
        cache.set(&id, "Moot (deepseek):\nhi there");

        let use_case = ForwardReplyUseCase::new(
            Arc::new(FixedIntent(Some("a@b.c".to_string()))),
            Arc::clone(&cache),
        );
        let outcome = use_case.execute(&id, "mail it to a@b.c");
        assert_eq!(
            outcome,
            ForwardOutcome::Forwarded {
                recipient: "a@b.c".to_string(),
                body: "Moot (deepseek):\nhi there".to_string(),
            }
        );
    }
}
