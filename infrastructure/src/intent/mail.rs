//! Mail forward-intent detector
//!
//! Recognizes "mail it to <address>" requests anywhere in the user
//! text, case-insensitively, and extracts the address.

use moot_application::ForwardIntent;
use regex::Regex;

const MAIL_PATTERN: &str = r"(?i)mail it to ([\w.-]+@[\w.-]+)";

/// Regex-backed implementation of the `ForwardIntent` port
pub struct MailIntentDetector {
    pattern: Regex,
}

impl MailIntentDetector {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(MAIL_PATTERN)?,
        })
    }
}

impl ForwardIntent for MailIntentDetector {
    fn detect(&self, text: &str) -> Option<String> {
        self.pattern
            .captures(text)
            .and_then(|captures| captures.get(1))
            .map(|address| address.as_str().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detector() -> MailIntentDetector {
        MailIntentDetector::new().unwrap()
    }

    #[test]
    fn test_detects_address() {
        assert_eq!(
            detector().detect("mail it to bob@example.com"),
            Some("bob@example.com".to_string())
        );
    }

    #[test]
    fn test_trigger_is_case_insensitive() {
        assert_eq!(
            detector().detect("Mail It To Bob@Example.COM"),
            Some("Bob@Example.COM".to_string())
        );
    }

    #[test]
    fn test_detects_inside_longer_text() {
        assert_eq!(
            detector().detect("great answer, please mail it to first.last@my-host.org thanks"),
            Some("first.last@my-host.org".to_string())
        );
    }

    #[test]
    fn test_plain_text_is_not_a_trigger() {
        assert_eq!(detector().detect("what is the mail protocol?"), None);
    }

    #[test]
    fn test_trigger_without_address_is_ignored() {
        assert_eq!(detector().detect("mail it to my boss"), None);
    }
}
