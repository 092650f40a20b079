//! Forward-intent detection adapters

pub mod mail;

pub use mail::MailIntentDetector;
