//! Console message model.

use chrono::{DateTime, Utc};

/// A single timestamped console line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleMessage {
    /// When the line was appended.
    pub timestamp: DateTime<Utc>,
    /// Line text.
    pub text: String,
}

impl ConsoleMessage {
    /// Creates a message stamped with the current time.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            text: text.into(),
        }
    }

    /// Creates a message with an explicit timestamp. Deterministic
    /// tests use this instead of [`ConsoleMessage::new`].
    #[must_use]
    pub fn with_timestamp(timestamp: DateTime<Utc>, text: impl Into<String>) -> Self {
        Self {
            timestamp,
            text: text.into(),
        }
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::redundant_clone,
    clippy::manual_string_new,
    clippy::needless_collect,
    clippy::unreadable_literal,
    clippy::used_underscore_items,
    clippy::similar_names
)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_with_timestamp_keeps_the_given_instant() {
        let instant = Utc.with_ymd_and_hms(2004, 8, 25, 21, 0, 0).unwrap();
        let message = ConsoleMessage::with_timestamp(instant, "mail session started");
        assert_eq!(message.timestamp, instant);
        assert_eq!(message.text, "mail session started");
    }
}
