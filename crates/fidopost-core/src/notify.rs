//! Station event notifications.
//!
//! Producers post events through a cloned [`EventSender`]; one
//! consumer task drains the receiving half. The channel is bounded and
//! posting never blocks: when the consumer lags, the event is dropped
//! and a warning is logged.

use tokio::sync::mpsc;
use tracing::warn;

/// A change broadcast to whoever drives the station display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StationEvent {
    /// The console log gained a message.
    LogUpdated,
    /// The station settings were rewritten.
    SettingsChanged,
}

/// Posting half of the station event channel.
///
/// Cheap to clone; every producer holds its own copy.
#[derive(Debug, Clone)]
pub struct EventSender {
    tx: mpsc::Sender<StationEvent>,
}

impl EventSender {
    /// Undelivered events held when no explicit capacity is given.
    pub const DEFAULT_CAPACITY: usize = 32;

    /// Creates a bounded event channel.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    #[must_use]
    pub fn channel(capacity: usize) -> (Self, mpsc::Receiver<StationEvent>) {
        let (tx, rx) = mpsc::channel(capacity);
        (Self { tx }, rx)
    }

    /// Posts an event without blocking.
    ///
    /// A full channel drops the event and logs a warning; a closed
    /// channel (the consumer is gone) drops it silently.
    pub fn post(&self, event: StationEvent) {
        match self.tx.try_send(event) {
            Ok(()) => {}
            Err(mpsc::error::TrySendError::Full(event)) => {
                warn!("Event channel full, dropping {event:?}");
            }
            Err(mpsc::error::TrySendError::Closed(_)) => {}
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
    use super::*;

    #[tokio::test]
    async fn test_posted_events_arrive_in_order() {
        let (sender, mut rx) = EventSender::channel(EventSender::DEFAULT_CAPACITY);
        sender.post(StationEvent::LogUpdated);
        sender.post(StationEvent::SettingsChanged);

        assert_eq!(rx.recv().await, Some(StationEvent::LogUpdated));
        assert_eq!(rx.recv().await, Some(StationEvent::SettingsChanged));
    }

    #[tokio::test]
    async fn test_full_channel_drops_newest_event() {
        let (sender, mut rx) = EventSender::channel(1);
        sender.post(StationEvent::LogUpdated);
        sender.post(StationEvent::SettingsChanged);

        assert_eq!(rx.recv().await, Some(StationEvent::LogUpdated));
        assert_eq!(rx.try_recv().ok(), None);
    }

    #[tokio::test]
    async fn test_posting_after_consumer_drop_is_silent() {
        let (sender, rx) = EventSender::channel(1);
        drop(rx);
        sender.post(StationEvent::LogUpdated);
    }

    #[tokio::test]
    async fn test_clones_feed_the_same_receiver() {
        let (sender, mut rx) = EventSender::channel(4);
        let other = sender.clone();
        other.post(StationEvent::SettingsChanged);
        assert_eq!(rx.recv().await, Some(StationEvent::SettingsChanged));
    }
}
