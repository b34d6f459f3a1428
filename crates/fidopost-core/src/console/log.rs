//! Bounded console log buffer.

use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::notify::{EventSender, StationEvent};

use super::model::ConsoleMessage;

/// Bounded console log with capacity eviction.
///
/// All buffer access serializes through one mutex. Appends additionally
/// post [`StationEvent::LogUpdated`] so the display can redraw without
/// polling. Share across tasks with `Arc`.
#[derive(Debug)]
pub struct ConsoleLog {
    messages: Mutex<VecDeque<ConsoleMessage>>,
    capacity: usize,
    events: EventSender,
}

impl ConsoleLog {
    /// Messages kept when no explicit capacity is given.
    pub const DEFAULT_CAPACITY: usize = 100;

    /// Creates a log holding at most `capacity` messages.
    #[must_use]
    pub fn new(capacity: usize, events: EventSender) -> Self {
        Self {
            messages: Mutex::new(VecDeque::with_capacity(capacity)),
            capacity,
            events,
        }
    }

    /// Creates a log with [`ConsoleLog::DEFAULT_CAPACITY`].
    #[must_use]
    pub fn with_default_capacity(events: EventSender) -> Self {
        Self::new(Self::DEFAULT_CAPACITY, events)
    }

    /// Appends a line stamped with the current time, evicting the
    /// oldest lines while the log is over capacity.
    pub fn append(&self, text: impl Into<String>) {
        self.push(ConsoleMessage::new(text));
    }

    /// Appends an already-built message, evicting the oldest lines
    /// while the log is over capacity.
    pub fn push(&self, message: ConsoleMessage) {
        {
            let mut messages = self.lock_messages();
            messages.push_back(message);
            while messages.len() > self.capacity {
                messages.pop_front();
            }
        }
        self.events.post(StationEvent::LogUpdated);
    }

    /// Number of messages currently retained.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock_messages().len()
    }

    /// True when the log holds no messages.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock_messages().is_empty()
    }

    /// Returns the message at `index`, counting from the oldest
    /// retained one.
    #[must_use]
    pub fn message(&self, index: usize) -> Option<ConsoleMessage> {
        self.lock_messages().get(index).cloned()
    }

    /// Copies the retained messages, oldest first.
    #[must_use]
    pub fn snapshot(&self) -> Vec<ConsoleMessage> {
        self.lock_messages().iter().cloned().collect()
    }

    fn lock_messages(&self) -> MutexGuard<'_, VecDeque<ConsoleMessage>> {
        self.messages.lock().unwrap_or_else(PoisonError::into_inner)
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
    use tokio::sync::mpsc;

    use super::*;

    fn log_with_capacity(capacity: usize) -> (ConsoleLog, mpsc::Receiver<StationEvent>) {
        let (events, rx) = EventSender::channel(EventSender::DEFAULT_CAPACITY);
        (ConsoleLog::new(capacity, events), rx)
    }

    #[tokio::test]
    async fn test_append_retains_in_order() {
        let (log, _rx) = log_with_capacity(10);
        assert!(log.is_empty());

        log.append("first");
        log.append("second");

        assert_eq!(log.len(), 2);
        assert_eq!(log.message(0).unwrap().text, "first");
        assert_eq!(log.message(1).unwrap().text, "second");
        assert_eq!(log.message(2), None);
    }

    #[tokio::test]
    async fn test_capacity_evicts_oldest() {
        let (log, _rx) = log_with_capacity(3);
        for n in 1..=5 {
            log.append(format!("line {n}"));
        }

        assert_eq!(log.len(), 3);
        assert_eq!(log.message(0).unwrap().text, "line 3");
        assert_eq!(log.message(2).unwrap().text, "line 5");
    }

    #[tokio::test]
    async fn test_snapshot_copies_oldest_first() {
        let (log, _rx) = log_with_capacity(2);
        log.append("one");
        log.append("two");
        log.append("three");

        let texts: Vec<String> = log.snapshot().into_iter().map(|m| m.text).collect();
        assert_eq!(texts, vec!["two".to_string(), "three".to_string()]);
    }

    #[tokio::test]
    async fn test_append_posts_log_updated() {
        let (log, mut rx) = log_with_capacity(10);
        log.append("hello");
        assert_eq!(rx.recv().await, Some(StationEvent::LogUpdated));
    }

    #[tokio::test]
    async fn test_lagging_consumer_never_blocks_append() {
        let (events, mut rx) = EventSender::channel(1);
        let log = ConsoleLog::new(10, events);

        // Nobody drains rx; only the first event fits the channel.
        for n in 0..5 {
            log.append(format!("line {n}"));
        }

        assert_eq!(log.len(), 5);
        assert_eq!(rx.try_recv().ok(), Some(StationEvent::LogUpdated));
        assert_eq!(rx.try_recv().ok(), None);
    }
}
