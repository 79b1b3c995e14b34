//! Process-local change signals.
//!
//! Mutating the cart or the favorites list emits a zero-payload event so
//! other live views (a cart badge, a favorites page) know to re-read the
//! relevant storage key. The events carry no data on purpose: listeners go
//! back to the store, which is the single source of truth.
//!
//! These signals are process-local only. A second process sharing the same
//! profile directory gets no notification; it sees changes on its next read.

use tokio::sync::broadcast;

/// Default buffer size for the event channel.
const EVENT_CAPACITY: usize = 16;

/// A zero-payload change signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreEvent {
    /// The `cart` key changed; re-read it.
    CartUpdated,
    /// The `favorites` key changed; re-read it.
    FavoritesUpdated,
}

/// The process-local event channel.
///
/// Cloning shares the channel. Emitting never blocks and never fails a
/// mutation: if nobody is listening, the signal is dropped.
#[derive(Debug, Clone)]
pub struct StoreEvents {
    tx: broadcast::Sender<StoreEvent>,
}

impl StoreEvents {
    /// Create a new event channel.
    #[must_use]
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(EVENT_CAPACITY);
        Self { tx }
    }

    /// Emit a signal to all current subscribers.
    pub fn emit(&self, event: StoreEvent) {
        // Err means no live receivers, which is fine.
        let _ = self.tx.send(event);
    }

    /// Subscribe to signals emitted after this call.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.tx.subscribe()
    }
}

impl Default for StoreEvents {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_subscriber_receives_emitted_event() {
        let events = StoreEvents::new();
        let mut rx = events.subscribe();
        events.emit(StoreEvent::CartUpdated);
        assert_eq!(rx.recv().await.unwrap(), StoreEvent::CartUpdated);
    }

    #[test]
    fn test_emit_without_subscribers_does_not_panic() {
        let events = StoreEvents::new();
        events.emit(StoreEvent::FavoritesUpdated);
    }

    #[tokio::test]
    async fn test_subscribers_only_see_later_events() {
        let events = StoreEvents::new();
        events.emit(StoreEvent::CartUpdated);
        let mut rx = events.subscribe();
        events.emit(StoreEvent::FavoritesUpdated);
        assert_eq!(rx.recv().await.unwrap(), StoreEvent::FavoritesUpdated);
    }
}
