//! Change notification plumbing.
//!
//! The store owns a broadcast channel of zero-payload "changed" events.
//! Observers hold a [`ChangeListener`] and re-read state via `fetch()`
//! when it fires; no diff is carried on the signal.

use tokio::sync::broadcast;

/// Capacity of a change channel. A listener that falls further behind
/// than this coalesces the backlog into a single wakeup.
const CHANGE_CHANNEL_CAPACITY: usize = 16;

/// The emitting side of a change signal.
///
/// Owned by whoever produces notifications (the store engine, an
/// observer bridge). Handing out [`ChangeListener`]s grants observation
/// only; the emitting side never leaves its owner.
#[derive(Debug, Clone)]
pub struct ChangeSignal {
    tx: broadcast::Sender<()>,
}

impl Default for ChangeSignal {
    fn default() -> Self {
        Self::new()
    }
}

impl ChangeSignal {
    /// Create a new signal with no subscribers.
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(CHANGE_CHANNEL_CAPACITY);
        Self { tx }
    }

    /// Notify all current subscribers. No subscribers is fine.
    pub fn emit(&self) {
        let _ = self.tx.send(());
    }

    /// Register a new listener on this signal.
    pub fn subscribe(&self) -> ChangeListener {
        ChangeListener::new(self.tx.subscribe())
    }

    /// Number of currently subscribed listeners.
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

/// A subscription to a store's change signal.
///
/// Created by `DataStore::subscribe`. Dropping the listener unsubscribes;
/// the listener grants no access to the store itself, let alone any
/// mutation capability.
#[derive(Debug)]
pub struct ChangeListener {
    rx: broadcast::Receiver<()>,
}

impl ChangeListener {
    pub(crate) fn new(rx: broadcast::Receiver<()>) -> Self {
        Self { rx }
    }

    /// Wait for the next change notification.
    ///
    /// Returns `true` when a notification arrived and `false` when the
    /// store side is gone. A listener that fell behind coalesces the
    /// missed notifications into a single wakeup.
    pub async fn changed(&mut self) -> bool {
        match self.rx.recv().await {
            Ok(()) | Err(broadcast::error::RecvError::Lagged(_)) => true,
            Err(broadcast::error::RecvError::Closed) => false,
        }
    }

    /// Poll for a pending notification without waiting.
    ///
    /// Returns `true` if at least one notification was pending.
    pub fn try_changed(&mut self) -> bool {
        match self.rx.try_recv() {
            Ok(()) | Err(broadcast::error::TryRecvError::Lagged(_)) => true,
            Err(broadcast::error::TryRecvError::Empty)
            | Err(broadcast::error::TryRecvError::Closed) => false,
        }
    }

    /// Create a fresh listener on the same signal.
    pub fn resubscribe(&self) -> Self {
        Self {
            rx: self.rx.resubscribe(),
        }
    }
}
