//! ObserverBridge - relays a store's change signal as its own.

use std::sync::Mutex;

use tokio::task::JoinHandle;

use store_core::{ChangeListener, ChangeSignal};

/// Relays change notifications from a store to downstream observers.
///
/// The bridge holds only a [`ChangeListener`], never the store itself,
/// so the subscription is strictly one-directional. Each notification the
/// store emits is forwarded once to every listener subscribed on the
/// bridge's own signal. Dropping the bridge stops the forwarding task,
/// which is what unsubscribes it from the store.
///
/// # Example
///
/// ```ignore
/// let bridge = ObserverBridge::consuming(store.subscribe());
/// let mut changes = bridge.subscribe();
/// store.load().await?;
/// changes.changed().await; // re-render from store.fetch()
/// ```
#[derive(Debug)]
pub struct ObserverBridge {
    signal: ChangeSignal,
    forward: Mutex<Option<JoinHandle<()>>>,
}

impl Default for ObserverBridge {
    fn default() -> Self {
        Self::new()
    }
}

impl ObserverBridge {
    /// Create a bridge that is not yet consuming any store signal.
    ///
    /// Call [`consume`](Self::consume) to attach it.
    pub fn new() -> Self {
        Self {
            signal: ChangeSignal::new(),
            forward: Mutex::new(None),
        }
    }

    /// Create a bridge already consuming the given store signal.
    ///
    /// Must be called within a tokio runtime.
    pub fn consuming(listener: ChangeListener) -> Self {
        let bridge = Self::new();
        bridge.consume(listener);
        bridge
    }

    /// Start forwarding notifications from the given store signal.
    ///
    /// Replaces (and detaches) any previously consumed signal. Must be
    /// called within a tokio runtime.
    pub fn consume(&self, mut listener: ChangeListener) {
        let signal = self.signal.clone();
        let handle = tokio::spawn(async move {
            // changed() returns false once the store side is gone
            while listener.changed().await {
                signal.emit();
            }
        });

        let mut forward = self.forward.lock().unwrap();
        if let Some(previous) = forward.replace(handle) {
            previous.abort();
        }
    }

    /// Check whether the bridge is currently consuming a store signal.
    pub fn is_consuming(&self) -> bool {
        self.forward
            .lock()
            .unwrap()
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    /// Subscribe to the bridge's own change signal.
    pub fn subscribe(&self) -> ChangeListener {
        self.signal.subscribe()
    }

    /// Number of listeners subscribed on the bridge's own signal.
    pub fn subscriber_count(&self) -> usize {
        self.signal.subscriber_count()
    }
}

impl Drop for ObserverBridge {
    fn drop(&mut self) {
        if let Some(handle) = self.forward.lock().unwrap().take() {
            handle.abort();
        }
    }
}
