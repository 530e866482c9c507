//! DataStore - the generic reconciliation engine.
//!
//! # Architecture
//!
//! `DataStore<L>` is the sole owner of the in-memory cache, the sole
//! writer to its persistent store, and the sole source of change
//! notifications for its entity type:
//!
//! ```text
//! load()/load_one() → Loader → wire records
//!                        ↓ from_wire
//!   commit: persist durable forms → merge cache per id → notify once
//! ```
//!
//! The commit section runs under an apply mutex so concurrent loads are
//! serialized and apply in completion order. The cache sits behind a
//! non-async mutex held only for plain read-modify-write sections, which
//! is what lets `fetch()` stay synchronous and still never observe a
//! partial merge.
//!
//! # Example
//!
//! ```ignore
//! let store = DataStore::open(PostLoader::new(), JsonFileStore::new(path)).await?;
//! let mut changes = store.subscribe();
//! store.load().await?;
//! changes.changed().await;
//! for post in store.fetch() {
//!     println!("{}", post.title);
//! }
//! ```

use std::sync::Mutex as StdMutex;

use thiserror::Error;
use tokio::sync::Mutex as AsyncMutex;

use store_types::{DeviceData, EntityId, StorableData};

use crate::loader::{LoadError, Loader};
use crate::notify::{ChangeListener, ChangeSignal};
use crate::persist::{PersistError, PersistentStore};

/// The durable representation matching a loader's device type.
pub type DurableOf<L> = <<L as Loader>::Device as DeviceData>::Durable;

/// Store errors.
///
/// Pure propagation: the store performs no retry and no error
/// translation beyond wrapping the collaborator's error kind.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The loader failed; cache and persistent store are untouched.
    #[error(transparent)]
    Load(#[from] LoadError),

    /// The persistent store failed; the cache is untouched.
    #[error(transparent)]
    Persist(#[from] PersistError),
}

/// Generic store reconciling a remote source with a local durable cache.
///
/// Holds device representations in memory, one per id, last-fetch-wins.
/// Readers call [`fetch`](Self::fetch) for a consistent snapshot at any
/// time; [`load`](Self::load) and [`load_one`](Self::load_one) refresh
/// from the remote source and notify subscribed observers exactly once
/// per successful call.
pub struct DataStore<L: Loader> {
    loader: L,
    persist: Box<dyn PersistentStore<DurableOf<L>>>,
    cache: StdMutex<Vec<L::Device>>,
    apply: AsyncMutex<()>,
    changed: ChangeSignal,
}

impl<L: Loader> DataStore<L> {
    /// Open a store, hydrating the cache from the persistent store.
    ///
    /// Reads every existing durable record and converts it to the device
    /// form, so `fetch()` is meaningful before any network load has
    /// completed. Makes no loader call. Fails if the persistent store
    /// cannot be read.
    pub async fn open<P>(loader: L, persist: P) -> Result<Self, StoreError>
    where
        P: PersistentStore<DurableOf<L>> + 'static,
    {
        let records = persist.read_all().await?;
        let cache: Vec<L::Device> = records
            .into_iter()
            .map(<L::Device as DeviceData>::from_durable)
            .collect();

        tracing::debug!(entries = cache.len(), "hydrated cache from persistent store");

        Ok(Self {
            loader,
            persist: Box::new(persist),
            cache: StdMutex::new(cache),
            apply: AsyncMutex::new(()),
            changed: ChangeSignal::new(),
        })
    }

    /// Return the current cache contents as an ordered snapshot.
    ///
    /// Synchronous and infallible; performs no I/O. Order is hydration
    /// order with fresh entries overlaid in place and new ids appended in
    /// fetch order - deterministic for a given internal state.
    pub fn fetch(&self) -> Vec<L::Device> {
        self.cache.lock().unwrap().clone()
    }

    /// Number of entities currently cached.
    pub fn len(&self) -> usize {
        self.cache.lock().unwrap().len()
    }

    /// Check if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.cache.lock().unwrap().is_empty()
    }

    /// Refresh the full collection from the remote source.
    ///
    /// On success every fetched entity replaces its cache entry (per id;
    /// ids absent from the fresh payload are NOT removed), the durable
    /// forms are written through to the persistent store, and exactly one
    /// change notification is emitted. On failure cache and persistent
    /// store are left exactly as before and no notification fires.
    pub async fn load(&self) -> Result<(), StoreError> {
        let wires = self.loader.load_all().await?;
        let fresh: Vec<L::Device> = wires
            .into_iter()
            .map(<L::Device as DeviceData>::from_wire)
            .collect();

        tracing::debug!(entries = fresh.len(), "loaded collection from remote");
        self.commit(fresh).await
    }

    /// Refresh a single entity from the remote source.
    ///
    /// Same commit contract as [`load`](Self::load), scoped to one id.
    /// A missing remote entity propagates as
    /// [`LoadError::Missing`](crate::loader::LoadError::Missing) with all
    /// state untouched.
    pub async fn load_one(&self, id: EntityId) -> Result<(), StoreError> {
        let wire = self.loader.load_one(id).await?;
        let device = <L::Device as DeviceData>::from_wire(wire);

        tracing::debug!(%id, "loaded item from remote");
        self.commit(vec![device]).await
    }

    /// Subscribe to the zero-payload change signal.
    ///
    /// The notification for a load is delivered strictly after both the
    /// persistent store and the cache reflect the new data, so a listener
    /// reacting to it sees the just-loaded state in `fetch()`. A listener
    /// that falls behind the channel capacity coalesces the missed
    /// notifications into a single wakeup (see
    /// [`ChangeListener::changed`]); re-reading via `fetch()` always
    /// observes the latest committed state.
    pub fn subscribe(&self) -> ChangeListener {
        self.changed.subscribe()
    }

    /// Number of currently subscribed change listeners.
    pub fn subscriber_count(&self) -> usize {
        self.changed.subscriber_count()
    }

    /// Borrow the underlying loader (for testing).
    pub fn loader(&self) -> &L {
        &self.loader
    }

    /// Apply freshly loaded device entries: persist, merge, notify.
    ///
    /// Serialized by the apply mutex so concurrent loads commit whole,
    /// in completion order. The persist write happens before the cache
    /// merge; a persist failure therefore leaves the cache untouched.
    async fn commit(&self, fresh: Vec<L::Device>) -> Result<(), StoreError> {
        let _guard = self.apply.lock().await;

        if !fresh.is_empty() {
            let records: Vec<DurableOf<L>> = fresh
                .iter()
                .map(<DurableOf<L> as StorableData>::from_device)
                .collect();
            self.persist.write_all(&records).await?;

            let mut cache = self.cache.lock().unwrap();
            for item in fresh {
                if let Some(pos) = cache.iter().position(|c| c.id() == item.id()) {
                    cache[pos] = item;
                } else {
                    cache.push(item);
                }
            }
        }

        self.changed.emit();
        Ok(())
    }
}
