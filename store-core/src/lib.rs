//! # store-core
//!
//! The generic reconciliation engine at the heart of syncstore.
//!
//! [`DataStore`] coordinates an asynchronous remote loader, a durable
//! persistent store, an in-memory cache, and any number of downstream
//! observers:
//!
//! ```text
//! Presentation → DataStore → Loader → Network
//!                    ↓
//!              PersistentStore (durable records)
//!                    ↓
//!              ChangeListener(s) → ObserverBridge → Presentation
//! ```
//!
//! Observers never see a torn intermediate state: `fetch()` returns either
//! the pre-load snapshot or the fully merged post-load snapshot, and the
//! change notification for a load fires only after both the persistent
//! store and the cache reflect the new data.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod loader;
pub mod notify;
pub mod persist;
mod store;

#[cfg(test)]
pub(crate) mod testutil;

pub use loader::{LoadError, Loader, MockLoader};
pub use notify::{ChangeListener, ChangeSignal};
pub use persist::{JsonFileStore, MemoryStore, PersistError, PersistentStore};
pub use store::{DataStore, DurableOf, StoreError};
