//! Durable persistence layer for syncstore.
//!
//! Provides the persistent-store boundary the engine writes through after
//! every successful load, plus two backends: an in-memory map for tests
//! and demos, and a JSON file for on-device durability.

mod json;
mod memory;

pub use json::JsonFileStore;
pub use memory::MemoryStore;

use async_trait::async_trait;
use thiserror::Error;

use store_types::StorableData;

/// Persistent store errors.
#[derive(Debug, Error)]
pub enum PersistError {
    /// Reading durable records failed.
    #[error("read failed: {0}")]
    Read(String),

    /// Writing durable records failed.
    #[error("write failed: {0}")]
    Write(String),

    /// Durable data exists but cannot be decoded.
    #[error("corrupt store: {0}")]
    Corrupt(String),
}

/// Trait for durable storage of an entity's durable representation.
///
/// A backend holds at most one record per [`EntityId`](store_types::EntityId)
/// and is owned exclusively by a single `DataStore`; nothing else writes
/// to it.
#[async_trait]
pub trait PersistentStore<S: StorableData>: Send + Sync {
    /// Read all durable records, in ascending id order.
    ///
    /// The deterministic order is what makes hydration order (and thereby
    /// `fetch()` snapshots) reproducible for a given stored state.
    async fn read_all(&self) -> Result<Vec<S>, PersistError>;

    /// Upsert the given records by id.
    ///
    /// Records for ids not mentioned are left untouched. A failed write
    /// must leave previously stored records readable.
    async fn write_all(&self, records: &[S]) -> Result<(), PersistError>;
}
