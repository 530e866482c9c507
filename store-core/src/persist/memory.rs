//! In-memory persistent store for testing.
//!
//! Stores durable records in a thread-safe map. Not persistent - all data
//! is lost when the store is dropped.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use store_types::{EntityId, StorableData};

use super::{PersistError, PersistentStore};

/// In-memory persistent store for testing and demos.
///
/// A `BTreeMap` keyed by id gives `read_all` its ascending-id order for
/// free. Clones share state so tests can inspect the store after handing
/// it to a `DataStore`.
#[derive(Debug)]
pub struct MemoryStore<S> {
    records: Arc<Mutex<BTreeMap<EntityId, S>>>,
}

impl<S> Default for MemoryStore<S> {
    fn default() -> Self {
        Self {
            records: Arc::new(Mutex::new(BTreeMap::new())),
        }
    }
}

impl<S> Clone for MemoryStore<S> {
    fn clone(&self) -> Self {
        Self {
            records: Arc::clone(&self.records),
        }
    }
}

impl<S: StorableData> MemoryStore<S> {
    /// Create a new empty memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a memory store pre-seeded with records.
    pub fn with_records(records: Vec<S>) -> Self {
        let store = Self::new();
        {
            let mut map = store.records.lock().unwrap();
            for record in records {
                map.insert(record.id(), record);
            }
        }
        store
    }

    /// Get the record stored for an id, if any.
    pub fn get(&self, id: EntityId) -> Option<S> {
        self.records.lock().unwrap().get(&id).cloned()
    }

    /// Get the number of records currently stored.
    pub fn len(&self) -> usize {
        self.records.lock().unwrap().len()
    }

    /// Check if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.records.lock().unwrap().is_empty()
    }

    /// Clear all records from the store.
    pub fn clear(&self) {
        self.records.lock().unwrap().clear();
    }
}

#[async_trait]
impl<S: StorableData> PersistentStore<S> for MemoryStore<S> {
    async fn read_all(&self) -> Result<Vec<S>, PersistError> {
        Ok(self.records.lock().unwrap().values().cloned().collect())
    }

    async fn write_all(&self, records: &[S]) -> Result<(), PersistError> {
        let mut map = self.records.lock().unwrap();
        for record in records {
            map.insert(record.id(), record.clone());
        }
        Ok(())
    }
}
