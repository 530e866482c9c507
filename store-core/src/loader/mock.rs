//! Mock loader for testing.
//!
//! Allows seeding wire records and capturing load calls for verification.

use super::{LoadError, Loader, Wire};
use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use store_types::{DeviceData, EntityId};

/// Mock loader for testing.
///
/// Seed it with wire records, optionally force failures, and inspect
/// which calls were made. Clones share state so tests can keep a handle
/// after handing the loader to a store.
#[derive(Debug)]
pub struct MockLoader<D: DeviceData> {
    inner: Arc<Mutex<MockLoaderInner<D::Wire>>>,
}

#[derive(Debug)]
struct MockLoaderInner<W> {
    collection: Vec<W>,
    queued_collections: VecDeque<Vec<W>>,
    items: HashMap<EntityId, W>,
    fail_next_load_all: Option<String>,
    fail_next_load_one: Option<String>,
    load_all_calls: usize,
    load_one_calls: Vec<EntityId>,
}

impl<W> Default for MockLoaderInner<W> {
    fn default() -> Self {
        Self {
            collection: Vec::new(),
            queued_collections: VecDeque::new(),
            items: HashMap::new(),
            fail_next_load_all: None,
            fail_next_load_one: None,
            load_all_calls: 0,
            load_one_calls: Vec::new(),
        }
    }
}

impl<D: DeviceData> Default for MockLoader<D> {
    fn default() -> Self {
        Self {
            inner: Arc::new(Mutex::new(MockLoaderInner::default())),
        }
    }
}

impl<D: DeviceData> MockLoader<D>
where
    D::Wire: Clone,
{
    /// Create a new mock loader with no seeded data.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the standing collection returned by `load_all()`.
    pub fn set_collection(&self, wires: Vec<D::Wire>) {
        let mut inner = self.inner.lock().unwrap();
        inner.collection = wires;
    }

    /// Queue a one-shot collection consumed by the next `load_all()` call,
    /// taking precedence over the standing collection.
    pub fn queue_collection(&self, wires: Vec<D::Wire>) {
        let mut inner = self.inner.lock().unwrap();
        inner.queued_collections.push_back(wires);
    }

    /// Seed a single item returned by `load_one()` for this id.
    pub fn insert_item(&self, id: EntityId, wire: D::Wire) {
        let mut inner = self.inner.lock().unwrap();
        inner.items.insert(id, wire);
    }

    /// Cause the next `load_all()` to fail with a transport error.
    pub fn fail_next_load_all(&self, error: &str) {
        let mut inner = self.inner.lock().unwrap();
        inner.fail_next_load_all = Some(error.to_string());
    }

    /// Cause the next `load_one()` to fail with a transport error.
    pub fn fail_next_load_one(&self, error: &str) {
        let mut inner = self.inner.lock().unwrap();
        inner.fail_next_load_one = Some(error.to_string());
    }

    /// Number of `load_all()` calls made so far.
    pub fn load_all_calls(&self) -> usize {
        let inner = self.inner.lock().unwrap();
        inner.load_all_calls
    }

    /// Identifiers requested through `load_one()`, in call order.
    pub fn load_one_calls(&self) -> Vec<EntityId> {
        let inner = self.inner.lock().unwrap();
        inner.load_one_calls.clone()
    }

    /// Clear all state (seeded data, failures, call records).
    pub fn reset(&self) {
        let mut inner = self.inner.lock().unwrap();
        *inner = MockLoaderInner::default();
    }
}

impl<D: DeviceData> Clone for MockLoader<D> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

#[async_trait]
impl<D: DeviceData> Loader for MockLoader<D>
where
    D::Wire: Clone + Send + Sync,
{
    type Device = D;

    async fn load_all(&self) -> Result<Vec<Wire<Self>>, LoadError> {
        let mut inner = self.inner.lock().unwrap();
        inner.load_all_calls += 1;

        // Check for forced failure
        if let Some(error) = inner.fail_next_load_all.take() {
            return Err(LoadError::Transport(error));
        }

        if let Some(wires) = inner.queued_collections.pop_front() {
            return Ok(wires);
        }
        Ok(inner.collection.clone())
    }

    async fn load_one(&self, id: EntityId) -> Result<Wire<Self>, LoadError> {
        let mut inner = self.inner.lock().unwrap();
        inner.load_one_calls.push(id);

        // Check for forced failure
        if let Some(error) = inner.fail_next_load_one.take() {
            return Err(LoadError::Transport(error));
        }

        inner
            .items
            .get(&id)
            .cloned()
            .ok_or(LoadError::Missing(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{wire, DeviceNote};

    #[tokio::test]
    async fn load_all_returns_standing_collection() {
        let loader = MockLoader::<DeviceNote>::new();
        loader.set_collection(vec![wire(1, "a"), wire(2, "b")]);

        let wires = loader.load_all().await.unwrap();

        assert_eq!(wires.len(), 2);
        assert_eq!(wires[0], wire(1, "a"));
    }

    #[tokio::test]
    async fn load_all_empty_by_default() {
        let loader = MockLoader::<DeviceNote>::new();
        let wires = loader.load_all().await.unwrap();
        assert!(wires.is_empty());
    }

    #[tokio::test]
    async fn queued_collection_takes_precedence_once() {
        let loader = MockLoader::<DeviceNote>::new();
        loader.set_collection(vec![wire(1, "standing")]);
        loader.queue_collection(vec![wire(2, "queued")]);

        let first = loader.load_all().await.unwrap();
        let second = loader.load_all().await.unwrap();

        assert_eq!(first[0].id, 2);
        assert_eq!(second[0].id, 1);
    }

    #[tokio::test]
    async fn load_one_returns_seeded_item() {
        let loader = MockLoader::<DeviceNote>::new();
        loader.insert_item(EntityId::new(7), wire(7, "seven"));

        let got = loader.load_one(EntityId::new(7)).await.unwrap();
        assert_eq!(got.text, "seven");
    }

    #[tokio::test]
    async fn load_one_missing_id_fails() {
        let loader = MockLoader::<DeviceNote>::new();

        let result = loader.load_one(EntityId::new(99)).await;
        assert!(matches!(result, Err(LoadError::Missing(id)) if id == EntityId::new(99)));
    }

    #[tokio::test]
    async fn forced_load_all_failure() {
        let loader = MockLoader::<DeviceNote>::new();
        loader.set_collection(vec![wire(1, "a")]);
        loader.fail_next_load_all("remote unreachable");

        let result = loader.load_all().await;
        assert!(matches!(result, Err(LoadError::Transport(_))));

        // Next call works again
        assert_eq!(loader.load_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn forced_load_one_failure() {
        let loader = MockLoader::<DeviceNote>::new();
        loader.insert_item(EntityId::new(1), wire(1, "a"));
        loader.fail_next_load_one("timeout");

        let result = loader.load_one(EntityId::new(1)).await;
        assert!(matches!(result, Err(LoadError::Transport(_))));

        loader.load_one(EntityId::new(1)).await.unwrap();
    }

    #[tokio::test]
    async fn call_recording() {
        let loader = MockLoader::<DeviceNote>::new();
        loader.insert_item(EntityId::new(3), wire(3, "c"));

        assert_eq!(loader.load_all_calls(), 0);
        loader.load_all().await.unwrap();
        loader.load_all().await.unwrap();
        loader.load_one(EntityId::new(3)).await.unwrap();

        assert_eq!(loader.load_all_calls(), 2);
        assert_eq!(loader.load_one_calls(), vec![EntityId::new(3)]);
    }

    #[tokio::test]
    async fn clone_shares_state() {
        let loader1 = MockLoader::<DeviceNote>::new();
        let loader2 = loader1.clone();

        loader1.set_collection(vec![wire(1, "a")]);
        assert_eq!(loader2.load_all().await.unwrap().len(), 1);
        assert_eq!(loader1.load_all_calls(), 1);
    }

    #[tokio::test]
    async fn reset_clears_all() {
        let loader = MockLoader::<DeviceNote>::new();
        loader.set_collection(vec![wire(1, "a")]);
        loader.load_all().await.unwrap();

        loader.reset();

        assert!(loader.load_all().await.unwrap().is_empty());
        assert_eq!(loader.load_all_calls(), 1);
    }
}
