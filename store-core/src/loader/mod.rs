//! Remote loader abstraction for syncstore.
//!
//! This module provides the pluggable loader contract that abstracts the
//! remote data source (HTTP API, mock for testing).
//!
//! # Design
//!
//! The loader trait is async and read-only:
//! - `load_all()` fetches the full collection
//! - `load_one(id)` fetches a single item by identifier
//!
//! Both return the entity's wire representation; the store engine converts
//! it to the device form and discards the wire form. Any conforming
//! implementation is substitutable without changing callers, which is what
//! makes deterministic, network-free testing possible.
//!
//! # Example
//!
//! ```ignore
//! let loader = MockLoader::<DevicePost>::new();
//! loader.queue_collection(vec![wire_post]);
//! let wires = loader.load_all().await?;
//! ```

mod mock;

pub use mock::MockLoader;

use async_trait::async_trait;
use thiserror::Error;

use store_types::{DeviceData, EntityId};

/// Loader errors.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Remote unreachable or returned a non-success status.
    #[error("transport error: {0}")]
    Transport(String),

    /// Payload was present but malformed.
    #[error("malformed payload: {0}")]
    Decode(String),

    /// Single-item fetch found no entity with this identifier.
    #[error("no item with id {0}")]
    Missing(EntityId),
}

/// The wire representation produced by a loader.
pub type Wire<L> = <<L as Loader>::Device as DeviceData>::Wire;

/// Contract for fetching entities from the remote data source.
///
/// Implementations own the transport mechanics (HTTP verbs, status
/// handling, payload decoding) and surface only the decoded wire records
/// or a [`LoadError`].
#[async_trait]
pub trait Loader: Send + Sync + 'static {
    /// The device representation this loader feeds.
    type Device: DeviceData;

    /// Fetch the full collection.
    ///
    /// An explicitly empty remote payload is `Ok(vec![])`, not an error.
    async fn load_all(&self) -> Result<Vec<Wire<Self>>, LoadError>;

    /// Fetch a single item by identifier.
    ///
    /// Fails with [`LoadError::Missing`] when the remote has no such id,
    /// distinct from a transport failure.
    async fn load_one(&self, id: EntityId) -> Result<Wire<Self>, LoadError>;
}
