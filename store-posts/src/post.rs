//! The three representations of a post.
//!
//! Wire → device on fresh load, device → durable when persisting,
//! durable → device on hydration. The wire form mirrors the remote
//! payload exactly (including its `userId` field naming) and is dropped
//! as soon as it is converted.

use serde::{Deserialize, Serialize};

use store_types::{DeviceData, EntityId, StorableData};

/// A post as decoded from the remote payload.
///
/// ```json
/// { "userId": 1, "id": 1, "title": "...", "body": "..." }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkPost {
    /// Post identifier.
    pub id: u64,
    /// Identifier of the authoring user.
    #[serde(rename = "userId")]
    pub user_id: u64,
    /// Post title.
    pub title: String,
    /// Post body text.
    pub body: String,
}

/// A post as held in the in-memory cache.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DevicePost {
    /// Post identifier.
    pub id: EntityId,
    /// Identifier of the authoring user.
    pub user_id: u64,
    /// Post title.
    pub title: String,
    /// Post body text.
    pub body: String,
}

/// A post as written to the persistent store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredPost {
    /// Post identifier.
    pub id: EntityId,
    /// Identifier of the authoring user.
    pub user_id: u64,
    /// Post title.
    pub title: String,
    /// Post body text.
    pub body: String,
}

impl DeviceData for DevicePost {
    type Wire = NetworkPost;
    type Durable = StoredPost;

    fn id(&self) -> EntityId {
        self.id
    }

    fn from_wire(wire: NetworkPost) -> Self {
        Self {
            id: EntityId::new(wire.id),
            user_id: wire.user_id,
            title: wire.title,
            body: wire.body,
        }
    }

    fn from_durable(durable: StoredPost) -> Self {
        Self {
            id: durable.id,
            user_id: durable.user_id,
            title: durable.title,
            body: durable.body,
        }
    }
}

impl StorableData for StoredPost {
    type Device = DevicePost;

    fn id(&self) -> EntityId {
        self.id
    }

    fn from_device(device: &DevicePost) -> Self {
        Self {
            id: device.id,
            user_id: device.user_id,
            title: device.title.clone(),
            body: device.body.clone(),
        }
    }
}
