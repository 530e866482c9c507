//! Shared fixtures for store-core unit tests.
//!
//! A minimal three-representation entity ("note") wired through the
//! capability traits, so each test module doesn't repeat the boilerplate.

use serde::{Deserialize, Serialize};
use store_types::{DeviceData, EntityId, StorableData};

/// Wire form - what a remote collaborator would return.
#[derive(Debug, Clone, PartialEq)]
pub struct WireNote {
    pub id: u64,
    pub text: String,
}

/// Device form - what the cache holds.
#[derive(Debug, Clone, PartialEq)]
pub struct DeviceNote {
    pub id: EntityId,
    pub text: String,
}

/// Durable form - what the persistent store holds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredNote {
    pub id: EntityId,
    pub text: String,
}

impl DeviceData for DeviceNote {
    type Wire = WireNote;
    type Durable = StoredNote;

    fn id(&self) -> EntityId {
        self.id
    }

    fn from_wire(wire: WireNote) -> Self {
        Self {
            id: EntityId::new(wire.id),
            text: wire.text,
        }
    }

    fn from_durable(durable: StoredNote) -> Self {
        Self {
            id: durable.id,
            text: durable.text,
        }
    }
}

impl StorableData for StoredNote {
    type Device = DeviceNote;

    fn id(&self) -> EntityId {
        self.id
    }

    fn from_device(device: &DeviceNote) -> Self {
        Self {
            id: device.id,
            text: device.text.clone(),
        }
    }
}

pub fn wire(id: u64, text: &str) -> WireNote {
    WireNote {
        id,
        text: text.to_string(),
    }
}

pub fn stored(id: u64, text: &str) -> StoredNote {
    StoredNote {
        id: EntityId::new(id),
        text: text.to_string(),
    }
}

pub fn device(id: u64, text: &str) -> DeviceNote {
    DeviceNote {
        id: EntityId::new(id),
        text: text.to_string(),
    }
}
