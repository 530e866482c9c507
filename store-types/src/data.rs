//! Capability traits tying together the three representations of an entity.
//!
//! A concrete entity domain supplies three types - a wire type decoded from
//! the remote payload, a device type used in memory, and a durable type
//! written to the persistent store - and wires them together by implementing
//! [`DeviceData`] on the device type and [`StorableData`] on the durable
//! type. The store engine is generic over these contracts and never sees
//! the concrete types.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::EntityId;

/// The in-memory representation of an entity.
///
/// Constructible from either source the cache is populated from: the wire
/// form (fresh network load) or the durable form (hydration at startup).
pub trait DeviceData: Clone + Send + Sync + 'static {
    /// The shape decoded directly from the remote payload. Transient:
    /// discarded immediately after conversion.
    type Wire: Send + 'static;

    /// The shape written to and read from the persistent store.
    type Durable: StorableData<Device = Self>;

    /// The stable identifier of this entity.
    fn id(&self) -> EntityId;

    /// Build the device form from a freshly fetched wire record.
    fn from_wire(wire: Self::Wire) -> Self;

    /// Build the device form from a durable record read back from storage.
    fn from_durable(durable: Self::Durable) -> Self;
}

/// The durable representation of an entity.
///
/// Constructed only from the device form; the durable form never builds
/// anything other than itself. Serde bounds let any persistence backend
/// encode it without knowing the concrete type.
pub trait StorableData:
    Clone + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// The device form this durable record is derived from.
    type Device: DeviceData<Durable = Self>;

    /// The stable identifier of this entity.
    fn id(&self) -> EntityId;

    /// Build the durable form from the in-memory device form.
    fn from_device(device: &Self::Device) -> Self;
}
