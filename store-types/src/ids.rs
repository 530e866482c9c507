//! Entity identifier type for syncstore.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The stable identifier of a logical entity.
///
/// Identical across the wire, device, and durable representations of the
/// same entity; the in-memory cache and the persistent store are both
/// keyed by it.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(u64);

impl EntityId {
    /// Create an EntityId from a raw value.
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Get the raw value of this EntityId.
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl From<u64> for EntityId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EntityId({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entity_id_value_roundtrip() {
        let id = EntityId::new(42);
        assert_eq!(id.value(), 42);
        assert_eq!(id, EntityId::from(42));
    }

    #[test]
    fn entity_id_display() {
        assert_eq!(EntityId::new(7).to_string(), "7");
    }

    #[test]
    fn entity_id_orders_by_value() {
        assert!(EntityId::new(1) < EntityId::new(2));
    }

    #[test]
    fn entity_id_serde_is_transparent() {
        let json = serde_json::to_string(&EntityId::new(9)).unwrap();
        assert_eq!(json, "9");
        let back: EntityId = serde_json::from_str("9").unwrap();
        assert_eq!(back, EntityId::new(9));
    }
}
