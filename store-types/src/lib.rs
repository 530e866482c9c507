//! # store-types
//!
//! Foundational types for the syncstore cache-of-record engine.
//!
//! This crate defines the contracts shared by every other syncstore crate:
//! - [`EntityId`] - the stable identifier carried by all three
//!   representations of a logical entity
//! - [`DeviceData`] - the in-memory representation capability
//! - [`StorableData`] - the durable representation capability
//!
//! One logical entity has three shapes with one-directional conversion
//! edges: wire → device (fresh load), device → durable (persistence),
//! durable → device (hydration). There is no reverse edge back to the
//! wire form; it is transient and discarded after conversion.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod data;
mod ids;

pub use data::{DeviceData, StorableData};
pub use ids::EntityId;
