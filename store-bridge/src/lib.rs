//! # store-bridge
//!
//! Observer bridge between a [`DataStore`](store_core::DataStore) and a
//! presentation layer.
//!
//! The bridge consumes a store's change signal and republishes it as its
//! own, so a presentation-layer object can observe "something changed"
//! without the store ever depending on a presentation type - and without
//! the bridge gaining any mutation capability over the store.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod bridge;

pub use bridge::ObserverBridge;
