//! # store-posts
//!
//! The concrete Post entity domain for syncstore: the three
//! representations of a post ([`NetworkPost`], [`DevicePost`],
//! [`StoredPost`]) and an HTTP [`PostLoader`] against the
//! JSONPlaceholder API.
//!
//! This crate is the reference example of plugging an entity type into
//! the generic engine: supply the conversion edges via the store-types
//! traits, supply the remote fetches via the store-core loader trait,
//! and `DataStore` does the rest.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod loader;
mod post;

pub use loader::{PostLoader, DEFAULT_BASE_URL};
pub use post::{DevicePost, NetworkPost, StoredPost};
