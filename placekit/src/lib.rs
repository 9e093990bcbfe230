//! # placekit
//!
//! Client and admin plumbing for community place-mapping services.
//!
//! This is the meta-crate that re-exports the sub-crates for convenient
//! access. Depend on `placekit` for everything, or on individual crates for
//! finer-grained control.

/// Core types, settings, and error types.
pub use placekit_core as core;

/// Entity models, collections, and the request pipeline.
#[cfg(feature = "client")]
pub use placekit_client as client;

/// Admin action registry and site configuration.
#[cfg(feature = "admin")]
pub use placekit_admin as admin;
