//! # placekit-core
//!
//! Core types, settings, and error types for placekit. This crate has no
//! domain dependencies and provides the foundation for the client and admin
//! crates.
//!
//! ## Modules
//!
//! - [`error`] - Error types and result alias
//! - [`settings`] - Configuration with sensible defaults
//! - [`settings_loader`] - TOML loading for [`settings::Settings`]
//! - [`logging`] - Tracing-based logging integration

pub mod error;
pub mod logging;
pub mod settings;
pub mod settings_loader;

// Re-export the most commonly used types at the crate root.
pub use error::{PlacekitError, PlacekitResult};
pub use settings::{CsrfSettings, Settings};
