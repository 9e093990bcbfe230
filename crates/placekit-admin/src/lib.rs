//! # placekit-admin
//!
//! Admin panel plumbing for placekit: named, configurable actions and the
//! registry an admin host consumes them from. The registry is built
//! explicitly and passed into the site at construction; nothing registers
//! itself at load time.
//!
//! ## Modules
//!
//! - [`actions`] - the [`actions::AdminAction`] trait, the builtin filter
//!   action, and the action registry
//! - [`site`] - the admin site configuration holder

pub mod actions;
pub mod site;

// Re-export the most commonly used types at the crate root.
pub use actions::{ActionDescriptor, ActionRegistry, AdminAction, FilterAction};
pub use site::AdminSite;
