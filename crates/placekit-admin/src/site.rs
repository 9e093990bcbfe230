//! Admin site configuration holder.
//!
//! The site is the configuration table the admin host initializes from: a
//! name plus the action registry, both passed in explicitly. Keeping
//! construction explicit avoids load-order-dependent global state.

use crate::actions::{ActionDescriptor, ActionRegistry};

/// The admin site configuration.
///
/// # Examples
///
/// ```
/// use placekit_admin::actions::ActionRegistry;
/// use placekit_admin::site::AdminSite;
///
/// let site = AdminSite::new("admin", ActionRegistry::with_builtin());
/// assert!(site.actions().contains("filter"));
/// ```
#[derive(Debug)]
pub struct AdminSite {
    name: String,
    actions: ActionRegistry,
}

impl AdminSite {
    /// Creates a site with the given name and action registry.
    pub fn new(name: impl Into<String>, actions: ActionRegistry) -> Self {
        Self {
            name: name.into(),
            actions,
        }
    }

    /// The site name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The action registry.
    pub const fn actions(&self) -> &ActionRegistry {
        &self.actions
    }

    /// Serializable descriptors of every registered action, for the host's
    /// panel rendering.
    pub fn action_descriptors(&self) -> Vec<ActionDescriptor> {
        self.actions.descriptors()
    }
}
