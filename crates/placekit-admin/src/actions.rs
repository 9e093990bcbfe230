//! Admin actions and their registry.
//!
//! This module provides the [`AdminAction`] trait for read-only, named
//! actions exposed in the admin panel, the builtin [`FilterAction`], and the
//! [`ActionRegistry`] the host consumes them from. Registries are built
//! explicitly at initialization time and handed to the site; there is no
//! process-global registration.

use placekit_core::{PlacekitError, PlacekitResult};
use serde::{Deserialize, Serialize};

/// A named action exposed in the admin panel.
///
/// Actions carry their configuration as read-only accessors. The one
/// configurable option is [`methods`](AdminAction::methods): the ordered
/// list of record attributes the action consults.
pub trait AdminAction: Send + Sync {
    /// The unique identifier for this action.
    fn name(&self) -> &str;

    /// A human-readable description of what this action does.
    fn description(&self) -> &str;

    /// The ordered list of record attributes this action operates on.
    fn methods(&self) -> Vec<&str>;
}

/// Builtin action that filters admin list views by record attribute.
///
/// Operates on exactly one attribute: `name`.
#[derive(Debug)]
pub struct FilterAction;

impl AdminAction for FilterAction {
    fn name(&self) -> &'static str {
        "filter"
    }

    fn description(&self) -> &'static str {
        "Filter records by attribute"
    }

    fn methods(&self) -> Vec<&'static str> {
        vec!["name"]
    }
}

/// The serializable shape of an action, as the admin host consumes it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionDescriptor {
    /// The action identifier.
    pub name: String,
    /// The human-readable description.
    pub description: String,
    /// The record attributes the action operates on.
    pub methods: Vec<String>,
}

/// An explicitly-constructed registry of admin actions.
///
/// # Examples
///
/// ```
/// use placekit_admin::actions::ActionRegistry;
///
/// let registry = ActionRegistry::with_builtin();
/// assert_eq!(registry.methods_for("filter").unwrap(), vec!["name"]);
/// ```
#[derive(Default)]
pub struct ActionRegistry {
    actions: Vec<Box<dyn AdminAction>>,
}

impl ActionRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            actions: Vec::new(),
        }
    }

    /// Creates a registry pre-populated with the builtin [`FilterAction`].
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        registry
            .register(Box::new(FilterAction))
            .expect("builtin actions have distinct names");
        registry
    }

    /// Registers an action.
    ///
    /// # Errors
    ///
    /// Returns [`PlacekitError::ConfigurationError`] if an action with the
    /// same name is already registered; the first registration is kept, so
    /// a misconfigured host fails at initialization instead of silently
    /// shadowing an action.
    pub fn register(&mut self, action: Box<dyn AdminAction>) -> PlacekitResult<()> {
        if self.contains(action.name()) {
            return Err(PlacekitError::ConfigurationError(format!(
                "action '{}' is already registered",
                action.name()
            )));
        }
        tracing::debug!(action = action.name(), "registering admin action");
        self.actions.push(action);
        Ok(())
    }

    /// Whether an action with the given name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.actions.iter().any(|a| a.name() == name)
    }

    /// Looks up an action by name.
    pub fn get(&self, name: &str) -> Option<&dyn AdminAction> {
        self.actions
            .iter()
            .find(|a| a.name() == name)
            .map(AsRef::as_ref)
    }

    /// The names of all registered actions, in registration order.
    pub fn action_names(&self) -> Vec<&str> {
        self.actions.iter().map(|a| a.name()).collect()
    }

    /// The `methods` configuration of the named action.
    ///
    /// # Errors
    ///
    /// Returns [`PlacekitError::NotFound`] if no such action is registered.
    pub fn methods_for(&self, name: &str) -> PlacekitResult<Vec<&str>> {
        self.get(name)
            .map(AdminAction::methods)
            .ok_or_else(|| PlacekitError::NotFound(format!("action '{name}' not registered")))
    }

    /// Serializable descriptors for every registered action.
    pub fn descriptors(&self) -> Vec<ActionDescriptor> {
        self.actions
            .iter()
            .map(|a| ActionDescriptor {
                name: a.name().to_string(),
                description: a.description().to_string(),
                methods: a.methods().iter().map(ToString::to_string).collect(),
            })
            .collect()
    }

    /// The number of registered actions.
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

impl std::fmt::Debug for ActionRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActionRegistry")
            .field("actions", &self.action_names())
            .finish()
    }
}
