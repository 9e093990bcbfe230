//! Integration tests for the admin action registry and site configuration.

use placekit_admin::actions::{ActionRegistry, AdminAction, FilterAction};
use placekit_admin::site::AdminSite;

// ═════════════════════════════════════════════════════════════════════
// 1. A site initialized with the builtin registry exposes the filter
//    action, whose methods configuration is exactly ["name"]
// ═════════════════════════════════════════════════════════════════════

#[test]
fn test_initialized_site_exposes_filter_action() {
    let site = AdminSite::new("admin", ActionRegistry::with_builtin());

    assert!(site.actions().contains("filter"));
    assert_eq!(site.actions().methods_for("filter").unwrap(), vec!["name"]);
}

// ═════════════════════════════════════════════════════════════════════
// 2. Registration is explicit: a freshly built registry is empty
// ═════════════════════════════════════════════════════════════════════

#[test]
fn test_nothing_registers_itself() {
    let registry = ActionRegistry::new();
    assert!(registry.is_empty());
}

// ═════════════════════════════════════════════════════════════════════
// 3. Hosts can mix builtin and custom actions at initialization
// ═════════════════════════════════════════════════════════════════════

#[test]
fn test_host_composes_registry_at_init() {
    struct HideAction;

    impl AdminAction for HideAction {
        fn name(&self) -> &'static str {
            "hide"
        }
        fn description(&self) -> &'static str {
            "Hide selected records"
        }
        fn methods(&self) -> Vec<&'static str> {
            vec!["visible"]
        }
    }

    let mut registry = ActionRegistry::new();
    registry.register(Box::new(FilterAction)).unwrap();
    registry.register(Box::new(HideAction)).unwrap();

    let site = AdminSite::new("admin", registry);
    assert_eq!(site.actions().action_names(), vec!["filter", "hide"]);

    let descriptors = site.action_descriptors();
    assert_eq!(descriptors[1].methods, vec!["visible"]);
}

// ═════════════════════════════════════════════════════════════════════
// 4. Duplicate registration fails loudly and keeps the first entry
// ═════════════════════════════════════════════════════════════════════

#[test]
fn test_duplicate_registration_is_an_init_error() {
    let mut registry = ActionRegistry::with_builtin();
    assert!(registry.register(Box::new(FilterAction)).is_err());
    assert_eq!(registry.action_names(), vec!["filter"]);
}
