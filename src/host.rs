//! Host-facing facade.
//!
//! The host application constructs one [`AccessControl`] at startup and
//! passes it into request-handling code explicitly. Its methods are the
//! call-ins the host's request pipeline invokes synchronously: screen
//! resolution, menu construction, capability checks, and the editable-roles
//! catalog. There is no ambient global and no event bus.

use std::collections::HashMap;
use std::sync::Arc;

use crate::filter::{filter_editable, MenuFilter, MenuFilterRule, MenuItem};
use crate::guard::{AccessDecision, ScreenAccessGuard, ScreenRestriction};
use crate::model::{Capability, RequestContext, Role, RoleId, RoleSet, ScreenId};
use crate::registry::RoleRegistry;
use crate::resolve::{CapabilityResolver, OverrideRule};

/// Builder collecting the rule configuration for an [`AccessControl`].
pub struct AccessControlBuilder {
    registry: Arc<dyn RoleRegistry>,
    overrides: Vec<Box<dyn OverrideRule>>,
    restrictions: Vec<ScreenRestriction>,
    menu_rules: Vec<MenuFilterRule>,
}

impl AccessControlBuilder {
    /// Start a builder over an already-populated role registry.
    pub fn new(registry: Arc<dyn RoleRegistry>) -> Self {
        Self {
            registry,
            overrides: Vec::new(),
            restrictions: Vec::new(),
            menu_rules: Vec::new(),
        }
    }

    /// Register a capability override rule.
    pub fn override_rule(mut self, rule: Box<dyn OverrideRule>) -> Self {
        self.overrides.push(rule);
        self
    }

    /// Register a screen restriction.
    pub fn screen_restriction(mut self, restriction: ScreenRestriction) -> Self {
        self.restrictions.push(restriction);
        self
    }

    /// Register a menu suppression rule.
    pub fn menu_rule(mut self, rule: MenuFilterRule) -> Self {
        self.menu_rules.push(rule);
        self
    }

    /// Build the access control facade.
    pub fn build(self) -> AccessControl {
        let mut resolver = CapabilityResolver::new(self.registry.clone());
        for rule in self.overrides {
            resolver.add_override(rule);
        }

        let mut guard = ScreenAccessGuard::new(self.registry.clone());
        for restriction in self.restrictions {
            guard.add_restriction(restriction);
        }

        let mut menu_filter = MenuFilter::new();
        for rule in self.menu_rules {
            menu_filter.add_rule(rule);
        }

        AccessControl {
            registry: self.registry,
            resolver,
            guard,
            menu_filter,
        }
    }
}

/// The access control core, bundled for the host's request pipeline.
pub struct AccessControl {
    registry: Arc<dyn RoleRegistry>,
    resolver: CapabilityResolver,
    guard: ScreenAccessGuard,
    menu_filter: MenuFilter,
}

impl AccessControl {
    /// Start building an access control facade.
    pub fn builder(registry: Arc<dyn RoleRegistry>) -> AccessControlBuilder {
        AccessControlBuilder::new(registry)
    }

    /// The role registry backing this facade.
    pub fn registry(&self) -> &Arc<dyn RoleRegistry> {
        &self.registry
    }

    /// Called by the host once it has resolved the current admin screen.
    ///
    /// The host is responsible for only calling this for administrative
    /// screens, and for acting on a `Redirect` decision.
    pub fn screen_resolved(&self, screen: &ScreenId, roles: &RoleSet) -> AccessDecision {
        self.guard.check(screen, roles)
    }

    /// Called by the host after building the candidate menu tree.
    pub fn menu_built(&self, items: Vec<MenuItem>, roles: &RoleSet) -> Vec<MenuItem> {
        self.menu_filter.filter(items, roles)
    }

    /// Called by the host's capability gate for each capability check.
    pub fn filter_capabilities(
        &self,
        roles: &RoleSet,
        capability: &Capability,
        context: &RequestContext,
    ) -> bool {
        self.resolver.resolve(roles, capability, context)
    }

    /// The role catalog a requester may assign from, in registration order.
    pub fn editable_roles(&self, requester_can_manage_options: bool) -> Vec<Role> {
        let catalog: HashMap<RoleId, Role> = self
            .registry
            .list_roles()
            .into_iter()
            .map(|role| (role.id.clone(), role))
            .collect();

        let editable = filter_editable(catalog, requester_can_manage_options);

        // Re-impose registration order on the filtered catalog
        self.registry
            .list_roles()
            .into_iter()
            .filter(|role| editable.contains_key(&role.id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::InMemoryRoleRegistry;
    use crate::resolve::ScopedElevation;

    fn populated_registry() -> Arc<InMemoryRoleRegistry> {
        let registry = Arc::new(InMemoryRoleRegistry::new());
        registry
            .define_role(RoleId::new("administrator"), "Administrator", None)
            .unwrap();
        registry
            .define_role(RoleId::new("editor"), "Editor", None)
            .unwrap();
        registry
            .define_role(
                RoleId::new("site_admin"),
                "Site Admin",
                Some(&RoleId::new("editor")),
            )
            .unwrap();
        registry
    }

    fn facade() -> AccessControl {
        AccessControl::builder(populated_registry())
            .override_rule(Box::new(
                ScopedElevation::new("site_admin", "edit_theme_options").admin_area_only(),
            ))
            .screen_restriction(ScreenRestriction::new(
                "site_admin",
                [ScreenId::new("site-editor"), ScreenId::new("themes")],
                "/admin",
            ))
            .menu_rule(MenuFilterRule::new(
                "site_admin",
                [MenuItem::new("themes.php", "site-editor.php")],
            ))
            .build()
    }

    #[test]
    fn test_screen_resolved_delegates_to_guard() {
        let ac = facade();
        let roles: RoleSet = ["site_admin"].into_iter().collect();

        assert_eq!(
            ac.screen_resolved(&ScreenId::new("themes"), &roles),
            AccessDecision::Redirect("/admin".to_string())
        );
        assert!(ac
            .screen_resolved(&ScreenId::new("dashboard"), &roles)
            .is_allowed());
    }

    #[test]
    fn test_menu_built_delegates_to_filter() {
        let ac = facade();
        let roles: RoleSet = ["site_admin"].into_iter().collect();

        let items = vec![
            MenuItem::new("themes.php", "site-editor.php"),
            MenuItem::new("themes.php", "custom.php"),
        ];
        assert_eq!(
            ac.menu_built(items, &roles),
            vec![MenuItem::new("themes.php", "custom.php")]
        );
    }

    #[test]
    fn test_filter_capabilities_delegates_to_resolver() {
        let ac = facade();
        let roles: RoleSet = ["site_admin"].into_iter().collect();
        let cap = Capability::new("edit_theme_options");

        assert!(ac.filter_capabilities(&roles, &cap, &RequestContext::admin()));
        assert!(!ac.filter_capabilities(&roles, &cap, &RequestContext::new()));
    }

    #[test]
    fn test_editable_roles_hides_administrator() {
        let ac = facade();

        let ids: Vec<String> = ac
            .editable_roles(false)
            .into_iter()
            .map(|role| role.id.to_string())
            .collect();
        assert_eq!(ids, vec!["editor", "site_admin"]);

        let ids: Vec<String> = ac
            .editable_roles(true)
            .into_iter()
            .map(|role| role.id.to_string())
            .collect();
        assert_eq!(ids, vec!["administrator", "editor", "site_admin"]);
    }
}
