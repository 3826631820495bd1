//! Capability override rules.

use serde::{Deserialize, Serialize};

use crate::model::{Capability, RequestContext, RoleId, RoleSet};

/// A context-dependent exception that can elevate a capability grant.
///
/// Override rules are additive: a matching rule grants the checked
/// capability, but no rule can revoke a grant the base lookup produced.
/// Predicates must explicitly check role membership so that an empty
/// role-set never matches.
pub trait OverrideRule: Send + Sync {
    /// Decide whether to elevate the checked capability for this request.
    fn elevates(&self, capability: &Capability, context: &RequestContext, roles: &RoleSet)
        -> bool;
}

/// An override that elevates exactly one capability for holders of one
/// role, optionally only inside the administrative area.
///
/// This is the rule shape the resolver is configured with declaratively:
/// "holders of `role` get `capability`, but only when the host reports an
/// admin-area request".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScopedElevation {
    /// The role whose holders are elevated.
    pub role: RoleId,

    /// The capability to elevate.
    pub capability: Capability,

    /// Restrict the elevation to administrative-area requests.
    #[serde(default)]
    pub admin_area_only: bool,
}

impl ScopedElevation {
    /// Create an elevation that applies in any request context.
    pub fn new(role: impl Into<RoleId>, capability: impl Into<Capability>) -> Self {
        Self {
            role: role.into(),
            capability: capability.into(),
            admin_area_only: false,
        }
    }

    /// Restrict this elevation to administrative-area requests.
    pub fn admin_area_only(mut self) -> Self {
        self.admin_area_only = true;
        self
    }
}

impl OverrideRule for ScopedElevation {
    fn elevates(
        &self,
        capability: &Capability,
        context: &RequestContext,
        roles: &RoleSet,
    ) -> bool {
        if self.admin_area_only && !context.admin_area {
            return false;
        }

        capability == &self.capability && roles.contains(&self.role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scoped_elevation_matches() {
        let rule = ScopedElevation::new("site_admin", "edit_theme_options").admin_area_only();
        let roles: RoleSet = ["site_admin"].into_iter().collect();

        // Matching capability, role, and context
        assert!(rule.elevates(
            &Capability::new("edit_theme_options"),
            &RequestContext::admin(),
            &roles,
        ));
    }

    #[test]
    fn test_scoped_elevation_requires_admin_area() {
        let rule = ScopedElevation::new("site_admin", "edit_theme_options").admin_area_only();
        let roles: RoleSet = ["site_admin"].into_iter().collect();

        assert!(!rule.elevates(
            &Capability::new("edit_theme_options"),
            &RequestContext::new(),
            &roles,
        ));
    }

    #[test]
    fn test_scoped_elevation_requires_role() {
        let rule = ScopedElevation::new("site_admin", "edit_theme_options");
        let editor: RoleSet = ["editor"].into_iter().collect();

        assert!(!rule.elevates(
            &Capability::new("edit_theme_options"),
            &RequestContext::admin(),
            &editor,
        ));

        // An empty role-set never matches
        assert!(!rule.elevates(
            &Capability::new("edit_theme_options"),
            &RequestContext::admin(),
            &RoleSet::new(),
        ));
    }

    #[test]
    fn test_scoped_elevation_requires_exact_capability() {
        let rule = ScopedElevation::new("site_admin", "edit_theme_options");
        let roles: RoleSet = ["site_admin"].into_iter().collect();

        assert!(!rule.elevates(
            &Capability::new("manage_options"),
            &RequestContext::admin(),
            &roles,
        ));
    }
}
