//! Declarative configuration.
//!
//! Roles, capability elevations, screen restrictions, and menu rules can be
//! described in a TOML document and installed in one step at startup:
//!
//! ```toml
//! [[role]]
//! id = "site_admin"
//! display_name = "Site Admin"
//! base = "editor"
//! grant = ["create_users", "promote_users", "list_users"]
//!
//! [[elevation]]
//! role = "site_admin"
//! capability = "edit_theme_options"
//! admin_area_only = true
//!
//! [[screen_restriction]]
//! role = "site_admin"
//! screens = ["site-editor", "themes"]
//! redirect = "/wp-admin/"
//!
//! [[menu_rule]]
//! role = "site_admin"
//! hidden = [
//!     { parent = "themes.php", slug = "themes.php" },
//!     { parent = "themes.php", slug = "site-editor.php" },
//! ]
//! ```
//!
//! Configuration errors (duplicate roles, unknown base roles, TOML syntax)
//! surface from [`RbacConfig::apply`] and should abort startup.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::error::Result;
use crate::filter::MenuFilterRule;
use crate::guard::ScreenRestriction;
use crate::host::AccessControl;
use crate::model::{Capability, RoleId};
use crate::registry::RoleRegistry;
use crate::resolve::ScopedElevation;

/// A role definition plus its capability delta.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleSpec {
    /// The unique role key.
    pub id: RoleId,

    /// The human-readable role name.
    pub display_name: String,

    /// The role to seed capabilities from, if any. The referenced role
    /// must be defined earlier in the document or already present in the
    /// registry.
    #[serde(default)]
    pub base: Option<RoleId>,

    /// Capabilities granted on top of the seeded set.
    #[serde(default)]
    pub grant: Vec<Capability>,
}

/// The full declarative rule set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RbacConfig {
    /// Role definitions, installed in document order.
    #[serde(default, rename = "role")]
    pub roles: Vec<RoleSpec>,

    /// Scoped capability elevations, applied in document order.
    #[serde(default, rename = "elevation")]
    pub elevations: Vec<ScopedElevation>,

    /// Screen restrictions.
    #[serde(default, rename = "screen_restriction")]
    pub screen_restrictions: Vec<ScreenRestriction>,

    /// Menu suppression rules.
    #[serde(default, rename = "menu_rule")]
    pub menu_rules: Vec<MenuFilterRule>,
}

impl RbacConfig {
    /// Parse a configuration from a TOML document.
    pub fn from_toml_str(input: &str) -> Result<Self> {
        Ok(toml::from_str(input)?)
    }

    /// Install this configuration.
    ///
    /// Defines the configured roles in the given registry (in document
    /// order, so a role may derive from an earlier one), applies their
    /// grants, and builds the host facade with the configured elevations,
    /// screen restrictions, and menu rules.
    ///
    /// # Returns
    ///
    /// * `Ok(AccessControl)` - The ready facade.
    /// * `Err` - On duplicate role definitions or unknown base roles;
    ///   the registry may be partially populated in that case.
    pub fn apply(self, registry: Arc<dyn RoleRegistry>) -> Result<AccessControl> {
        for spec in &self.roles {
            registry.define_role(spec.id.clone(), &spec.display_name, spec.base.as_ref())?;

            for capability in &spec.grant {
                registry.grant(&spec.id, capability.clone())?;
            }
        }

        let mut builder = AccessControl::builder(registry);
        for elevation in self.elevations {
            builder = builder.override_rule(Box::new(elevation));
        }
        for restriction in self.screen_restrictions {
            builder = builder.screen_restriction(restriction);
        }
        for rule in self.menu_rules {
            builder = builder.menu_rule(rule);
        }

        Ok(builder.build())
    }
}
