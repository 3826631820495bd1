//! Ready-made rule profiles.

use crate::config::{RbacConfig, RoleSpec};
use crate::filter::{MenuFilterRule, MenuItem};
use crate::guard::ScreenRestriction;
use crate::model::{Capability, RoleId, ScreenId};
use crate::resolve::ScopedElevation;

/// The site-administrator profile: a restricted delegate-admin role.
///
/// Derives a `site_admin` role from the host's `editor` role with extra
/// user-management grants, elevates `edit_theme_options` for it inside the
/// administrative area (so it can manage navigation menus), blocks it from
/// the site editor and themes screens, and hides the corresponding menu
/// items.
///
/// The registry this configuration is applied to must already define the
/// `editor` base role; the base role catalog is the host's concern.
pub fn site_admin() -> RbacConfig {
    RbacConfig {
        roles: vec![RoleSpec {
            id: RoleId::new("site_admin"),
            display_name: "Site Admin".to_string(),
            base: Some(RoleId::new("editor")),
            grant: vec![
                Capability::new("create_users"),
                Capability::new("promote_users"),
                Capability::new("list_users"),
            ],
        }],
        elevations: vec![
            ScopedElevation::new("site_admin", "edit_theme_options").admin_area_only(),
        ],
        screen_restrictions: vec![ScreenRestriction::new(
            "site_admin",
            [ScreenId::new("site-editor"), ScreenId::new("themes")],
            "/wp-admin/",
        )],
        menu_rules: vec![MenuFilterRule::new(
            "site_admin",
            [
                MenuItem::new("themes.php", "themes.php"),
                MenuItem::new("themes.php", "site-editor.php"),
            ],
        )],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_site_admin_profile_shape() {
        let config = site_admin();

        assert_eq!(config.roles.len(), 1);
        assert_eq!(config.roles[0].base, Some(RoleId::new("editor")));
        assert_eq!(config.roles[0].grant.len(), 3);
        assert_eq!(config.elevations.len(), 1);
        assert_eq!(config.screen_restrictions.len(), 1);
        assert_eq!(config.menu_rules.len(), 1);
    }
}
