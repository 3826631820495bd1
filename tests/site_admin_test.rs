use std::sync::Arc;

use rolegate::{
    AccessControl, AccessDecision, Capability, InMemoryRoleRegistry, MenuItem, RbacConfig,
    RequestContext, RoleId, RoleRegistry, RoleSet, ScreenId,
};

/// Build a registry with the host's base catalog and install the
/// site-admin profile on top of it.
fn install_site_admin() -> (Arc<InMemoryRoleRegistry>, AccessControl) {
    let registry = Arc::new(InMemoryRoleRegistry::new());

    // The host's base role catalog
    registry
        .define_role(RoleId::new("administrator"), "Administrator", None)
        .unwrap();
    registry
        .define_role(RoleId::new("editor"), "Editor", None)
        .unwrap();
    registry
        .grant(&RoleId::new("editor"), Capability::new("edit_posts"))
        .unwrap();
    registry
        .grant(&RoleId::new("editor"), Capability::new("edit_pages"))
        .unwrap();

    let access = rolegate::presets::site_admin()
        .apply(registry.clone())
        .unwrap();

    (registry, access)
}

#[test]
fn test_site_admin_inherits_editor_and_gains_user_management() {
    let (registry, access) = install_site_admin();
    let roles: RoleSet = ["site_admin"].into_iter().collect();
    let ctx = RequestContext::new();

    // Seeded from editor
    assert!(access.filter_capabilities(&roles, &Capability::new("edit_posts"), &ctx));
    assert!(access.filter_capabilities(&roles, &Capability::new("edit_pages"), &ctx));

    // The extra grants
    for cap in ["create_users", "promote_users", "list_users"] {
        assert!(access.filter_capabilities(&roles, &Capability::new(cap), &ctx));
    }

    // Editors did not gain the extra grants
    let editor: RoleSet = ["editor"].into_iter().collect();
    assert!(!access.filter_capabilities(&editor, &Capability::new("create_users"), &ctx));

    // The derived role is a snapshot: a later grant to the base does not
    // propagate
    registry
        .grant(&RoleId::new("editor"), Capability::new("moderate_comments"))
        .unwrap();
    assert!(!access.filter_capabilities(&roles, &Capability::new("moderate_comments"), &ctx));
}

#[test]
fn test_theme_options_elevated_only_in_admin_area() {
    let (_registry, access) = install_site_admin();
    let cap = Capability::new("edit_theme_options");

    let site_admin: RoleSet = ["site_admin"].into_iter().collect();
    assert!(access.filter_capabilities(&site_admin, &cap, &RequestContext::admin()));
    assert!(!access.filter_capabilities(&site_admin, &cap, &RequestContext::new()));

    // Other roles are untouched by the elevation
    let editor: RoleSet = ["editor"].into_iter().collect();
    assert!(!access.filter_capabilities(&editor, &cap, &RequestContext::admin()));

    // A requester with no roles resolves everything to false
    assert!(!access.filter_capabilities(&RoleSet::new(), &cap, &RequestContext::admin()));
}

#[test]
fn test_site_admin_redirected_from_restricted_screens() {
    let (_registry, access) = install_site_admin();
    let site_admin: RoleSet = ["site_admin"].into_iter().collect();

    for screen in ["site-editor", "themes"] {
        assert_eq!(
            access.screen_resolved(&ScreenId::new(screen), &site_admin),
            AccessDecision::Redirect("/wp-admin/".to_string())
        );
    }

    // Other screens and other roles are unaffected
    assert_eq!(
        access.screen_resolved(&ScreenId::new("dashboard"), &site_admin),
        AccessDecision::Allowed
    );
    let editor: RoleSet = ["editor"].into_iter().collect();
    assert_eq!(
        access.screen_resolved(&ScreenId::new("site-editor"), &editor),
        AccessDecision::Allowed
    );
}

#[test]
fn test_appearance_menu_trimmed_for_site_admin() {
    let (_registry, access) = install_site_admin();

    let menu = vec![
        MenuItem::new("themes.php", "themes.php"),
        MenuItem::new("themes.php", "site-editor.php"),
        MenuItem::new("themes.php", "nav-menus.php"),
    ];

    let site_admin: RoleSet = ["site_admin"].into_iter().collect();
    let trimmed = access.menu_built(menu.clone(), &site_admin);
    assert_eq!(trimmed, vec![MenuItem::new("themes.php", "nav-menus.php")]);

    // Filtering is idempotent
    assert_eq!(access.menu_built(trimmed.clone(), &site_admin), trimmed);

    // Editors see the full menu
    let editor: RoleSet = ["editor"].into_iter().collect();
    assert_eq!(access.menu_built(menu.clone(), &editor), menu);
}

#[test]
fn test_editable_roles_hide_administrator() {
    let (_registry, access) = install_site_admin();

    let ids: Vec<String> = access
        .editable_roles(false)
        .into_iter()
        .map(|role| role.id.to_string())
        .collect();
    assert_eq!(ids, vec!["editor", "site_admin"]);

    let ids: Vec<String> = access
        .editable_roles(true)
        .into_iter()
        .map(|role| role.id.to_string())
        .collect();
    assert_eq!(ids, vec!["administrator", "editor", "site_admin"]);
}

#[test]
fn test_profile_round_trips_through_toml() {
    // The programmatic profile and its TOML form install identical rules
    let config = rolegate::presets::site_admin();
    let document = toml::to_string(&config).unwrap();
    let parsed = RbacConfig::from_toml_str(&document).unwrap();

    assert_eq!(parsed, config);
}
