//! # Rolegate
//!
//! `rolegate` is a host-agnostic role-based access control core: it owns
//! role definitions with explicit capability sets, resolves per-request
//! capability grants, and decides screen-level access and menu visibility
//! for a host application's administrative area.
//!
//! Key concepts:
//!
//! 1. **Role Registry**: Owns role definitions and their capability sets;
//!    a role may be derived from a base role, copying its capabilities as
//!    a snapshot at definition time.
//!
//! 2. **Capability Resolution**: Computes the effective grant for a
//!    requested capability from the requester's roles, then applies
//!    additive override rules. Overrides may elevate a grant, never revoke
//!    one.
//!
//! 3. **Screen Access Guard**: Decides allow-or-redirect for entry into
//!    administrative screens, per role restriction.
//!
//! 4. **Presentation Filters**: Suppress navigation items for restricted
//!    roles and hide the administrator role from requesters who cannot
//!    manage options.
//!
//! The crate performs no I/O and holds no host state: the current
//! requester's roles, the resolved screen, and the candidate menu tree are
//! supplied by the host per call, and every operation is a pure,
//! terminating computation over those inputs. The host constructs one
//! [`AccessControl`] at startup — by hand via [`AccessControlBuilder`] or
//! from a TOML document via [`RbacConfig`] — and passes it into its request
//! pipeline explicitly.
//!
//! ## Usage Example
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use rolegate::{
//!     AccessDecision, Capability, InMemoryRoleRegistry, RequestContext, RoleId, RoleRegistry,
//!     RoleSet, ScreenId,
//! };
//!
//! // Host init: define the base catalog, then install the delegate-admin
//! // profile on top of it.
//! let registry = Arc::new(InMemoryRoleRegistry::new());
//! registry.define_role(RoleId::new("editor"), "Editor", None).unwrap();
//! let access = rolegate::presets::site_admin().apply(registry).unwrap();
//!
//! // Per request: the host supplies the requester's roles and the screen.
//! let roles: RoleSet = ["site_admin"].into_iter().collect();
//!
//! assert_eq!(
//!     access.screen_resolved(&ScreenId::new("site-editor"), &roles),
//!     AccessDecision::Redirect("/wp-admin/".to_string()),
//! );
//! assert!(access.filter_capabilities(
//!     &roles,
//!     &Capability::new("edit_theme_options"),
//!     &RequestContext::admin(),
//! ));
//! ```

pub mod config;
pub mod error;
pub mod filter;
pub mod guard;
pub mod host;
pub mod model;
pub mod presets;
pub mod registry;
pub mod resolve;

// Re-export key types and traits for convenience
pub use config::{RbacConfig, RoleSpec};
pub use error::{RbacError, Result};
pub use filter::{filter_editable, MenuFilter, MenuFilterRule, MenuItem, ADMINISTRATOR};
pub use guard::{AccessDecision, ScreenAccessGuard, ScreenRestriction};
pub use host::{AccessControl, AccessControlBuilder};
pub use model::{
    Capability, CapabilitySet, RequestContext, Role, RoleId, RoleSet, ScreenId,
};
pub use registry::{InMemoryRoleRegistry, RoleRegistry};
pub use resolve::{CapabilityResolver, OverrideRule, ScopedElevation};
