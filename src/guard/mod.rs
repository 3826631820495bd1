//! Screen-level access decisions.
//!
//! The screen access guard decides, per request, whether the requester may
//! enter an administrative screen or must be redirected elsewhere. The host
//! invokes the guard only for administrative-area requests; outside that
//! context the guard is simply not called.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;

use crate::model::{RoleId, RoleSet, ScreenId};
use crate::registry::RoleRegistry;

/// The outcome of a screen access check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccessDecision {
    /// The requester may enter the screen.
    Allowed,

    /// The requester must be redirected to the given route.
    Redirect(String),
}

impl AccessDecision {
    /// Whether the decision allows entry.
    pub fn is_allowed(&self) -> bool {
        matches!(self, AccessDecision::Allowed)
    }
}

/// Screens a role may not enter, and where to send its holders instead.
///
/// Restrictions apply to screen entry only; they never affect capability
/// grants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenRestriction {
    /// The restricted role.
    pub role: RoleId,

    /// The screens holders of the role may not enter.
    pub screens: HashSet<ScreenId>,

    /// The route to redirect blocked requesters to.
    pub redirect: String,
}

impl ScreenRestriction {
    /// Create a restriction for a role.
    pub fn new(
        role: impl Into<RoleId>,
        screens: impl IntoIterator<Item = ScreenId>,
        redirect: impl Into<String>,
    ) -> Self {
        Self {
            role: role.into(),
            screens: screens.into_iter().collect(),
            redirect: redirect.into(),
        }
    }
}

/// Decides allow/deny/redirect for screen-level access.
///
/// Restrictions are evaluated per registered role, in role registration
/// order, and the first match wins. This makes the outcome deterministic
/// when a requester holds several restricted roles.
pub struct ScreenAccessGuard {
    /// The role registry, consulted for registration order.
    registry: Arc<dyn RoleRegistry>,

    /// Restrictions, indexed per check by role.
    restrictions: Vec<ScreenRestriction>,
}

impl ScreenAccessGuard {
    /// Create a guard with no restrictions.
    pub fn new(registry: Arc<dyn RoleRegistry>) -> Self {
        Self {
            registry,
            restrictions: Vec::new(),
        }
    }

    /// Register a screen restriction.
    pub fn add_restriction(&mut self, restriction: ScreenRestriction) {
        self.restrictions.push(restriction);
    }

    /// Check whether the requester may enter a screen.
    ///
    /// # Arguments
    ///
    /// * `screen` - The screen the host resolved for this request.
    /// * `roles` - The requester's assigned roles.
    ///
    /// # Returns
    ///
    /// `AccessDecision::Redirect` with the first matching restriction's
    /// target, or `AccessDecision::Allowed` if no restriction matches.
    pub fn check(&self, screen: &ScreenId, roles: &RoleSet) -> AccessDecision {
        for role in self.registry.list_roles() {
            if !roles.contains(&role.id) {
                continue;
            }

            for restriction in &self.restrictions {
                if restriction.role == role.id && restriction.screens.contains(screen) {
                    log::debug!(
                        "screen '{}' blocked for role '{}', redirecting to '{}'",
                        screen,
                        role.id,
                        restriction.redirect
                    );
                    return AccessDecision::Redirect(restriction.redirect.clone());
                }
            }
        }

        AccessDecision::Allowed
    }
}
