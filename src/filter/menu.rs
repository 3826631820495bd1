//! Role-scoped menu filtering.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::model::{RoleId, RoleSet};

/// A navigation item: a submenu slug under a parent menu.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MenuItem {
    /// The parent menu slug, such as `themes.php`.
    pub parent: String,

    /// The item slug, such as `site-editor.php`.
    pub slug: String,
}

impl MenuItem {
    /// Create a menu item.
    pub fn new(parent: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            parent: parent.into(),
            slug: slug.into(),
        }
    }
}

/// Navigation items to suppress for holders of a role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuFilterRule {
    /// The role whose holders do not see the items.
    pub role: RoleId,

    /// The (parent, slug) pairs to suppress.
    pub hidden: HashSet<MenuItem>,
}

impl MenuFilterRule {
    /// Create a rule hiding the given items from a role.
    pub fn new(role: impl Into<RoleId>, hidden: impl IntoIterator<Item = MenuItem>) -> Self {
        Self {
            role: role.into(),
            hidden: hidden.into_iter().collect(),
        }
    }
}

/// Removes role-specific navigation items before presentation.
///
/// Filtering is order-preserving for the remaining items and idempotent.
/// When no rule matches, the input passes through unchanged (as a new
/// vector; the caller's container is never mutated in place).
#[derive(Default)]
pub struct MenuFilter {
    /// Suppression rules, matched against every held role.
    rules: Vec<MenuFilterRule>,
}

impl MenuFilter {
    /// Create a filter with no rules.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a suppression rule.
    pub fn add_rule(&mut self, rule: MenuFilterRule) {
        self.rules.push(rule);
    }

    /// Filter a menu tree for a requester.
    ///
    /// # Arguments
    ///
    /// * `items` - The host's full candidate menu tree, in display order.
    /// * `roles` - The requester's assigned roles.
    ///
    /// # Returns
    ///
    /// The items not suppressed by any rule for a held role, in the
    /// original order.
    pub fn filter(&self, items: Vec<MenuItem>, roles: &RoleSet) -> Vec<MenuItem> {
        items
            .into_iter()
            .filter(|item| {
                !self
                    .rules
                    .iter()
                    .any(|rule| roles.contains(&rule.role) && rule.hidden.contains(item))
            })
            .collect()
    }
}
