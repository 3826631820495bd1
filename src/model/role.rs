//! Role identifiers, role definitions, and requester role-sets.

use serde::{Deserialize, Serialize};
use std::collections::hash_set;
use std::collections::HashSet;
use std::fmt;

use super::capability::{Capability, CapabilitySet};

/// The unique string key identifying a role, such as `editor` or
/// `site_admin`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoleId(String);

impl RoleId {
    /// Create a role identifier from a key.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// The underlying role key.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for RoleId {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl From<String> for RoleId {
    fn from(key: String) -> Self {
        Self(key)
    }
}

/// A named bundle of capability grants assignable to a user.
///
/// A role may be defined by deriving from a base role, in which case its
/// capability set is seeded as a copy of the base role's set at definition
/// time. The copy is a snapshot: the derived role is independently mutable
/// afterwards and never re-derives from its base.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    /// The unique role key.
    pub id: RoleId,

    /// The human-readable role name.
    pub display_name: String,

    /// The capabilities this role grants.
    pub capabilities: CapabilitySet,
}

impl Role {
    /// Create a role with an empty capability set.
    pub fn new(id: impl Into<RoleId>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            capabilities: CapabilitySet::new(),
        }
    }

    /// Create a role seeded with the given capability set.
    pub fn with_capabilities(
        id: impl Into<RoleId>,
        display_name: impl Into<String>,
        capabilities: CapabilitySet,
    ) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            capabilities,
        }
    }

    /// Check whether this role grants a capability.
    pub fn has(&self, capability: &Capability) -> bool {
        self.capabilities.contains(capability)
    }
}

/// The set of roles assigned to a requester.
///
/// Supplied by the host's identity subsystem per request. An empty role-set
/// resolves every capability to false and matches no restriction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoleSet(HashSet<RoleId>);

impl RoleSet {
    /// Create an empty role-set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a role to the set.
    pub fn insert(&mut self, role: RoleId) -> bool {
        self.0.insert(role)
    }

    /// Check whether the requester holds a role.
    pub fn contains(&self, role: &RoleId) -> bool {
        self.0.contains(role)
    }

    /// Whether the requester holds no roles.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the held roles.
    pub fn iter(&self) -> hash_set::Iter<'_, RoleId> {
        self.0.iter()
    }
}

impl FromIterator<RoleId> for RoleSet {
    fn from_iter<I: IntoIterator<Item = RoleId>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> FromIterator<&'a str> for RoleSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Self(iter.into_iter().map(RoleId::new).collect())
    }
}
