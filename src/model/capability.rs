//! Capability keys and capability sets.
//!
//! A capability is a named permission checked before allowing an action.
//! Capabilities are interned string keys wrapped in a newtype so that a
//! role's grants form an explicit set type rather than an open-ended
//! string-keyed map.

use serde::{Deserialize, Serialize};
use std::collections::hash_set;
use std::collections::HashSet;
use std::fmt;

/// A named permission key, such as `edit_theme_options` or `list_users`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Capability(String);

impl Capability {
    /// Create a capability from a key.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// The underlying capability key.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Capability {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl From<String> for Capability {
    fn from(key: String) -> Self {
        Self(key)
    }
}

/// A set of capability grants held by a role.
///
/// Grants are additive: a capability is either present (granted) or absent
/// (not granted). There is no explicit-deny entry; denial is the absence of
/// a grant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CapabilitySet(HashSet<Capability>);

impl CapabilitySet {
    /// Create an empty capability set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a capability grant to the set.
    ///
    /// Returns `true` if the capability was newly granted, `false` if it
    /// was already present.
    pub fn grant(&mut self, capability: Capability) -> bool {
        self.0.insert(capability)
    }

    /// Check whether the set grants a capability.
    pub fn contains(&self, capability: &Capability) -> bool {
        self.0.contains(capability)
    }

    /// The number of granted capabilities.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the set grants nothing.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the granted capabilities.
    pub fn iter(&self) -> hash_set::Iter<'_, Capability> {
        self.0.iter()
    }
}

impl FromIterator<Capability> for CapabilitySet {
    fn from_iter<I: IntoIterator<Item = Capability>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a CapabilitySet {
    type Item = &'a Capability;
    type IntoIter = hash_set::Iter<'a, Capability>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
