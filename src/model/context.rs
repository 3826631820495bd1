//! Per-request context supplied by the host.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// An identifiable admin-facing view or route in the host application,
/// such as `site-editor` or `themes`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScreenId(String);

impl ScreenId {
    /// Create a screen identifier from a key.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// The underlying screen key.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ScreenId {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

/// Host-supplied facts about the current request.
///
/// Override rules consult the context when deciding whether to elevate a
/// capability. The host resolves these values before calling into the core;
/// the core never reaches out to the host.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RequestContext {
    /// Whether the request targets the host's administrative area.
    pub admin_area: bool,

    /// Additional host-defined request attributes.
    #[serde(default)]
    pub attributes: HashMap<String, String>,
}

impl RequestContext {
    /// A context outside the administrative area with no attributes.
    pub fn new() -> Self {
        Self::default()
    }

    /// A context flagged as an administrative-area request.
    pub fn admin() -> Self {
        Self {
            admin_area: true,
            attributes: HashMap::new(),
        }
    }

    /// Attach a host-defined attribute.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }
}
