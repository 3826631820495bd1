//! Domain model for the rolegate access control core.
//!
//! This module defines the typed vocabulary for role-based access control:
//! role identifiers and role definitions, capability keys and capability
//! sets, requester role-sets, screen identifiers, and the per-request
//! context an override rule may consult.

pub mod capability;
pub mod context;
pub mod role;

pub use capability::{Capability, CapabilitySet};
pub use context::{RequestContext, ScreenId};
pub use role::{Role, RoleId, RoleSet};
