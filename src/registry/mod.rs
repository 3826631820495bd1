//! Role storage.
//!
//! This module provides storage for role definitions and their capability
//! sets. The registry is written during initialization (role definition and
//! capability grants) and read per request by the resolver and the screen
//! access guard.

mod in_memory;

pub use in_memory::InMemoryRoleRegistry;

use crate::error::Result;
use crate::model::{Capability, Role, RoleId};

/// Trait for role storage.
///
/// A role registry owns role definitions and their capability sets, and
/// supports deriving one role from another plus a capability delta.
pub trait RoleRegistry: Send + Sync {
    /// Define a new role.
    ///
    /// If `base` is given, the new role's capability set is seeded as a
    /// copy of the base role's set at call time. The copy is a snapshot:
    /// later grants to the base do not propagate to the derived role.
    ///
    /// # Arguments
    ///
    /// * `id` - The unique role key.
    /// * `display_name` - The human-readable role name.
    /// * `base` - An optional base role to derive from.
    ///
    /// # Returns
    ///
    /// * `Ok(Role)` - The newly defined role.
    /// * `Err(RbacError::RoleExists)` - If `id` is already registered.
    /// * `Err(RbacError::RoleNotFound)` - If `base` is given but unknown.
    fn define_role(&self, id: RoleId, display_name: &str, base: Option<&RoleId>) -> Result<Role>;

    /// Grant a capability to a role.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - If the capability is now granted (idempotent).
    /// * `Err(RbacError::RoleNotFound)` - If the role is unknown.
    fn grant(&self, role_id: &RoleId, capability: Capability) -> Result<()>;

    /// Get a role by its key.
    ///
    /// Returns `None` for unknown roles; this accessor never errors.
    fn get(&self, role_id: &RoleId) -> Option<Role>;

    /// List all roles in registration order.
    ///
    /// Registration order is the order restrictions are evaluated in by the
    /// screen access guard, so it must be stable across calls.
    fn list_roles(&self) -> Vec<Role>;

    /// Check whether a role grants a capability.
    ///
    /// Unknown roles grant nothing.
    fn role_has(&self, role_id: &RoleId, capability: &Capability) -> bool {
        self.get(role_id)
            .map(|role| role.has(capability))
            .unwrap_or(false)
    }
}
