//! In-memory role registry.

use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use super::RoleRegistry;
use crate::error::{RbacError, Result};
use crate::model::{Capability, Role, RoleId};

/// Role entry with a sequence number recording registration order.
struct RoleEntry {
    /// The role definition.
    role: Role,
    /// Position in registration order, assigned at definition time.
    seq: u64,
}

/// An in-memory implementation of the [`RoleRegistry`] trait.
///
/// Uses `DashMap` for thread-safe concurrent access. Writes happen during
/// initialization; request handling only reads, so no external locking is
/// needed once traffic starts.
#[derive(Clone, Default)]
pub struct InMemoryRoleRegistry {
    /// Map from role key to role entry.
    roles: Arc<DashMap<RoleId, RoleEntry>>,

    /// The next registration sequence number to assign.
    next_seq: Arc<AtomicU64>,
}

impl InMemoryRoleRegistry {
    /// Create a new empty in-memory role registry.
    pub fn new() -> Self {
        Self {
            roles: Arc::new(DashMap::new()),
            next_seq: Arc::new(AtomicU64::new(1)),
        }
    }
}

impl RoleRegistry for InMemoryRoleRegistry {
    fn define_role(&self, id: RoleId, display_name: &str, base: Option<&RoleId>) -> Result<Role> {
        if self.roles.contains_key(&id) {
            return Err(RbacError::RoleExists(id));
        }

        // Snapshot the base role's capabilities at definition time
        let capabilities = match base {
            Some(base_id) => {
                let base_entry = self
                    .roles
                    .get(base_id)
                    .ok_or_else(|| RbacError::RoleNotFound(base_id.clone()))?;
                base_entry.role.capabilities.clone()
            }
            None => Default::default(),
        };

        let role = Role::with_capabilities(id.clone(), display_name, capabilities);
        let seq = self.next_seq.fetch_add(1, Ordering::Relaxed);

        self.roles.insert(
            id.clone(),
            RoleEntry {
                role: role.clone(),
                seq,
            },
        );

        log::info!(
            "defined role '{}'{}",
            id,
            base.map(|b| format!(" derived from '{}'", b))
                .unwrap_or_default()
        );

        Ok(role)
    }

    fn grant(&self, role_id: &RoleId, capability: Capability) -> Result<()> {
        let mut entry = self
            .roles
            .get_mut(role_id)
            .ok_or_else(|| RbacError::RoleNotFound(role_id.clone()))?;

        entry.role.capabilities.grant(capability);

        Ok(())
    }

    fn get(&self, role_id: &RoleId) -> Option<Role> {
        self.roles.get(role_id).map(|entry| entry.role.clone())
    }

    fn list_roles(&self) -> Vec<Role> {
        let mut entries: Vec<(u64, Role)> = self
            .roles
            .iter()
            .map(|entry| (entry.seq, entry.role.clone()))
            .collect();

        entries.sort_by_key(|(seq, _)| *seq);
        entries.into_iter().map(|(_, role)| role).collect()
    }
}
