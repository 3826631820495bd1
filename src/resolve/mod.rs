//! Capability resolution.
//!
//! This module computes the effective grant for a requested capability:
//! a base lookup across the requester's roles, followed by an additive
//! pass over the registered override rules.

pub mod rule;

pub use rule::{OverrideRule, ScopedElevation};

use std::sync::Arc;

use crate::model::{Capability, RequestContext, RoleSet};
use crate::registry::RoleRegistry;

/// Computes effective capability grants for a requester.
///
/// Resolution is monotonic-additive: the base grant comes from the role
/// registry, and override rules may only elevate the result, never revoke
/// it. An empty role-set always resolves to false.
pub struct CapabilityResolver {
    /// The role registry to use for base lookups.
    registry: Arc<dyn RoleRegistry>,

    /// Override rules, applied in registration order.
    overrides: Vec<Box<dyn OverrideRule>>,
}

impl CapabilityResolver {
    /// Create a resolver with no override rules.
    pub fn new(registry: Arc<dyn RoleRegistry>) -> Self {
        Self {
            registry,
            overrides: Vec::new(),
        }
    }

    /// Register an override rule.
    ///
    /// Rules are evaluated in the order they were registered.
    pub fn add_override(&mut self, rule: Box<dyn OverrideRule>) {
        self.overrides.push(rule);
    }

    /// Resolve the effective grant for a capability.
    ///
    /// # Arguments
    ///
    /// * `roles` - The requester's assigned roles.
    /// * `capability` - The capability being checked.
    /// * `context` - Host-supplied facts about the current request.
    ///
    /// # Returns
    ///
    /// `true` if any held role grants the capability, or if an override
    /// rule elevates it for this request; `false` otherwise.
    pub fn resolve(
        &self,
        roles: &RoleSet,
        capability: &Capability,
        context: &RequestContext,
    ) -> bool {
        if roles.is_empty() {
            return false;
        }

        // Base grant: any held role that has the capability
        let mut granted = roles
            .iter()
            .any(|role_id| self.registry.role_has(role_id, capability));

        // Overrides may only elevate, never downgrade
        if !granted {
            for rule in &self.overrides {
                if rule.elevates(capability, context, roles) {
                    log::debug!("capability '{}' elevated by override rule", capability);
                    granted = true;
                    break;
                }
            }
        }

        granted
    }
}
