//! Editable-roles filtering.

use std::collections::HashMap;

use crate::model::{Role, RoleId};

/// The sentinel role key hidden from requesters without the
/// options-management capability.
pub const ADMINISTRATOR: &str = "administrator";

/// Filter the role catalog presented to a requester for role assignment.
///
/// A pure function: when the requester cannot manage options, the
/// `administrator` entry is removed from the result; otherwise the catalog
/// is returned unchanged.
///
/// # Arguments
///
/// * `all_roles` - The host's full role catalog.
/// * `requester_can_manage_options` - Whether the requester holds the
///   options-management capability, as resolved by the host.
pub fn filter_editable(
    mut all_roles: HashMap<RoleId, Role>,
    requester_can_manage_options: bool,
) -> HashMap<RoleId, Role> {
    if !requester_can_manage_options {
        all_roles.remove(&RoleId::new(ADMINISTRATOR));
    }

    all_roles
}
