//! Error types for the rolegate access control core.
//!
//! All failures are initialization-time configuration errors: a referenced
//! role is missing from the registry, a role is defined twice, or the
//! declarative configuration fails to parse. Per-request operations never
//! error; they degrade to deny/allow/pass-through defaults instead.

use crate::model::RoleId;
use thiserror::Error;

/// Root error type for the rolegate system.
#[derive(Debug, Error)]
pub enum RbacError {
    /// A referenced role (or base role) is not present in the registry.
    #[error("Role not found: {0}")]
    RoleNotFound(RoleId),

    /// A role with the given identifier is already registered.
    #[error("Role already exists: {0}")]
    RoleExists(RoleId),

    /// The declarative configuration could not be parsed.
    #[error("Invalid configuration: {0}")]
    Config(#[from] toml::de::Error),
}

/// Result type used throughout the rolegate system.
pub type Result<T> = std::result::Result<T, RbacError>;
