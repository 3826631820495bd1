//! Presentation filters.
//!
//! These filters shape what the host presents, not what it permits: the
//! menu filter suppresses navigation items per role, and the editable-roles
//! filter hides the administrator role from requesters who cannot manage
//! options. Neither affects capability grants.

pub mod editable;
pub mod menu;

pub use editable::{filter_editable, ADMINISTRATOR};
pub use menu::{MenuFilter, MenuFilterRule, MenuItem};
