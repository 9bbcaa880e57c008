//! Shared data model for slsconv: the deployment description as read from
//! disk, the typed conventions configuration, and the read-only descriptor
//! views the rule checks operate on.

pub mod config;
pub mod conventions;
pub mod deployment;
pub mod descriptor;
pub mod description;
pub mod rule;
