//! Centralized constants for the slsconv project.
//!
//! All project-wide constant values live here.
//! Change a value in one place and it applies everywhere.

pub mod hooks;
pub mod naming;
pub mod paths;
pub mod resources;
