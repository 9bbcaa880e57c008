//! Naming-convention validator for serverless deployment descriptions.
//!
//! The rule checks in [`checks`] are pure functions from a name (or a
//! descriptor) to violation messages. [`validator::Validator`] runs every
//! enabled rule over a [`source::DeploymentSource`], collects all violations
//! and fails once with the full list. [`host`] exposes the entry points a host
//! tool binds to its lifecycle.

pub mod case;
pub mod checks;
pub mod error;
pub mod host;
pub mod report;
pub mod rules;
pub mod source;
pub mod validator;
pub mod violation;
