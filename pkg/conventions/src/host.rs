//! Host integration: the entry points a deployment tool binds to its
//! lifecycle, the event table that maps host events onto them, and the
//! configuration schema the host registers for the `conventions` key.

use pkg_constants::hooks::{BEFORE_COMPILE_FUNCTIONS, CONVENTIONS_COMMAND};
use pkg_constants::paths::IGNORE_KEY;
use pkg_types::rule::RuleName;
use serde_json::{Map, Value, json};
use tracing::debug;

use crate::error::ValidationFailed;
use crate::report::Reporter;
use crate::source::DeploymentSource;
use crate::validator::Validator;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryPoint {
    /// Runs before templates are compiled.
    AutomaticPreflight,
    /// Runs when the user invokes the command.
    OnDemand,
}

/// Host event name → entry point.
pub const HOOKS: &[(&str, EntryPoint)] = &[
    (BEFORE_COMPILE_FUNCTIONS, EntryPoint::AutomaticPreflight),
    (CONVENTIONS_COMMAND, EntryPoint::OnDemand),
];

pub fn entry_point_for(event: &str) -> Option<EntryPoint> {
    HOOKS
        .iter()
        .find(|(name, _)| *name == event)
        .map(|(_, entry)| *entry)
}

pub struct ConventionsPlugin<'a> {
    reporter: &'a dyn Reporter,
    validator: Validator<'a>,
}

impl<'a> ConventionsPlugin<'a> {
    pub fn new(reporter: &'a dyn Reporter) -> Self {
        Self {
            reporter,
            validator: Validator::new(reporter),
        }
    }

    pub fn run_automatic_preflight(&self, source: &dyn DeploymentSource) -> Result<(), ValidationFailed> {
        debug!("Running convention check before packaging");
        self.validator.run(source)
    }

    pub fn run_on_demand(&self, source: &dyn DeploymentSource) -> Result<(), ValidationFailed> {
        debug!("Running convention check on demand");
        self.validator.run(source)
    }

    pub fn run(&self, entry: EntryPoint, source: &dyn DeploymentSource) -> Result<(), ValidationFailed> {
        match entry {
            EntryPoint::AutomaticPreflight => self.run_automatic_preflight(source),
            EntryPoint::OnDemand => self.run_on_demand(source),
        }
    }

    /// Run whatever is bound to a host event. Unbound events are reported as
    /// a warning and validate nothing.
    pub fn dispatch(&self, event: &str, source: &dyn DeploymentSource) -> Result<(), ValidationFailed> {
        match entry_point_for(event) {
            Some(entry) => self.run(entry, source),
            None => {
                self.reporter
                    .warning(&format!("No convention check is bound to event \"{event}\""));
                Ok(())
            }
        }
    }
}

/// JSON Schema for the `custom.conventions` block: an `ignore` object of
/// boolean flags keyed by rule name, with nothing else allowed.
pub fn config_schema() -> Value {
    let flags: Map<String, Value> = RuleName::ALL
        .into_iter()
        .map(|rule| (rule.config_key().to_string(), json!({ "type": "boolean" })))
        .collect();

    json!({
        "type": "object",
        "properties": {
            (IGNORE_KEY): {
                "type": "object",
                "properties": flags,
                "additionalProperties": false,
            },
        },
        "additionalProperties": false,
    })
}
