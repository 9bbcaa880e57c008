//! Rule registry: pairs every [`RuleName`] with the subjects it applies to
//! and the check that runs on them.

use pkg_constants::resources::{
    DYNAMODB_TABLE, PARAMETER_KINDS, PARAMETER_NAME_PROPERTY, TABLE_NAME_PROPERTY,
};
use pkg_types::descriptor::{BuildTargetDescriptor, FunctionDescriptor, ResourceDescriptor};
use pkg_types::rule::RuleName;

use crate::checks::{self, resource::table_name};

/// Names shared by every check in a run.
#[derive(Debug, Clone, Copy)]
pub struct Context<'a> {
    pub service: &'a str,
    pub stage: &'a str,
}

/// One entity the orchestrator hands to the registry.
#[derive(Debug, Clone, Copy)]
pub enum Subject<'a> {
    Service(&'a str),
    Stage(&'a str),
    Function(&'a FunctionDescriptor),
    Resource(&'a ResourceDescriptor),
    BuildTarget(&'a BuildTargetDescriptor),
}

/// A registered naming rule.
pub trait Rule {
    /// Whether this rule inspects `subject` at all.
    fn applies_to(&self, subject: &Subject<'_>) -> bool;

    /// Violation messages for `subject`; empty when it passes or the rule
    /// does not apply.
    fn check(&self, subject: &Subject<'_>, ctx: &Context<'_>) -> Vec<String>;
}

impl Rule for RuleName {
    fn applies_to(&self, subject: &Subject<'_>) -> bool {
        match (self, subject) {
            (RuleName::ServiceName, Subject::Service(_)) => true,
            (RuleName::StageName, Subject::Stage(_)) => true,
            (
                RuleName::HandlerName
                | RuleName::FunctionName
                | RuleName::HandlerNameMatchesFunction,
                Subject::Function(_),
            ) => true,
            (RuleName::DynamoDBTableName, Subject::Resource(resource)) => {
                resource.is_kind(DYNAMODB_TABLE)
            }
            (RuleName::ParameterName, Subject::Resource(resource)) => {
                PARAMETER_KINDS.iter().any(|kind| resource.is_kind(kind))
            }
            (RuleName::NodeVersion, Subject::BuildTarget(_)) => true,
            _ => false,
        }
    }

    fn check(&self, subject: &Subject<'_>, ctx: &Context<'_>) -> Vec<String> {
        if !self.applies_to(subject) {
            return Vec::new();
        }

        match (self, subject) {
            (RuleName::ServiceName, Subject::Service(name)) => checks::check_service_name(name),
            (RuleName::StageName, Subject::Stage(stage)) => checks::check_stage_name(stage),
            (RuleName::HandlerName, Subject::Function(function)) => match &function.handler {
                Some(handler) => checks::check_handler_name(handler),
                None => vec![format!(
                    "Function \"{}\" is missing required field \"handler\"",
                    function.logical_name
                )],
            },
            (RuleName::FunctionName, Subject::Function(function)) => {
                checks::check_function_name(function, ctx.service, ctx.stage)
            }
            (RuleName::HandlerNameMatchesFunction, Subject::Function(function)) => {
                match &function.handler {
                    Some(handler) => checks::check_handler_matches_function(
                        function,
                        handler,
                        ctx.service,
                        ctx.stage,
                    ),
                    None => vec![format!(
                        "Function \"{}\" has no handler to match against",
                        function.logical_name
                    )],
                }
            }
            (RuleName::DynamoDBTableName, Subject::Resource(resource)) => {
                match table_name(resource) {
                    Some(name) => checks::check_table_name(name, ctx.service),
                    None => vec![format!(
                        "DynamoDB table resource \"{}\" is missing required property \"{TABLE_NAME_PROPERTY}\"",
                        resource.logical_id
                    )],
                }
            }
            (RuleName::ParameterName, Subject::Resource(resource)) => {
                match resource.string_property(PARAMETER_NAME_PROPERTY) {
                    Some(name) => checks::check_parameter_name(name, ctx.service),
                    None => vec![format!(
                        "Parameter resource \"{}\" is missing required property \"{PARAMETER_NAME_PROPERTY}\"",
                        resource.logical_id
                    )],
                }
            }
            (RuleName::NodeVersion, Subject::BuildTarget(target)) => {
                match &target.provider_runtime {
                    Some(runtime) => checks::check_build_target(runtime, &target.bundler_target),
                    None => vec![format!(
                        "Provider runtime is missing but esbuild targets \"{}\"",
                        target.bundler_target
                    )],
                }
            }
            _ => Vec::new(),
        }
    }
}
