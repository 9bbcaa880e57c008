use serde::{Deserialize, Serialize};

use crate::rule::RuleName;

/// The `custom.conventions` block of a deployment description.
///
/// Example:
/// ```yaml
/// custom:
///   conventions:
///     ignore:
///       stageName: true
///       dynamoDBTableName: true
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConventionsConfig {
    #[serde(default)]
    pub ignore: IgnoreConfig,
}

/// Per-rule suppression flags. A missing or `false` flag leaves the rule
/// enabled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct IgnoreConfig {
    #[serde(default)]
    pub service_name: bool,
    #[serde(default)]
    pub stage_name: bool,
    #[serde(default)]
    pub handler_name: bool,
    #[serde(default)]
    pub function_name: bool,
    #[serde(default)]
    pub handler_name_matches_function: bool,
    #[serde(default, rename = "dynamoDBTableName")]
    pub dynamodb_table_name: bool,
    #[serde(default)]
    pub parameter_name: bool,
    #[serde(default)]
    pub node_version: bool,
}

impl IgnoreConfig {
    /// Suppress every rule.
    pub fn all() -> Self {
        let mut config = Self::default();
        for rule in RuleName::ALL {
            config.set(rule, true);
        }
        config
    }

    pub fn is_ignored(&self, rule: RuleName) -> bool {
        match rule {
            RuleName::ServiceName => self.service_name,
            RuleName::StageName => self.stage_name,
            RuleName::HandlerName => self.handler_name,
            RuleName::FunctionName => self.function_name,
            RuleName::HandlerNameMatchesFunction => self.handler_name_matches_function,
            RuleName::DynamoDBTableName => self.dynamodb_table_name,
            RuleName::ParameterName => self.parameter_name,
            RuleName::NodeVersion => self.node_version,
        }
    }

    pub fn set(&mut self, rule: RuleName, ignored: bool) {
        let flag = match rule {
            RuleName::ServiceName => &mut self.service_name,
            RuleName::StageName => &mut self.stage_name,
            RuleName::HandlerName => &mut self.handler_name,
            RuleName::FunctionName => &mut self.function_name,
            RuleName::HandlerNameMatchesFunction => &mut self.handler_name_matches_function,
            RuleName::DynamoDBTableName => &mut self.dynamodb_table_name,
            RuleName::ParameterName => &mut self.parameter_name,
            RuleName::NodeVersion => &mut self.node_version,
        };
        *flag = ignored;
    }

    /// Rules currently suppressed, in registry order.
    pub fn ignored_rules(&self) -> Vec<RuleName> {
        RuleName::ALL
            .into_iter()
            .filter(|rule| self.is_ignored(*rule))
            .collect()
    }
}
