/// Every naming rule the validator knows about, in the order the rules run
/// for a given subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RuleName {
    ServiceName,
    StageName,
    HandlerName,
    FunctionName,
    HandlerNameMatchesFunction,
    DynamoDBTableName,
    ParameterName,
    NodeVersion,
}

impl RuleName {
    pub const ALL: [RuleName; 8] = [
        RuleName::ServiceName,
        RuleName::StageName,
        RuleName::HandlerName,
        RuleName::FunctionName,
        RuleName::HandlerNameMatchesFunction,
        RuleName::DynamoDBTableName,
        RuleName::ParameterName,
        RuleName::NodeVersion,
    ];

    /// Key of this rule inside the `conventions.ignore` block.
    pub fn config_key(self) -> &'static str {
        match self {
            RuleName::ServiceName => "serviceName",
            RuleName::StageName => "stageName",
            RuleName::HandlerName => "handlerName",
            RuleName::FunctionName => "functionName",
            RuleName::HandlerNameMatchesFunction => "handlerNameMatchesFunction",
            RuleName::DynamoDBTableName => "dynamoDBTableName",
            RuleName::ParameterName => "parameterName",
            RuleName::NodeVersion => "nodeVersion",
        }
    }
}

impl std::fmt::Display for RuleName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.config_key())
    }
}
