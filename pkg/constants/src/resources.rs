//! Infrastructure resource kinds and property names inspected by the rules.

/// DynamoDB table resources.
pub const DYNAMODB_TABLE: &str = "AWS::DynamoDB::Table";

/// SSM parameter resources.
pub const SSM_PARAMETER: &str = "AWS::SSM::Parameter";

/// Secrets Manager secret resources.
pub const SECRETS_MANAGER_SECRET: &str = "AWS::SecretsManager::Secret";

/// Resource kinds whose `Name` is treated as a parameter name.
pub const PARAMETER_KINDS: &[&str] = &[SSM_PARAMETER, SECRETS_MANAGER_SECRET];

/// Table name property, as written in deployment descriptions.
pub const TABLE_NAME_PROPERTY: &str = "tableName";

/// CloudFormation spelling of the table name property.
/// Consulted only when [`TABLE_NAME_PROPERTY`] is absent.
pub const TABLE_NAME_PROPERTY_CFN: &str = "TableName";

/// Name property of parameter and secret resources.
pub const PARAMETER_NAME_PROPERTY: &str = "Name";
