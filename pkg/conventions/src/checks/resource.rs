use pkg_constants::naming::NAME_SEPARATOR;
use pkg_constants::resources::{TABLE_NAME_PROPERTY, TABLE_NAME_PROPERTY_CFN};
use pkg_types::descriptor::ResourceDescriptor;

use crate::case::is_kebab_case;

/// Table name of a table resource, preferring `tableName` over `TableName`.
pub fn table_name(resource: &ResourceDescriptor) -> Option<&str> {
    resource
        .string_property(TABLE_NAME_PROPERTY)
        .or_else(|| resource.string_property(TABLE_NAME_PROPERTY_CFN))
}

fn has_service_prefix(name: &str, service: &str) -> bool {
    name.strip_prefix(service)
        .is_some_and(|rest| rest.starts_with(NAME_SEPARATOR))
}

/// Table names start with `service-` and are kebab-case. Both rules are
/// checked even if the first fails.
pub fn check_table_name(table_name: &str, service: &str) -> Vec<String> {
    let mut errors = Vec::new();

    if !has_service_prefix(table_name, service) {
        errors.push(format!(
            "DynamoDB table \"{table_name}\" does not start with the service name \"{service}{NAME_SEPARATOR}\""
        ));
    }
    if !is_kebab_case(table_name) {
        errors.push(format!("DynamoDB table \"{table_name}\" is not kebab case"));
    }

    errors
}

/// Parameter and secret names start with `service-`.
pub fn check_parameter_name(name: &str, service: &str) -> Vec<String> {
    if has_service_prefix(name, service) {
        return Vec::new();
    }
    vec![format!(
        "Parameter \"{name}\" does not start with the service name \"{service}{NAME_SEPARATOR}\""
    )]
}
