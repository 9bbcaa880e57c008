//! Read-only views handed to the rule checks. None of them outlive a single
//! validation run.

use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionDescriptor {
    /// Key the function was declared under.
    pub logical_name: String,
    /// Fully resolved deployed name.
    pub qualified_name: String,
    pub handler: Option<String>,
}

impl FunctionDescriptor {
    pub fn new(logical_name: &str, qualified_name: &str, handler: Option<&str>) -> Self {
        Self {
            logical_name: logical_name.to_string(),
            qualified_name: qualified_name.to_string(),
            handler: handler.map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResourceDescriptor {
    pub logical_id: String,
    pub resource_type: String,
    pub properties: Map<String, Value>,
}

impl ResourceDescriptor {
    pub fn new(logical_id: &str, resource_type: &str) -> Self {
        Self {
            logical_id: logical_id.to_string(),
            resource_type: resource_type.to_string(),
            properties: Map::new(),
        }
    }

    pub fn with_property(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.properties.insert(key.to_string(), value.into());
        self
    }

    pub fn is_kind(&self, kind: &str) -> bool {
        self.resource_type == kind
    }

    /// String value of `key`; non-string values count as absent.
    pub fn string_property(&self, key: &str) -> Option<&str> {
        self.properties.get(key).and_then(Value::as_str)
    }
}

/// Runtime declared for the provider versus the bundler's compile target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildTargetDescriptor {
    pub provider_runtime: Option<String>,
    pub bundler_target: String,
}
