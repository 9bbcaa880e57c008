use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::conventions::ConventionsConfig;

// --- Service ---

/// `service` is either a bare name or an object carrying the name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ServiceField {
    Name(String),
    Object { name: String },
}

impl ServiceField {
    pub fn name(&self) -> &str {
        match self {
            ServiceField::Name(name) => name,
            ServiceField::Object { name } => name,
        }
    }
}

// --- Provider ---

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Provider {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub stage: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    /// Function runtime, e.g. `nodejs14.x`.
    #[serde(default)]
    pub runtime: Option<String>,
}

// --- Functions ---

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FunctionDefinition {
    /// Explicit deployed name; the host derives `service-stage-key` when unset.
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub handler: Option<String>,
}

// --- Resources ---

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResourcesBlock {
    #[serde(default, rename = "Resources")]
    pub resources: IndexMap<String, CloudFormationResource>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CloudFormationResource {
    #[serde(rename = "Type")]
    pub kind: String,
    #[serde(default, rename = "Properties")]
    pub properties: Map<String, Value>,
}

// --- Custom ---

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Custom {
    #[serde(default)]
    pub conventions: Option<ConventionsConfig>,
    #[serde(default)]
    pub esbuild: Option<EsbuildConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EsbuildConfig {
    /// Bundler target, e.g. `node14`.
    #[serde(default)]
    pub target: Option<String>,
}

// --- Description ---

/// A resolved deployment description (`serverless.yml` after variable
/// resolution). Only the parts the naming rules read are modelled; everything
/// else in the document is ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeploymentDescription {
    pub service: ServiceField,
    #[serde(default)]
    pub provider: Provider,
    /// Functions in declaration order.
    #[serde(default)]
    pub functions: IndexMap<String, FunctionDefinition>,
    #[serde(default)]
    pub resources: ResourcesBlock,
    #[serde(default)]
    pub custom: Custom,
}
