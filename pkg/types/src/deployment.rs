use pkg_constants::naming::NAME_SEPARATOR;
use pkg_constants::paths::{DEFAULT_REGION, DEFAULT_STAGE};

use crate::conventions::ConventionsConfig;
use crate::descriptor::{BuildTargetDescriptor, FunctionDescriptor, ResourceDescriptor};
use crate::description::DeploymentDescription;

// --- Deployment options ---

/// Ambient deployment options supplied by the caller (CLI flags).
#[derive(Debug, Clone, Default)]
pub struct DeploymentOptions {
    pub stage: Option<String>,
    pub region: Option<String>,
}

// --- Resolved deployment ---

/// A deployment description with stage and region resolved.
///
/// Precedence: options > description > defaults.
#[derive(Debug, Clone)]
pub struct ResolvedDeployment {
    pub description: DeploymentDescription,
    pub stage: String,
    pub region: String,
}

impl ResolvedDeployment {
    pub fn resolve(description: DeploymentDescription, options: DeploymentOptions) -> Self {
        let stage = options
            .stage
            .or_else(|| description.provider.stage.clone())
            .unwrap_or_else(|| DEFAULT_STAGE.to_string());
        let region = options
            .region
            .or_else(|| description.provider.region.clone())
            .unwrap_or_else(|| DEFAULT_REGION.to_string());

        Self {
            description,
            stage,
            region,
        }
    }

    pub fn service_name(&self) -> &str {
        self.description.service.name()
    }

    /// Name the host deploys a function under when no explicit name is set.
    pub fn default_function_name(&self, logical_name: &str) -> String {
        [self.service_name(), self.stage.as_str(), logical_name].join(NAME_SEPARATOR)
    }

    /// Declared functions, in declaration order.
    pub fn functions(&self) -> Vec<FunctionDescriptor> {
        self.description
            .functions
            .iter()
            .map(|(key, definition)| FunctionDescriptor {
                logical_name: key.clone(),
                qualified_name: definition
                    .name
                    .clone()
                    .unwrap_or_else(|| self.default_function_name(key)),
                handler: definition.handler.clone(),
            })
            .collect()
    }

    /// Declared infrastructure resources, in declaration order.
    pub fn resources(&self) -> Vec<ResourceDescriptor> {
        self.description
            .resources
            .resources
            .iter()
            .map(|(logical_id, resource)| ResourceDescriptor {
                logical_id: logical_id.clone(),
                resource_type: resource.kind.clone(),
                properties: resource.properties.clone(),
            })
            .collect()
    }

    /// Present only when the bundler declares a target.
    pub fn build_target(&self) -> Option<BuildTargetDescriptor> {
        let target = self.description.custom.esbuild.as_ref()?.target.clone()?;
        Some(BuildTargetDescriptor {
            provider_runtime: self.description.provider.runtime.clone(),
            bundler_target: target,
        })
    }

    pub fn conventions(&self) -> ConventionsConfig {
        self.description.custom.conventions.clone().unwrap_or_default()
    }
}
