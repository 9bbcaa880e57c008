use pkg_types::conventions::ConventionsConfig;
use pkg_types::deployment::ResolvedDeployment;
use pkg_types::descriptor::{BuildTargetDescriptor, FunctionDescriptor, ResourceDescriptor};

/// Read access to the host's resolved configuration.
pub trait DeploymentSource {
    fn service_name(&self) -> &str;
    fn stage_name(&self) -> &str;
    /// Declared functions, in declaration order.
    fn functions(&self) -> Vec<FunctionDescriptor>;
    /// Declared resources, in declaration order.
    fn resources(&self) -> Vec<ResourceDescriptor>;
    /// `None` when no bundler target is configured.
    fn build_target(&self) -> Option<BuildTargetDescriptor>;
    fn conventions(&self) -> ConventionsConfig;
}

impl DeploymentSource for ResolvedDeployment {
    fn service_name(&self) -> &str {
        ResolvedDeployment::service_name(self)
    }

    fn stage_name(&self) -> &str {
        &self.stage
    }

    fn functions(&self) -> Vec<FunctionDescriptor> {
        ResolvedDeployment::functions(self)
    }

    fn resources(&self) -> Vec<ResourceDescriptor> {
        ResolvedDeployment::resources(self)
    }

    fn build_target(&self) -> Option<BuildTargetDescriptor> {
        ResolvedDeployment::build_target(self)
    }

    fn conventions(&self) -> ConventionsConfig {
        ResolvedDeployment::conventions(self)
    }
}
