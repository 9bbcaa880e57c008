use anyhow::{Context, Result};
use pkg_constants::paths::JSON_EXTENSION;
use std::path::Path;

use crate::description::DeploymentDescription;

/// Serialization format of a deployment description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DescriptionFormat {
    Yaml,
    Json,
}

impl DescriptionFormat {
    /// `.json` files are read as JSON, everything else as YAML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case(JSON_EXTENSION) => DescriptionFormat::Json,
            _ => DescriptionFormat::Yaml,
        }
    }
}

/// Parse a deployment description from a string.
pub fn parse_description(content: &str, format: DescriptionFormat) -> Result<DeploymentDescription> {
    let description = match format {
        DescriptionFormat::Yaml => serde_yaml::from_str(content)?,
        DescriptionFormat::Json => serde_json::from_str(content)?,
    };
    Ok(description)
}

/// Load a resolved deployment description from disk.
///
/// Example `serverless.yml`:
/// ```yaml
/// service: test-name
/// provider:
///   stage: tst
///   runtime: nodejs14.x
/// functions:
///   thisIsAWellNamedFunction:
///     handler: src/this-is-a-well-named-function.handler
/// custom:
///   conventions:
///     ignore:
///       stageName: true
/// ```
pub fn load_description(path: &str) -> Result<DeploymentDescription> {
    let path = Path::new(path);
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read deployment description {}", path.display()))?;
    parse_description(&content, DescriptionFormat::from_path(path))
        .with_context(|| format!("failed to parse deployment description {}", path.display()))
}
