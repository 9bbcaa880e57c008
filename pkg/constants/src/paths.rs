//! Filesystem path and configuration key constants.

// ─── Deployment description ───────────────────────────────────────────────

/// Default deployment description read by the CLI.
pub const DEFAULT_DESCRIPTION_FILE: &str = "serverless.yml";

/// Extension that selects the JSON loader instead of YAML.
pub const JSON_EXTENSION: &str = "json";

// ─── Deployment options ───────────────────────────────────────────────────

/// Stage used when neither the CLI nor the description names one.
pub const DEFAULT_STAGE: &str = "dev";

/// Region used when neither the CLI nor the description names one.
pub const DEFAULT_REGION: &str = "us-east-1";

// ─── Configuration keys ───────────────────────────────────────────────────

/// Top-level key under `custom` holding the conventions configuration.
pub const CONFIG_KEY: &str = "conventions";

/// Nested key holding the per-rule suppression flags.
pub const IGNORE_KEY: &str = "ignore";
