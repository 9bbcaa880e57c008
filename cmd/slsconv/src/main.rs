use anyhow::Context;
use clap::{Parser, Subcommand};
use pkg_constants::hooks::CONVENTIONS_COMMAND;
use pkg_constants::paths::{CONFIG_KEY, DEFAULT_DESCRIPTION_FILE};
use pkg_conventions::host::{ConventionsPlugin, config_schema};
use pkg_conventions::report::TracingReporter;
use pkg_types::config::load_description;
use pkg_types::deployment::{DeploymentOptions, ResolvedDeployment};
use serde_json::{Map, Value};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "slsconv",
    about = "Naming convention checks for serverless deployments"
)]
struct Cli {
    /// Path to the resolved deployment description (YAML or JSON)
    #[arg(long, short, global = true, default_value = DEFAULT_DESCRIPTION_FILE)]
    config: String,

    /// Stage to validate (overrides provider.stage)
    #[arg(long, short, global = true)]
    stage: Option<String>,

    /// Region to validate (overrides provider.region)
    #[arg(long, short, global = true)]
    region: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long, global = true, default_value_t = false)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
enum Commands {
    /// Check the deployment against every naming convention
    Check,
    /// Run whatever is bound to a host lifecycle event
    Hook {
        /// Host event name, e.g. before:package:compileFunctions
        event: String,
    },
    /// Print the configuration schema registered for the conventions key
    Schema,
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if json {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

fn load(cli: &Cli) -> anyhow::Result<ResolvedDeployment> {
    let description = load_description(&cli.config)?;
    let deployment = ResolvedDeployment::resolve(
        description,
        DeploymentOptions {
            stage: cli.stage.clone(),
            region: cli.region.clone(),
        },
    );
    info!("Deployment description: {}", cli.config);
    info!("  Service:   {}", deployment.service_name());
    info!("  Stage:     {}", deployment.stage);
    info!("  Region:    {}", deployment.region);
    Ok(deployment)
}

/// Schema fragment keyed by the configuration key it is registered under.
fn registered_schema() -> Value {
    let mut root = Map::new();
    root.insert(CONFIG_KEY.to_string(), config_schema());
    Value::Object(root)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.json_logs);

    let event = match &cli.command {
        Commands::Schema => {
            let schema = serde_json::to_string_pretty(&registered_schema())
                .context("failed to render configuration schema")?;
            println!("{}", schema);
            return Ok(());
        }
        Commands::Check => CONVENTIONS_COMMAND,
        Commands::Hook { event } => event.as_str(),
    };

    let deployment = load(&cli)?;
    let reporter = TracingReporter;
    let plugin = ConventionsPlugin::new(&reporter);

    if plugin.dispatch(event, &deployment).is_err() {
        // Every violation has already been reported.
        std::process::exit(1);
    }

    Ok(())
}
