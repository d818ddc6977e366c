use clap::Parser;
use indexmap::IndexMap;
use miette::{IntoDiagnostic, Result};
use paygate::application::registry::GatewayRegistry;
use paygate::config::GatewaysConfig;
use paygate::domain::gateway::GatewayRef;
use paygate::domain::ports::GatewayProviderBox;
use paygate::infrastructure::sandbox::builtin_constructors;
use paygate::infrastructure::shared::SharedGatewayRegistry;
use paygate::interfaces::csv::gateway_writer::GatewayWriter;
use std::io;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Resolve the gateways of a payment configuration and print a summary.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Gateway configuration file (TOML, or JSON with a .json extension)
    config: PathBuf,

    /// Resolve only this gateway id. Repeatable; all gateways when omitted.
    #[arg(long = "gateway", short = 'g')]
    gateways: Vec<String>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Output logs as JSON instead of human-readable.
    #[arg(long, default_value_t = false)]
    json_logs: bool,
}

fn init_tracing(cli: &Cli) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));

    if cli.json_logs {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(false).with_writer(io::stderr))
            .init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli);

    let config = GatewaysConfig::from_path(&cli.config).into_diagnostic()?;

    let mut registry = GatewayRegistry::new(Box::new(builtin_constructors()));
    registry.load_config(&config);
    let provider: GatewayProviderBox = Box::new(SharedGatewayRegistry::new(registry));

    let gateways = if cli.gateways.is_empty() {
        provider.get_gateways().await.into_diagnostic()?
    } else {
        let mut selected: IndexMap<String, GatewayRef> = IndexMap::new();
        for id in &cli.gateways {
            let gateway = provider.get_gateway(id).await.into_diagnostic()?;
            selected.insert(id.clone(), gateway);
        }
        selected
    };
    info!(count = gateways.len(), "gateways resolved");

    let stdout = io::stdout();
    let mut writer = GatewayWriter::new(stdout.lock());
    writer.write_gateways(&gateways).into_diagnostic()?;

    Ok(())
}
