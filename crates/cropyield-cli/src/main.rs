//! Crop Yield CLI
//!
//! Predicts a crop yield from crop, region and growing conditions, then shows
//! how the estimate responds to rainfall, temperature and pesticides:
//! - `options` lists the crops, regions and numeric defaults
//! - `predict` prints the estimate and the three sensitivity sweeps
//! - `serve` exposes the same form over HTTP

use clap::{Parser, Subcommand};
use cropyield_cli::commands::{options, predict};
use cropyield_cli::output::{print_error, OutputFormat};
use cropyield_cli::{AppConfig, AppContext, CliResult, Server};
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Crop Yield CLI application
#[derive(Parser)]
#[command(name = "cropyield")]
#[command(about = "Crop yield prediction with sensitivity sweeps", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "CROPYIELD_CONFIG", global = true)]
    config: Option<String>,

    /// Pipeline artifact path
    #[arg(long, env = "CROPYIELD_MODEL", global = true)]
    model: Option<PathBuf>,

    /// Reference dataset path
    #[arg(long, env = "CROPYIELD_DATASET", global = true)]
    dataset: Option<PathBuf>,

    /// Output format (table, json, yaml)
    #[arg(short, long, default_value = "table", global = true)]
    output: OutputFormat,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Enable JSON logging
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand)]
enum Commands {
    /// List crops, regions and numeric defaults
    Options,

    /// Predict a yield and sweep each numeric input
    Predict(predict::PredictArgs),

    /// Serve the HTTP API
    Serve {
        /// Listen address
        #[arg(short, long, env = "CROPYIELD_LISTEN_ADDR")]
        listen: Option<SocketAddr>,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        print_error(&e.to_string());
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> CliResult<()> {
    // Load configuration, then override with CLI args
    let mut config = AppConfig::load(cli.config.as_deref())?;

    if let Some(model) = cli.model {
        config.model.path = model;
    }
    if let Some(dataset) = cli.dataset {
        config.dataset.path = dataset;
    }
    if cli.verbose {
        config.logging.level = "debug".to_string();
    }
    if cli.log_json {
        config.logging.json = true;
    }
    if let Commands::Serve {
        listen: Some(listen),
    } = &cli.command
    {
        config.server.listen_addr = *listen;
    }

    init_tracing(&config);

    let ctx = AppContext::load(&config)?;

    match cli.command {
        Commands::Options => options::execute(&ctx, cli.output),
        Commands::Predict(args) => predict::execute(args, &ctx, cli.output),
        Commands::Serve { .. } => Server::new(config.server, ctx).run().await,
    }
}

/// Logs go to stderr so `-o json` output stays parseable.
fn init_tracing(config: &AppConfig) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| config.logging.level.clone().into());

    if config.logging.json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
