use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use screentime_common::DEFAULT_MOCK_APP_COUNT;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, reload, EnvFilter};

mod commands;
mod config;

use commands::export::ExportTarget;
use commands::{QueryArgs, UsageQuery};
use config::CtlConfig;

#[derive(Parser)]
#[command(name = "screentime-ctl")]
#[command(about = "Screen time usage dashboard", long_about = None)]
struct Cli {
    #[arg(long, global = true, help = "Configuration file (defaults to the user config directory)")]
    config: Option<PathBuf>,

    #[arg(long, global = true, help = "Read usage from a JSON snapshot instead of the configured provider")]
    input: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show per-app usage as a table
    Table {
        #[command(flatten)]
        query: QueryArgs,
    },

    /// Write per-app usage as CSV
    Export {
        #[command(flatten)]
        query: QueryArgs,

        #[arg(short, long, help = "Output file (defaults to a dated file in the export directory)")]
        output: Option<PathBuf>,

        #[arg(long, conflicts_with = "output", help = "Print the CSV instead of writing a file")]
        stdout: bool,
    },

    /// Check reverse-DNS bundle identifiers
    Validate {
        #[arg(required = true)]
        bundle_ids: Vec<String>,
    },

    /// Show provider and authorization state
    Status,

    /// Request screen time authorization
    Authorize,

    /// Choose which apps to monitor
    Select,

    /// Start activity monitoring
    Monitor,

    /// Print synthetic usage rows as JSON
    Mock {
        #[arg(short, long, default_value_t = DEFAULT_MOCK_APP_COUNT)]
        count: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins; otherwise start at info until the config names a level
    let env_filter = EnvFilter::try_from_default_env().ok();
    let from_env = env_filter.is_some();
    let (filter, filter_handle) =
        reload::Layer::new(env_filter.unwrap_or_else(|| EnvFilter::new("info")));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();

    let config = match &cli.config {
        Some(path) => CtlConfig::load_from_path(path)?,
        None => CtlConfig::load()?,
    };

    if !from_env {
        filter_handle
            .reload(EnvFilter::new(config.log_level()))
            .context("Failed to apply configured log level")?;
    }

    config.validate().context("Invalid configuration")?;
    debug!("Using {} provider", config.general.provider);

    let bridge = || commands::build_bridge(&config, cli.input.as_deref());

    match cli.command {
        Commands::Table { query } => {
            let query = UsageQuery::resolve(&query, &config.display);
            commands::table::show(&bridge()?, &query).await?
        }
        Commands::Export { query, output, stdout } => {
            let query = UsageQuery::resolve(&query, &config.display);
            let target = match (stdout, output) {
                (true, _) => ExportTarget::Stdout,
                (false, Some(path)) => ExportTarget::File(path),
                (false, None) => ExportTarget::Directory(config.export_directory()),
            };
            commands::export::run(&bridge()?, &query, &config, target).await?
        }
        Commands::Validate { bundle_ids } => commands::validate::bundle_ids(&bundle_ids)?,
        Commands::Status => commands::status::show(&bridge()?).await?,
        Commands::Authorize => commands::status::authorize(&bridge()?).await?,
        Commands::Select => commands::status::select(&bridge()?).await?,
        Commands::Monitor => commands::status::monitor(&bridge()?).await?,
        Commands::Mock { count } => commands::mock::print(count)?,
    }

    Ok(())
}
