//! Spindrift CLI - Command-line interface
//!
//! Provides command-line access to the Spindrift torrent index API.

mod commands;

use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "spindrift")]
#[command(about = "An in-memory torrent index API")]
struct Cli {
    /// Console log level (overridden by RUST_LOG when set)
    #[arg(long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: commands::Commands,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_level.clone()));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    commands::handle_command(cli.command).await
}
