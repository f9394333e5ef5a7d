//! CLI command implementations

use clap::Subcommand;
use spindrift_core::TorrentStore;
use spindrift_web::{ServerConfig, run_server};

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Start the API server
    Serve {
        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
        /// Port to bind to
        #[arg(short, long, default_value = "3000")]
        port: u16,
        /// Start with an empty index instead of the bundled demo records
        #[arg(long)]
        empty: bool,
    },
}

/// Handle the CLI command
///
/// # Errors
/// Returns an error when the server cannot bind or its serve loop fails.
pub async fn handle_command(command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Serve { host, port, empty } => serve(host, port, empty).await,
    }
}

/// Start the API server with a seeded or empty store.
async fn serve(host: String, port: u16, empty: bool) -> anyhow::Result<()> {
    let store = if empty {
        TorrentStore::new()
    } else {
        TorrentStore::seeded()
    };
    tracing::info!(records = store.all().len(), "store initialized");

    let config = ServerConfig { host, port };
    run_server(config, store).await?;

    Ok(())
}
