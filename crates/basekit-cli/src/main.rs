//! # basekit CLI
//!
//! Entry point for the `basekit` binary. Read-only: it never signs.
//!
//! Subcommands:
//! - `basekit chain`        — Print the network descriptor
//! - `basekit block-number` — Latest block number
//! - `basekit balance`      — Native balance of an address
//! - `basekit check`        — Verify the endpoint serves Base Sepolia

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

/// basekit — query Base Sepolia from the command line.
#[derive(Parser)]
#[command(name = "basekit", version, about)]
struct Cli {
    /// Path to config.yaml (default: ~/.basekit/config.yaml if it exists).
    #[arg(long, short, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the network descriptor.
    Chain {
        /// Emit JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Print the latest block number.
    BlockNumber,

    /// Print the native balance of an address, in wei.
    Balance {
        /// Account address (0x...).
        #[arg(long)]
        address: String,
    },

    /// Verify that the configured endpoint reports the expected chain ID.
    Check,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Chain { json } => commands::chain::run(json),
        Commands::BlockNumber => commands::block_number::run(cli.config).await,
        Commands::Balance { address } => commands::balance::run(cli.config, address).await,
        Commands::Check => commands::check::run(cli.config).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
