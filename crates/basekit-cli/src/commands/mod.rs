//! CLI subcommand implementations.

use std::path::PathBuf;

use basekit_core::ClientConfig;
use basekit_evm::ReadClient;

pub mod balance;
pub mod block_number;
pub mod chain;
pub mod check;

/// Resolve and load the config. An explicit path must exist; the default
/// path is optional.
pub(crate) fn load_config(
    config: Option<PathBuf>,
) -> Result<ClientConfig, Box<dyn std::error::Error>> {
    if let Some(path) = config {
        tracing::info!("loading config from {}", path.display());
        return Ok(ClientConfig::from_file(&path)?);
    }

    let Some(home) = dirs::home_dir() else {
        return Ok(ClientConfig::default());
    };
    let path = home.join(".basekit").join("config.yaml");
    if path.exists() {
        tracing::info!("loading config from {}", path.display());
        Ok(ClientConfig::from_file(&path)?)
    } else {
        Ok(ClientConfig::default())
    }
}

pub(crate) fn reader(config: Option<PathBuf>) -> Result<ReadClient, Box<dyn std::error::Error>> {
    let config = load_config(config)?;
    Ok(basekit_evm::read_client_with_config(&config)?)
}
