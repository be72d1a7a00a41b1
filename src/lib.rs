//! # basekit
//!
//! Read-only and wallet-backed signing clients for Base Sepolia.
//!
//! ```no_run
//! # async fn demo() -> Result<(), basekit::ClientError> {
//! let reader = basekit::read_client()?;
//! let height = reader.get_block_number().await?;
//! println!("{} is at block {height}", reader.chain());
//! # Ok(())
//! # }
//! ```

pub use basekit_core::{chain, config, ClientConfig, ConfigError, NetworkDescriptor, BASE_SEPOLIA};
pub use basekit_evm::{
    eip1193, read_client, read_client_with_config, write_client, AccountError, Address,
    ClientError, Eip1193Provider, ProviderRpcError, ReadClient, RequestArguments, WriteClient,
    WriteClientParams,
};

/// Returns the library version string.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
