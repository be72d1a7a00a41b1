//! # basekit-evm
//!
//! Client factories for Base Sepolia.
//!
//! ## Modules
//!
//! - [`account`] — account identifier validation
//! - [`client`] — read and write client factories
//! - [`eip1193`] — the wallet provider capability consumed by write clients
//! - [`transport`] — alloy transport that routes requests through a wallet provider

pub mod account;
pub mod client;
pub mod eip1193;
pub mod transport;

// Re-export key types for convenience.
pub use account::{parse_account, AccountError, IntoAccount};
pub use client::{
    read_client, read_client_with_config, write_client, ClientError, ReadClient, WriteClient,
    WriteClientParams,
};
pub use eip1193::{Eip1193Provider, ProviderRpcError, RequestArguments};
pub use transport::Eip1193Transport;

// Re-export alloy primitives used in the public API.
pub use alloy::primitives::{Address, Bytes, B256, U256};
