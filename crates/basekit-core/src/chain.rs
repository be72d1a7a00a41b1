//! Network descriptor for the one chain basekit talks to.
//!
//! Base Sepolia is fixed at build time; nothing in the workspace lets a
//! caller pick another chain.

use serde::Serialize;
use std::fmt;

/// Native currency of a chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NativeCurrency {
    /// Display name (e.g., "Sepolia Ether").
    pub name: &'static str,
    /// Ticker symbol.
    pub symbol: &'static str,
    /// Number of decimals.
    pub decimals: u8,
}

/// A block explorer front-end for a chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BlockExplorer {
    pub name: &'static str,
    pub url: &'static str,
}

/// Immutable identity and RPC conventions of a network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NetworkDescriptor {
    /// Numeric chain ID (EIP-155).
    pub id: u64,
    /// Human-readable chain name.
    pub name: &'static str,
    /// Short slug used in URLs and config keys.
    pub network: &'static str,
    pub native_currency: NativeCurrency,
    /// Public JSON-RPC endpoint used when no override is configured.
    pub rpc_url: &'static str,
    pub block_explorer: BlockExplorer,
    pub testnet: bool,
    /// Chain ID of the L1 this rollup settles to.
    pub source_id: Option<u64>,
    /// Target block time in milliseconds.
    pub block_time_ms: u64,
}

/// Base Sepolia, the OP-stack testnet settling to Ethereum Sepolia.
pub const BASE_SEPOLIA: NetworkDescriptor = NetworkDescriptor {
    id: 84532,
    name: "Base Sepolia",
    network: "base-sepolia",
    native_currency: NativeCurrency {
        name: "Sepolia Ether",
        symbol: "ETH",
        decimals: 18,
    },
    rpc_url: "https://sepolia.base.org",
    block_explorer: BlockExplorer {
        name: "Basescan",
        url: "https://sepolia.basescan.org",
    },
    testnet: true,
    source_id: Some(11_155_111),
    block_time_ms: 2_000,
};

impl NetworkDescriptor {
    /// Chain ID as a `0x`-prefixed quantity, the form wallet RPC methods expect.
    pub fn chain_id_hex(&self) -> String {
        format!("{:#x}", self.id)
    }
}

impl fmt::Display for NetworkDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}
