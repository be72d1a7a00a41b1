//! # basekit-core
//!
//! Network descriptor and client configuration shared across basekit crates.

pub mod chain;
pub mod config;

pub use chain::{NetworkDescriptor, BASE_SEPOLIA};
pub use config::{ClientConfig, ConfigError};
