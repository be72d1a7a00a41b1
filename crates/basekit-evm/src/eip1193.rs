//! Wallet provider capability (EIP-1193).
//!
//! A wallet provider is anything that can answer `request({ method, params })`:
//! a browser extension bridge, a WalletConnect session, a hardware wallet
//! daemon. basekit never holds keys; signing happens behind this trait.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// The user rejected the request.
pub const USER_REJECTED_REQUEST: i64 = 4001;
/// The requested method and/or account has not been authorized by the user.
pub const UNAUTHORIZED: i64 = 4100;
/// The provider does not support the requested method.
pub const UNSUPPORTED_METHOD: i64 = 4200;
/// The provider is disconnected from all chains.
pub const DISCONNECTED: i64 = 4900;
/// The provider is not connected to the requested chain.
pub const CHAIN_DISCONNECTED: i64 = 4901;

/// Arguments of a single provider request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestArguments {
    pub method: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Value>,
}

impl RequestArguments {
    pub fn new(method: impl Into<String>, params: Option<Value>) -> Self {
        Self {
            method: method.into(),
            params,
        }
    }
}

/// Error returned by a provider, mirroring the EIP-1193 `ProviderRpcError`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Error)]
#[error("provider error {code}: {message}")]
pub struct ProviderRpcError {
    pub code: i64,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl ProviderRpcError {
    pub fn new(code: i64, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data: None,
        }
    }

    pub fn user_rejected() -> Self {
        Self::new(USER_REJECTED_REQUEST, "User rejected the request.")
    }

    pub fn unsupported_method(method: &str) -> Self {
        Self::new(UNSUPPORTED_METHOD, format!("Unsupported method: {method}"))
    }

    pub fn disconnected() -> Self {
        Self::new(DISCONNECTED, "Provider is disconnected.")
    }

    /// Whether the provider has lost its connection, as opposed to
    /// refusing this particular request.
    pub fn is_disconnect(&self) -> bool {
        matches!(self.code, DISCONNECTED | CHAIN_DISCONNECTED)
    }
}

/// A wallet provider exposing the EIP-1193 `request` method.
#[async_trait]
pub trait Eip1193Provider: Send + Sync {
    async fn request(&self, args: RequestArguments) -> Result<Value, ProviderRpcError>;
}

#[async_trait]
impl<P: Eip1193Provider + ?Sized> Eip1193Provider for std::sync::Arc<P> {
    async fn request(&self, args: RequestArguments) -> Result<Value, ProviderRpcError> {
        (**self).request(args).await
    }
}
