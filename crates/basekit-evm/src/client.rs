//! Client factories for Base Sepolia.
//!
//! [`read_client`] builds an unauthenticated client over HTTP. [`write_client`]
//! builds a client whose every request is routed through a caller-supplied
//! wallet provider, with the caller's account as its signing identity.
//! Neither factory touches the network; I/O happens on first use.

use alloy::network::{Ethereum, TransactionBuilder};
use alloy::primitives::{Address, Bytes, B256, U256};
use alloy::providers::{DynProvider, Provider, ProviderBuilder, RootProvider};
use alloy::rpc::client::RpcClient;
use alloy::rpc::types::TransactionRequest;
use alloy::transports::http::reqwest::{Client as HttpClient, Url};
use alloy::transports::http::Http;
use basekit_core::{ClientConfig, NetworkDescriptor, BASE_SEPOLIA};
use serde_json::{json, Value};
use thiserror::Error;
use tracing::{debug, warn};

use crate::account::{AccountError, IntoAccount};
use crate::eip1193::Eip1193Provider;
use crate::transport::Eip1193Transport;

/// Errors from client construction and use.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid account: {0}")]
    Account(#[from] AccountError),
    #[error("URL parse error: {0}")]
    UrlParse(String),
    #[error("HTTP client error: {0}")]
    HttpClient(String),
    #[error("RPC error: {0}")]
    Rpc(String),
    #[error("chain mismatch: expected chain {expected}, endpoint reports {actual}")]
    ChainMismatch { expected: u64, actual: u64 },
}

/// Result alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Read-only client bound to Base Sepolia.
///
/// Carries no signing identity and offers no signing methods.
#[derive(Clone)]
pub struct ReadClient {
    provider: DynProvider<Ethereum>,
    chain: &'static NetworkDescriptor,
    rpc_url: String,
}

impl std::fmt::Debug for ReadClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReadClient")
            .field("chain", &self.chain.id)
            .field("rpc_url", &self.rpc_url)
            .finish()
    }
}

/// Builds a read client against the chain's public RPC endpoint.
pub fn read_client() -> Result<ReadClient> {
    read_client_with_config(&ClientConfig::default())
}

/// Builds a read client using the endpoint and timeout from `config`.
pub fn read_client_with_config(config: &ClientConfig) -> Result<ReadClient> {
    let chain = &BASE_SEPOLIA;
    let rpc_url = config.rpc_url_for(chain);

    let url: Url = rpc_url
        .parse()
        .map_err(|e| ClientError::UrlParse(format!("{e}")))?;
    let http = HttpClient::builder()
        .timeout(config.request_timeout())
        .build()
        .map_err(|e| ClientError::HttpClient(e.to_string()))?;

    let client = RpcClient::new(Http::with_client(http, url), false);
    let provider = ProviderBuilder::new().connect_client(client).erased();

    debug!(chain_id = chain.id, rpc_url, "built read client");

    Ok(ReadClient {
        provider,
        chain,
        rpc_url: rpc_url.to_string(),
    })
}

impl ReadClient {
    /// The network this client is bound to.
    pub fn chain(&self) -> &'static NetworkDescriptor {
        self.chain
    }

    /// Always `None`: a read client has no signing identity.
    pub fn account(&self) -> Option<Address> {
        None
    }

    /// Returns a reference to the underlying provider.
    pub fn provider(&self) -> &DynProvider<Ethereum> {
        &self.provider
    }

    /// Returns the RPC URL.
    pub fn rpc_url(&self) -> &str {
        &self.rpc_url
    }

    /// Gets the chain ID reported by the endpoint.
    pub async fn get_chain_id(&self) -> Result<u64> {
        self.provider
            .get_chain_id()
            .await
            .map_err(|e| ClientError::Rpc(e.to_string()))
    }

    /// Gets the latest block number.
    pub async fn get_block_number(&self) -> Result<u64> {
        self.provider
            .get_block_number()
            .await
            .map_err(|e| ClientError::Rpc(e.to_string()))
    }

    /// Queries the native balance of `address` in wei.
    pub async fn get_balance(&self, address: Address) -> Result<U256> {
        self.provider
            .get_balance(address)
            .await
            .map_err(|e| ClientError::Rpc(e.to_string()))
    }

    /// Checks that the endpoint actually serves this client's chain.
    pub async fn verify_chain(&self) -> Result<()> {
        let actual = self.get_chain_id().await?;
        if actual != self.chain.id {
            return Err(ClientError::ChainMismatch {
                expected: self.chain.id,
                actual,
            });
        }
        Ok(())
    }
}

/// Input to [`write_client`]: the signing account and the wallet behind it.
#[derive(Debug, Clone)]
pub struct WriteClientParams<A, P> {
    pub address: A,
    pub provider: P,
}

/// Signing client bound to Base Sepolia, backed by a wallet provider.
#[derive(Clone)]
pub struct WriteClient {
    provider: DynProvider<Ethereum>,
    chain: &'static NetworkDescriptor,
    account: Address,
}

impl std::fmt::Debug for WriteClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WriteClient")
            .field("chain", &self.chain.id)
            .field("account", &self.account)
            .finish()
    }
}

/// Builds a signing client for `params.address`, routed through `params.provider`.
///
/// Fails if the address is not a well-formed account identifier. The wallet
/// is not contacted here.
pub async fn write_client<A, P>(params: WriteClientParams<A, P>) -> Result<WriteClient>
where
    A: IntoAccount,
    P: Eip1193Provider + 'static,
{
    let account = params.address.into_account()?;
    let chain = &BASE_SEPOLIA;

    let client = RpcClient::new(Eip1193Transport::new(params.provider), false);
    // No fillers: the wallet populates nonce, gas and fees itself.
    let provider = RootProvider::<Ethereum>::new(client).erased();

    debug!(chain_id = chain.id, %account, "built write client");

    Ok(WriteClient {
        provider,
        chain,
        account,
    })
}

impl WriteClient {
    /// The network this client is bound to.
    pub fn chain(&self) -> &'static NetworkDescriptor {
        self.chain
    }

    /// The signing account.
    pub fn account(&self) -> Address {
        self.account
    }

    /// Returns a reference to the wallet-backed provider.
    pub fn provider(&self) -> &DynProvider<Ethereum> {
        &self.provider
    }

    /// Gets the chain ID the wallet is currently on.
    pub async fn get_chain_id(&self) -> Result<u64> {
        self.provider
            .get_chain_id()
            .await
            .map_err(|e| ClientError::Rpc(e.to_string()))
    }

    /// Asks the wallet to sign and broadcast `tx` from the signing account.
    ///
    /// `from` and `chainId` are always overwritten with the client's own.
    /// Fails with [`ClientError::ChainMismatch`] without asking the wallet to
    /// send if the wallet is on another chain.
    pub async fn send_transaction(&self, tx: TransactionRequest) -> Result<B256> {
        let actual = self.get_chain_id().await?;
        if actual != self.chain.id {
            warn!(
                expected = self.chain.id,
                actual, "wallet is on the wrong chain, refusing to send"
            );
            return Err(ClientError::ChainMismatch {
                expected: self.chain.id,
                actual,
            });
        }

        let mut tx = tx.from(self.account);
        tx.set_chain_id(self.chain.id);

        let pending = self
            .provider
            .send_transaction(tx)
            .await
            .map_err(|e| ClientError::Rpc(e.to_string()))?;

        Ok(*pending.tx_hash())
    }

    /// Signs `message` with the account (`personal_sign`).
    pub async fn sign_message(&self, message: &[u8]) -> Result<Bytes> {
        self.provider
            .raw_request::<_, Bytes>(
                "personal_sign".into(),
                (Bytes::copy_from_slice(message), self.account),
            )
            .await
            .map_err(|e| ClientError::Rpc(e.to_string()))
    }

    /// Asks the wallet for the accounts it exposes (`eth_requestAccounts`).
    pub async fn request_addresses(&self) -> Result<Vec<Address>> {
        self.provider
            .raw_request::<_, Vec<Address>>("eth_requestAccounts".into(), ())
            .await
            .map_err(|e| ClientError::Rpc(e.to_string()))
    }

    /// Asks the wallet to switch to this client's chain.
    pub async fn switch_chain(&self) -> Result<()> {
        let params = [json!({ "chainId": self.chain.chain_id_hex() })];
        self.provider
            .raw_request::<_, Value>("wallet_switchEthereumChain".into(), params)
            .await
            .map_err(|e| ClientError::Rpc(e.to_string()))?;
        Ok(())
    }

    /// Asks the wallet to add this client's chain (EIP-3085).
    pub async fn add_chain(&self) -> Result<()> {
        let params = [add_chain_params(self.chain)];
        self.provider
            .raw_request::<_, Value>("wallet_addEthereumChain".into(), params)
            .await
            .map_err(|e| ClientError::Rpc(e.to_string()))?;
        Ok(())
    }
}

fn add_chain_params(chain: &NetworkDescriptor) -> Value {
    json!({
        "chainId": chain.chain_id_hex(),
        "chainName": chain.name,
        "nativeCurrency": {
            "name": chain.native_currency.name,
            "symbol": chain.native_currency.symbol,
            "decimals": chain.native_currency.decimals,
        },
        "rpcUrls": [chain.rpc_url],
        "blockExplorerUrls": [chain.block_explorer.url],
    })
}
