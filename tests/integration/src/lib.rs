//! Integration tests for basekit.
//!
//! Anvil-dependent tests use **testcontainers** to spin up a Docker-based
//! Anvil node that pretends to be Base Sepolia (`--chain-id 84532`).
//!
//! ```bash
//! # Run everything (Docker must be available):
//! cargo test -p basekit-integration-tests -- --include-ignored
//! ```

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use alloy::network::Ethereum;
    use alloy::primitives::{Address, B256, U256};
    use alloy::providers::{DynProvider, Provider, ProviderBuilder};
    use alloy::rpc::types::TransactionRequest;
    use async_trait::async_trait;
    use basekit::{
        read_client, read_client_with_config, write_client, ClientConfig, ClientError,
        Eip1193Provider, ProviderRpcError, RequestArguments, WriteClientParams, BASE_SEPOLIA,
    };
    use serde_json::{json, Value};
    use testcontainers::{
        core::{IntoContainerPort, WaitFor},
        runners::SyncRunner,
        Container, GenericImage, ImageExt,
    };

    /// Anvil default account 0.
    const ANVIL_ACCOUNT: &str = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266";
    /// Anvil default account 1.
    const ANVIL_RECIPIENT: &str = "0x70997970C51812dc3A010C7d01b50e0d17dc79C8";

    /// Spins up a Docker Anvil container and returns `(container, rpc_url)`.
    /// The container is dropped (and removed) when it goes out of scope.
    fn start_anvil() -> (Container<GenericImage>, String) {
        let image = GenericImage::new("ghcr.io/foundry-rs/foundry", "latest")
            .with_exposed_port(8545.tcp())
            .with_wait_for(WaitFor::message_on_stdout("Listening on"))
            .with_entrypoint("anvil")
            .with_cmd(vec![
                "--host".to_string(),
                "0.0.0.0".to_string(),
                "--port".to_string(),
                "8545".to_string(),
                "--chain-id".to_string(),
                BASE_SEPOLIA.id.to_string(),
            ]);

        let container = image.start().expect("Docker must be available to run Anvil tests");
        let host_port = container.get_host_port_ipv4(8545).expect("failed to get mapped port");
        let url = format!("http://127.0.0.1:{}", host_port);
        (container, url)
    }

    fn init_tracing() {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    }

    /// In-process wallet that answers from a script and records requests.
    #[derive(Default)]
    struct ScriptedWallet {
        calls: Mutex<Vec<String>>,
        reject_sends: bool,
    }

    #[async_trait]
    impl Eip1193Provider for ScriptedWallet {
        async fn request(&self, args: RequestArguments) -> Result<Value, ProviderRpcError> {
            self.calls.lock().unwrap().push(args.method.clone());
            match args.method.as_str() {
                "eth_chainId" => Ok(json!(BASE_SEPOLIA.chain_id_hex())),
                "eth_sendTransaction" if self.reject_sends => Err(ProviderRpcError::user_rejected()),
                "eth_sendTransaction" => Ok(json!(B256::repeat_byte(0x42))),
                other => Err(ProviderRpcError::unsupported_method(other)),
            }
        }
    }

    /// Wallet that forwards every request to a node with unlocked accounts,
    /// the way a browser wallet would forward reads to its own RPC.
    struct ForwardingWallet {
        node: DynProvider<Ethereum>,
    }

    impl ForwardingWallet {
        fn new(url: &str) -> Self {
            let node = ProviderBuilder::new()
                .connect_http(url.parse().unwrap())
                .erased();
            Self { node }
        }
    }

    #[async_trait]
    impl Eip1193Provider for ForwardingWallet {
        async fn request(&self, args: RequestArguments) -> Result<Value, ProviderRpcError> {
            let params = args.params.unwrap_or_else(|| json!([]));
            self.node
                .raw_request::<_, Value>(args.method.into(), params)
                .await
                .map_err(|e| ProviderRpcError::new(-32603, e.to_string()))
        }
    }

    async fn wait_for_receipt(provider: &DynProvider<Ethereum>, tx_hash: B256) -> Option<()> {
        for _ in 0..10 {
            let receipt = provider.get_transaction_receipt(tx_hash).await.ok()?;
            if receipt.is_some() {
                return Some(());
            }
            tokio::time::sleep(std::time::Duration::from_millis(500)).await;
        }
        None
    }

    // -----------------------------------------------------------------
    // Factory properties — no network needed
    // -----------------------------------------------------------------

    #[test]
    fn test_read_client_reports_fixed_chain() {
        for _ in 0..3 {
            let client = read_client().expect("read client construction never fails");
            assert_eq!(client.chain(), &BASE_SEPOLIA);
            assert!(client.account().is_none());
        }
    }

    #[tokio::test]
    async fn test_write_client_matches_read_client_chain() {
        let reader = read_client().unwrap();
        let writer = write_client(WriteClientParams {
            address: ANVIL_ACCOUNT,
            provider: ScriptedWallet::default(),
        })
        .await
        .unwrap();

        assert_eq!(writer.account(), ANVIL_ACCOUNT.parse::<Address>().unwrap());
        assert_eq!(writer.chain(), reader.chain());
    }

    #[tokio::test]
    async fn test_clients_are_independent() {
        let a = Arc::new(ScriptedWallet::default());
        let b = Arc::new(ScriptedWallet::default());

        let client_a = write_client(WriteClientParams {
            address: ANVIL_ACCOUNT,
            provider: a.clone(),
        })
        .await
        .unwrap();
        let client_b = write_client(WriteClientParams {
            address: ANVIL_ACCOUNT,
            provider: b.clone(),
        })
        .await
        .unwrap();

        client_a.get_chain_id().await.unwrap();

        assert_eq!(a.calls.lock().unwrap().as_slice(), ["eth_chainId"]);
        assert!(b.calls.lock().unwrap().is_empty());
        drop(client_b);
    }

    #[tokio::test]
    async fn test_malformed_addresses_rejected() {
        for bad in [
            "",
            "0x",
            "f39Fd6e51aad88F6F4ce6aB8827279cffFb92266",
            "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb9226",
            "0xg39Fd6e51aad88F6F4ce6aB8827279cffFb92266",
            "0xF39Fd6e51aad88F6F4ce6aB8827279cffFb92266",
        ] {
            let result = write_client(WriteClientParams {
                address: bad,
                provider: ScriptedWallet::default(),
            })
            .await;
            assert!(
                matches!(result, Err(ClientError::Account(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[tokio::test]
    async fn test_user_rejection_surfaces_as_error() {
        init_tracing();
        let wallet = ScriptedWallet {
            reject_sends: true,
            ..ScriptedWallet::default()
        };
        let client = write_client(WriteClientParams {
            address: ANVIL_ACCOUNT,
            provider: wallet,
        })
        .await
        .unwrap();

        let tx = TransactionRequest::default()
            .to(Address::with_last_byte(1))
            .value(U256::from(1u64));
        let err = client.send_transaction(tx).await.unwrap_err();
        assert!(matches!(err, ClientError::Rpc(_)));
        assert!(err.to_string().contains("4001"));
    }

    #[test]
    fn test_config_file_drives_read_client() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.yaml");
        std::fs::write(&path, "rpc_url: http://127.0.0.1:8545\nrequest_timeout_secs: 3\n")
            .unwrap();

        let config = ClientConfig::from_file(&path).unwrap();
        let client = read_client_with_config(&config).unwrap();
        assert_eq!(client.rpc_url(), "http://127.0.0.1:8545");
        assert_eq!(client.chain(), &BASE_SEPOLIA);
    }

    // -----------------------------------------------------------------
    // Anvil via testcontainers
    // -----------------------------------------------------------------

    #[test]
    #[ignore]
    fn test_read_client_against_anvil() {
        let (_anvil, anvil_url) = start_anvil();

        let rt = tokio::runtime::Runtime::new().unwrap();
        rt.block_on(async {
            init_tracing();
            let config = ClientConfig {
                rpc_url: Some(anvil_url.clone()),
                ..ClientConfig::default()
            };
            let client = read_client_with_config(&config).unwrap();

            client.verify_chain().await.expect("anvil runs with the Base Sepolia chain id");

            let balance = client
                .get_balance(ANVIL_ACCOUNT.parse().unwrap())
                .await
                .unwrap();
            assert!(balance > U256::ZERO, "Anvil default account should have ETH");
        });
    }

    #[test]
    #[ignore]
    fn test_write_client_sends_through_wallet() {
        let (_anvil, anvil_url) = start_anvil();

        let rt = tokio::runtime::Runtime::new().unwrap();
        rt.block_on(async {
            init_tracing();
            let reader = read_client_with_config(&ClientConfig {
                rpc_url: Some(anvil_url.clone()),
                ..ClientConfig::default()
            })
            .unwrap();
            let writer = write_client(WriteClientParams {
                address: ANVIL_ACCOUNT,
                provider: ForwardingWallet::new(&anvil_url),
            })
            .await
            .unwrap();

            assert_eq!(writer.get_chain_id().await.unwrap(), BASE_SEPOLIA.id);

            let recipient: Address = ANVIL_RECIPIENT.parse().unwrap();
            let before = reader.get_balance(recipient).await.unwrap();

            let value = U256::from(1_000_000_000_000_000u64); // 0.001 ETH
            let tx = TransactionRequest::default().to(recipient).value(value);
            let tx_hash = writer
                .send_transaction(tx)
                .await
                .expect("transfer should succeed on Anvil");
            assert_ne!(tx_hash, B256::ZERO);

            wait_for_receipt(reader.provider(), tx_hash)
                .await
                .expect("receipt should appear");

            let after = reader.get_balance(recipient).await.unwrap();
            assert_eq!(after, before + value);
        });
    }

    #[test]
    #[ignore]
    fn test_read_client_detects_wrong_chain() {
        let image = GenericImage::new("ghcr.io/foundry-rs/foundry", "latest")
            .with_exposed_port(8545.tcp())
            .with_wait_for(WaitFor::message_on_stdout("Listening on"))
            .with_entrypoint("anvil")
            .with_cmd(vec!["--host".to_string(), "0.0.0.0".to_string()]);
        let container = image.start().expect("Docker must be available to run Anvil tests");
        let port = container.get_host_port_ipv4(8545).unwrap();

        let rt = tokio::runtime::Runtime::new().unwrap();
        rt.block_on(async {
            let client = read_client_with_config(&ClientConfig {
                rpc_url: Some(format!("http://127.0.0.1:{port}")),
                ..ClientConfig::default()
            })
            .unwrap();

            let err = client.verify_chain().await.unwrap_err();
            assert!(matches!(
                err,
                ClientError::ChainMismatch {
                    expected: 84532,
                    actual: 31337
                }
            ));
        });
    }
}
