//! `basekit balance` — native balance of an address.

use std::path::PathBuf;

use alloy::primitives::utils::format_ether;
use basekit_evm::parse_account;

pub async fn run(config: Option<PathBuf>, address: String) -> Result<(), Box<dyn std::error::Error>> {
    let address = parse_account(&address)?;
    let client = super::reader(config)?;

    let wei = client.get_balance(address).await?;
    println!(
        "{} wei ({} {})",
        wei,
        format_ether(wei),
        client.chain().native_currency.symbol
    );
    Ok(())
}
