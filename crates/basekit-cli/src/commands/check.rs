//! `basekit check` — verify the endpoint serves the expected chain.

use std::path::PathBuf;

pub async fn run(config: Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    let client = super::reader(config)?;
    client.verify_chain().await?;
    println!("OK: {} serves {}", client.rpc_url(), client.chain());
    Ok(())
}
