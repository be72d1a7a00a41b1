//! `basekit chain` — print the network descriptor.

use basekit_core::BASE_SEPOLIA;

pub fn run(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(&BASE_SEPOLIA)?);
        return Ok(());
    }

    let chain = &BASE_SEPOLIA;
    println!("Chain: {chain}");
    println!("Network: {}", chain.network);
    println!(
        "Currency: {} ({}, {} decimals)",
        chain.native_currency.name, chain.native_currency.symbol, chain.native_currency.decimals
    );
    println!("RPC: {}", chain.rpc_url);
    println!(
        "Explorer: {} ({})",
        chain.block_explorer.name, chain.block_explorer.url
    );
    if let Some(source) = chain.source_id {
        println!("Settles to: {source}");
    }

    Ok(())
}
