//! `basekit block-number` — latest block number.

use std::path::PathBuf;

pub async fn run(config: Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    let client = super::reader(config)?;
    let number = client.get_block_number().await?;
    println!("{number}");
    Ok(())
}
