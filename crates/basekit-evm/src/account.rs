//! Account identifier validation.
//!
//! A signing identity is only accepted in its canonical `0x` + 40 hex form.
//! Mixed-case input must carry a valid EIP-55 checksum; anything else is
//! rejected rather than normalized.

use alloy::primitives::Address;
use thiserror::Error;

/// Errors from parsing an account identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccountError {
    #[error("account address must start with 0x: {0:?}")]
    MissingPrefix(String),
    #[error("account address must have 40 hex digits, got {0}")]
    InvalidLength(usize),
    #[error("account address contains non-hex characters: {0:?}")]
    InvalidHex(String),
    #[error("account address has an invalid EIP-55 checksum: {0}")]
    BadChecksum(String),
}

/// Parses a `0x`-prefixed account identifier into an [`Address`].
pub fn parse_account(input: &str) -> Result<Address, AccountError> {
    let digits = input
        .strip_prefix("0x")
        .ok_or_else(|| AccountError::MissingPrefix(input.to_string()))?;

    if digits.len() != 40 {
        return Err(AccountError::InvalidLength(digits.len()));
    }
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(AccountError::InvalidHex(input.to_string()));
    }

    let address: Address = input
        .parse()
        .map_err(|_| AccountError::InvalidHex(input.to_string()))?;

    let has_lower = digits.bytes().any(|b| b.is_ascii_lowercase());
    let has_upper = digits.bytes().any(|b| b.is_ascii_uppercase());
    if has_lower && has_upper && address.to_checksum(None) != input {
        return Err(AccountError::BadChecksum(input.to_string()));
    }

    Ok(address)
}

/// Something that can be turned into a validated account address.
///
/// Implemented for strings (validated) and for [`Address`] (already valid).
pub trait IntoAccount {
    fn into_account(self) -> Result<Address, AccountError>;
}

impl IntoAccount for Address {
    fn into_account(self) -> Result<Address, AccountError> {
        Ok(self)
    }
}

impl IntoAccount for &str {
    fn into_account(self) -> Result<Address, AccountError> {
        parse_account(self)
    }
}

impl IntoAccount for String {
    fn into_account(self) -> Result<Address, AccountError> {
        parse_account(&self)
    }
}

impl IntoAccount for &String {
    fn into_account(self) -> Result<Address, AccountError> {
        parse_account(self)
    }
}
