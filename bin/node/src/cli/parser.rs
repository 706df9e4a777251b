//! Parser functions for CLI arguments.

use alloy_primitives::{hex, Address};
use rollup_primitives::SigningKey;
use std::str::FromStr;

/// Parse a string slice into an [Address].
pub fn parse_address(s: &str) -> Result<Address, String> {
    Address::from_str(s).map_err(|_| format!("Invalid address: {s}"))
}

/// Parse a hex string into a secp256k1 [SigningKey].
pub fn parse_key(s: &str) -> Result<SigningKey, String> {
    let bytes = hex::decode(s).map_err(|e| format!("Invalid hex string: {e}"))?;
    SigningKey::from_slice(&bytes).map_err(|_| "Invalid secp256k1 private key".to_string())
}

/// Parse a non-zero queue capacity.
pub fn parse_capacity(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("Queue capacity must be at least 1".to_string()),
        Ok(capacity) => Ok(capacity),
        Err(e) => Err(format!("Invalid queue capacity: {e}")),
    }
}
