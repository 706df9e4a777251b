//! Test utilities for the executor.

#![allow(missing_docs, unreachable_pub)]

use alloy_primitives::{uint, U256};
use rollup_primitives::SigningKey;

/// The chain id of the `astria` rollup: `sha256("astria")` read as a big-endian integer.
pub const ROLLUP_CHAIN_ID: U256 =
    uint!(0x5bb944ec2fd3ae9c22f68ce78c74b3206199ebf832b18506487ff39548774f91_U256);

/// Returns a deterministic signing key whose scalar is `n` repeated in every byte.
///
/// `n` must be non-zero.
pub fn key(n: u8) -> SigningKey {
    SigningKey::from_slice(&[n; 32]).expect("non-zero scalar below the curve order")
}
