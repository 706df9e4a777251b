//! Operation selectors.

use alloy_primitives::{fixed_bytes, keccak256, Selector};

/// The width of an operation selector in bytes.
pub const SELECTOR_WIDTH: usize = 4;

/// Selector of `initErc20(address)`.
pub const INIT_SELECTOR: Selector = fixed_bytes!("33b42f4f");

/// Selector of `transfer(address,uint64)`.
pub const TRANSFER_SELECTOR: Selector = fixed_bytes!("5d359fbd");

/// Derives the selector of a canonical operation signature, e.g. `transfer(address,uint64)`.
///
/// The selector is the first four bytes of the keccak256 hash of the signature.
pub fn selector_for(signature: &str) -> Selector {
    Selector::from_slice(&keccak256(signature.as_bytes())[..SELECTOR_WIDTH])
}
