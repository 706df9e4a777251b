//! The signed transaction envelope codec.
//!
//! Transactions are carried as typed EIP-2718 envelopes of the dynamic-fee layout, with the
//! chain id widened to 256 bits so that it can hold a [RollupId]-derived chain id:
//!
//! ```text
//! 0x02 || rlp([chain_id, nonce, max_priority_fee_per_gas, max_fee_per_gas, gas_limit, to,
//!              value, input, access_list, y_parity, r, s])
//! ```
//!
//! The rollup ignores every field except the chain id, nonce, input and signature.
//!
//! [RollupId]: crate::RollupId

mod errors;
pub use errors::{EnvelopeError, EnvelopeResult};

mod tx;
pub use tx::{TxDynamicFee, DYNAMIC_FEE_TX_TYPE};

mod signed;
pub use signed::{signer_address, SignedTransaction, TxSignature};

pub use k256::ecdsa::SigningKey;
