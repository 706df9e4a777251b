#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(not(test), no_std)]

extern crate alloc;

mod block;
pub use block::Block;

mod raw_tx;
pub use raw_tx::RawTransaction;

mod rollup_id;
pub use rollup_id::RollupId;

mod selector;
pub use selector::{selector_for, INIT_SELECTOR, SELECTOR_WIDTH, TRANSFER_SELECTOR};

mod slots;
pub use slots::{read_address, read_u64, write_address, write_u64, SLOT_WIDTH};

mod envelope;
pub use envelope::{
    signer_address, EnvelopeError, EnvelopeResult, SignedTransaction, SigningKey, TxDynamicFee,
    TxSignature, DYNAMIC_FEE_TX_TYPE,
};

/// The fixed supply credited to the token owner by the `init` operation.
///
/// No operation mints or burns, so the sum of all balances equals this value for the entire
/// lifetime of the ledger once genesis has been applied.
pub const GENESIS_SUPPLY: u64 = 10_000;
