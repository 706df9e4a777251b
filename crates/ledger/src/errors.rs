//! Errors for the `rollup-ledger` crate.

use alloy_primitives::Address;
use thiserror::Error;

/// A [Result] type for the [LedgerError].
pub type LedgerResult<T> = Result<T, LedgerError>;

/// A ledger operation that was refused. A refused operation leaves the ledger untouched.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerError {
    /// The owner has already been set.
    #[error("Owner already set to {current}, refusing to set {requested}")]
    OwnerAlreadySet {
        /// The owner currently on record.
        current: Address,
        /// The owner the operation tried to set.
        requested: Address,
    },
    /// The sender cannot cover the transfer.
    #[error("Balance of {balance} held by {from} is not enough to transfer {amount}")]
    InsufficientBalance {
        /// The debited account.
        from: Address,
        /// Its balance.
        balance: u64,
        /// The requested amount.
        amount: u64,
    },
}

/// An error reading from a [BlockStore].
///
/// [BlockStore]: crate::BlockStore
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockStoreError {
    /// No block is stored at the height.
    #[error("Block not found at height {0}")]
    NotFound(u32),
}
