//! Contains driver-related error types.

use rollup_executor::ExecutionError;
use rollup_primitives::EnvelopeError;
use thiserror::Error;

/// A [Result] type for the [DriverError].
pub type DriverResult<T> = Result<T, DriverError>;

/// A fatal pipeline error. The pipeline stops at the first one.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DriverError {
    /// A block arrived out of order.
    #[error("Block sequence violation, expected height {expected} but got {got}")]
    BlockSequenceViolation {
        /// The only height that may follow the last processed block.
        expected: u32,
        /// The height received.
        got: u32,
    },
    /// The genesis transaction could not be signed.
    #[error("Failed to sign the genesis transaction: {0}")]
    GenesisSigning(EnvelopeError),
    /// The genesis transaction was rejected.
    #[error("Genesis transaction rejected: {0}")]
    Genesis(ExecutionError),
    /// Genesis has already been applied to this pipeline.
    #[error("Genesis already applied")]
    GenesisAlreadyApplied,
    /// A block was offered before genesis was applied.
    #[error("Block {0} received before genesis")]
    MissingGenesis(u32),
    /// The pipeline stopped consuming blocks.
    #[error("Block feed closed, block {0} was not delivered")]
    FeedClosed(u32),
}
