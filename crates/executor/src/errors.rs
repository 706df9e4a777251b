//! Errors for the `rollup-executor` crate.

use alloy_primitives::{Selector, U256};
use rollup_ledger::LedgerError;
use rollup_primitives::EnvelopeError;

/// The reason a transaction was dropped without effect.
///
/// None of these is fatal: a rejected transaction leaves the ledger, including the sender's
/// nonce, exactly as it was.
#[derive(derive_more::Display, Debug, Clone, PartialEq, Eq)]
pub enum ExecutionError {
    /// The payload is not a well-formed transaction envelope.
    #[display("Decode error: {_0}")]
    Decode(EnvelopeError),
    /// The signature does not recover to a sender.
    #[display("Authentication error: {_0}")]
    Authentication(EnvelopeError),
    /// The transaction commits to another chain.
    #[display("Incorrect chain id, expected {expected}, got {got}")]
    ChainMismatch {
        /// The rollup's chain id.
        expected: U256,
        /// The chain id in the transaction.
        got: U256,
    },
    /// The operation payload is too short to hold its selector and arguments.
    #[display("Payload of {len} bytes is shorter than the required {min} bytes")]
    MalformedPayload {
        /// The payload length.
        len: usize,
        /// The minimum length required.
        min: usize,
    },
    /// The nonce is not the next one expected from the sender.
    #[display("Wrong nonce, expected {expected} but got {got}")]
    NonceMismatch {
        /// The sender's current nonce.
        expected: u64,
        /// The nonce in the transaction.
        got: u64,
    },
    /// The selector does not name a known operation.
    #[display("Unknown operation selector: {_0}")]
    UnknownSelector(Selector),
    /// The operation was refused by the ledger.
    #[display("Operation failed: {_0}")]
    Operation(LedgerError),
}

impl ExecutionError {
    /// Returns a short, stable label for the kind of rejection.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Decode(_) => "decode",
            Self::Authentication(_) => "authentication",
            Self::ChainMismatch { .. } => "chain_mismatch",
            Self::MalformedPayload { .. } => "malformed_payload",
            Self::NonceMismatch { .. } => "nonce_mismatch",
            Self::UnknownSelector(_) => "unknown_selector",
            Self::Operation(_) => "operation_failure",
        }
    }
}

impl From<LedgerError> for ExecutionError {
    fn from(err: LedgerError) -> Self {
        Self::Operation(err)
    }
}

impl core::error::Error for ExecutionError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Decode(err) | Self::Authentication(err) => Some(err),
            Self::Operation(err) => Some(err),
            _ => None,
        }
    }
}

/// A [Result] type for the [ExecutionError] enum.
pub type ExecutionResult<T> = Result<T, ExecutionError>;
