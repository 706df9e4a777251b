//! Contains the [TxAuthenticator].

use alloy_primitives::{Address, Bytes, Selector, U256};
use rollup_primitives::{SignedTransaction, SELECTOR_WIDTH, SLOT_WIDTH};

use crate::{ExecutionError, ExecutionResult};

/// The shortest operation payload accepted: a selector and one argument slot.
pub const MIN_PAYLOAD_LEN: usize = SELECTOR_WIDTH + SLOT_WIDTH;

/// A transaction whose envelope, chain id and signature have been verified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedTransaction {
    /// The recovered sender.
    pub sender: Address,
    /// The sender's nonce.
    pub nonce: u64,
    /// The operation selector.
    pub selector: Selector,
    /// The argument slots following the selector.
    pub args: Bytes,
}

/// Turns raw transaction payloads into [AuthenticatedTransaction]s for one rollup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TxAuthenticator {
    chain_id: U256,
}

impl TxAuthenticator {
    /// Creates an authenticator accepting transactions for `chain_id`.
    pub const fn new(chain_id: U256) -> Self {
        Self { chain_id }
    }

    /// Returns the accepted chain id.
    pub const fn chain_id(&self) -> U256 {
        self.chain_id
    }

    /// Authenticates a raw transaction payload.
    ///
    /// The checks run in order: envelope decoding, chain id, sender recovery, payload width.
    /// The first failing check decides the error.
    pub fn authenticate(&self, raw: &[u8]) -> ExecutionResult<AuthenticatedTransaction> {
        let signed = SignedTransaction::decode(raw).map_err(ExecutionError::Decode)?;

        if signed.tx.chain_id != self.chain_id {
            return Err(ExecutionError::ChainMismatch {
                expected: self.chain_id,
                got: signed.tx.chain_id,
            });
        }

        let sender = signed.recover_sender().map_err(ExecutionError::Authentication)?;

        let input = &signed.tx.input;
        if input.len() < MIN_PAYLOAD_LEN {
            return Err(ExecutionError::MalformedPayload { len: input.len(), min: MIN_PAYLOAD_LEN });
        }

        Ok(AuthenticatedTransaction {
            sender,
            nonce: signed.tx.nonce,
            selector: Selector::from_slice(&input[..SELECTOR_WIDTH]),
            args: Bytes(input.0.slice(SELECTOR_WIDTH..)),
        })
    }
}
