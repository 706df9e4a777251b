//! Contains the [TransactionBuilder], used to craft signed rollup transactions.

use alloy_primitives::{Bytes, U256};
use rollup_primitives::{
    EnvelopeResult, RawTransaction, SignedTransaction, SigningKey, TxDynamicFee,
};

use crate::Operation;

/// A builder for signed rollup transactions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionBuilder {
    /// The chain id to commit to.
    chain_id: U256,
    /// The sender's nonce.
    nonce: u64,
    /// The operation payload.
    input: Bytes,
}

impl TransactionBuilder {
    /// Creates a new builder for the rollup with `chain_id`.
    pub fn new(chain_id: U256) -> Self {
        Self { chain_id, ..Default::default() }
    }

    /// Set the nonce.
    pub fn nonce(mut self, nonce: u64) -> Self {
        self.nonce = nonce;
        self
    }

    /// Set the payload to the encoding of `operation`.
    pub fn operation(self, operation: Operation) -> Self {
        self.input(operation.encode())
    }

    /// Set a raw payload.
    pub fn input(mut self, input: impl Into<Bytes>) -> Self {
        self.input = input.into();
        self
    }

    /// Build the unsigned transaction.
    pub fn build(self) -> TxDynamicFee {
        TxDynamicFee::new(self.chain_id, self.nonce, self.input)
    }

    /// Build the transaction and sign it with `key`, returning its wire encoding.
    pub fn sign(self, key: &SigningKey) -> EnvelopeResult<RawTransaction> {
        let signed = SignedTransaction::sign(self.build(), key)?;
        Ok(signed.encoded_2718().into())
    }
}

/// Signs `input` as a transaction from `key` with `nonce` on the rollup with `chain_id`.
pub fn sign_transaction(
    key: &SigningKey,
    chain_id: U256,
    nonce: u64,
    input: Bytes,
) -> EnvelopeResult<RawTransaction> {
    TransactionBuilder::new(chain_id).nonce(nonce).input(input).sign(key)
}
