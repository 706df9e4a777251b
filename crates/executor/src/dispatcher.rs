//! Contains the [Dispatcher], which applies authenticated transactions to the [Ledger].

use alloy_primitives::{Address, U256};
use rollup_ledger::Ledger;
use rollup_primitives::GENESIS_SUPPLY;

use crate::{
    AuthenticatedTransaction, ExecutionError, ExecutionResult, Operation, OperationKind,
    TxAuthenticator,
};

/// The record of a successfully applied transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Receipt {
    /// The sender.
    pub sender: Address,
    /// The nonce the transaction carried.
    pub nonce: u64,
    /// The applied operation.
    pub operation: Operation,
}

/// The state transition function of the rollup.
///
/// Every failure path returns before the ledger is first mutated, so a rejected transaction
/// has no effect at all. The caller holds the ledger's write guard across a whole call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dispatcher {
    authenticator: TxAuthenticator,
}

impl Dispatcher {
    /// Creates a dispatcher for the rollup with `chain_id`.
    pub const fn new(chain_id: U256) -> Self {
        Self { authenticator: TxAuthenticator::new(chain_id) }
    }

    /// Returns the [TxAuthenticator] in use.
    pub const fn authenticator(&self) -> &TxAuthenticator {
        &self.authenticator
    }

    /// Authenticates `raw`, checks its nonce, applies its operation and advances the sender's
    /// nonce.
    pub fn apply(&self, ledger: &mut Ledger, raw: &[u8]) -> ExecutionResult<Receipt> {
        let tx = self.authenticator.authenticate(raw)?;
        let receipt = self.execute(ledger, &tx)?;
        let nonce = ledger.increment_nonce(tx.sender);
        info!(
            target: "executor",
            "Applied {} from {}, next nonce {nonce}",
            receipt.operation.kind().name(),
            receipt.sender
        );
        Ok(receipt)
    }

    /// Applies the genesis transaction.
    ///
    /// Genesis is checked like any live transaction but only `init` is accepted, and the
    /// signer's nonce is left where it was.
    pub fn apply_genesis(&self, ledger: &mut Ledger, raw: &[u8]) -> ExecutionResult<Receipt> {
        let tx = self.authenticator.authenticate(raw)?;
        if OperationKind::from_selector(tx.selector)? != OperationKind::Init {
            return Err(ExecutionError::UnknownSelector(tx.selector));
        }
        let receipt = self.execute(ledger, &tx)?;
        info!(target: "executor", "Applied genesis from {}", receipt.sender);
        Ok(receipt)
    }

    /// Checks the nonce of `tx` and runs its operation. Does not touch the nonce.
    fn execute(
        &self,
        ledger: &mut Ledger,
        tx: &AuthenticatedTransaction,
    ) -> ExecutionResult<Receipt> {
        let expected = ledger.nonce(&tx.sender);
        if tx.nonce != expected {
            return Err(ExecutionError::NonceMismatch { expected, got: tx.nonce });
        }

        let operation = Operation::decode(tx.selector, &tx.args)?;
        match operation {
            Operation::Init { owner } => ledger.initialize(owner, GENESIS_SUPPLY)?,
            Operation::Transfer { to, amount } => ledger.transfer(tx.sender, to, amount)?,
        }

        Ok(Receipt { sender: tx.sender, nonce: tx.nonce, operation })
    }
}
