//! The driver of the block ingestion pipeline.

use alloc::vec::Vec;
use alloy_primitives::U256;
use rollup_executor::{Dispatcher, ExecutionError, Receipt};
use rollup_ledger::{LedgerReader, SharedBlockStore, SharedLedger};
use rollup_primitives::{Block, RawTransaction};

use crate::{BlockSource, DriverError, DriverResult};

/// The result of applying one block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockOutcome {
    /// The height of the block.
    pub height: u32,
    /// The number of applied transactions.
    pub applied: usize,
    /// The rejected transactions, in block order.
    pub rejected: Vec<ExecutionError>,
}

/// The block ingestion pipeline entrypoint.
///
/// The [Driver] owns the only writing handle of the ledger. Blocks are accepted only once
/// genesis has been applied, and only in strict height order starting at `1`.
#[derive(Debug)]
pub struct Driver {
    /// The ledger writer.
    ledger: SharedLedger,
    /// The state transition function.
    dispatcher: Dispatcher,
    /// The store of processed blocks.
    blocks: SharedBlockStore,
    /// The height of the last processed block. `0` after genesis.
    last_processed_height: u32,
    /// Whether genesis has been applied.
    bootstrapped: bool,
}

impl Driver {
    /// Creates a new [Driver] for the rollup with `chain_id`.
    pub const fn new(ledger: SharedLedger, chain_id: U256, blocks: SharedBlockStore) -> Self {
        Self {
            ledger,
            dispatcher: Dispatcher::new(chain_id),
            blocks,
            last_processed_height: 0,
            bootstrapped: false,
        }
    }

    /// Returns the height of the last processed block.
    pub const fn last_processed_height(&self) -> u32 {
        self.last_processed_height
    }

    /// Returns `true` once genesis has been applied.
    pub const fn is_bootstrapped(&self) -> bool {
        self.bootstrapped
    }

    /// Returns a read-only handle to the ledger.
    pub fn reader(&self) -> LedgerReader {
        self.ledger.reader()
    }

    /// Returns the store of processed blocks.
    pub fn blocks(&self) -> SharedBlockStore {
        self.blocks.clone()
    }

    /// Applies the genesis transaction. Any rejection is fatal.
    pub fn bootstrap(&mut self, genesis: &RawTransaction) -> DriverResult<Receipt> {
        if self.bootstrapped {
            return Err(DriverError::GenesisAlreadyApplied);
        }

        let receipt = self
            .dispatcher
            .apply_genesis(&mut self.ledger.write(), genesis.as_ref())
            .map_err(|e| {
                error!(target: "driver", "Genesis transaction rejected: {e}");
                DriverError::Genesis(e)
            })?;

        self.bootstrapped = true;
        info!(target: "driver", "Genesis applied, owner {}", receipt.sender);
        Ok(receipt)
    }

    /// Applies `block`, which must directly follow the last processed block.
    ///
    /// Transactions are applied in order, each under its own write guard. A rejected
    /// transaction is logged and recorded in the outcome without affecting the others.
    pub fn apply_block(&mut self, block: Block) -> DriverResult<BlockOutcome> {
        if !self.bootstrapped {
            return Err(DriverError::MissingGenesis(block.height));
        }

        let expected = self.last_processed_height.wrapping_add(1);
        if block.height != expected {
            error!(
                target: "driver",
                "Block sequence violation, expected height {expected} but got {}",
                block.height
            );
            return Err(DriverError::BlockSequenceViolation { expected, got: block.height });
        }

        let mut outcome = BlockOutcome { height: block.height, ..Default::default() };
        if block.is_empty() {
            debug!(target: "driver", "Block {} is empty", block.height);
        }

        for (index, raw) in block.transactions.iter().enumerate() {
            match self.dispatcher.apply(&mut self.ledger.write(), raw.as_ref()) {
                Ok(_) => outcome.applied += 1,
                Err(e) => {
                    warn!(
                        target: "driver",
                        "Rejected transaction {index} of block {}: {e}",
                        block.height
                    );
                    outcome.rejected.push(e);
                }
            }
        }

        self.last_processed_height = block.height;
        self.blocks.write().insert_block(block);
        info!(
            target: "driver",
            "Processed block {}: {} applied, {} rejected",
            outcome.height,
            outcome.applied,
            outcome.rejected.len()
        );
        Ok(outcome)
    }

    /// Consumes `source` until it closes, returning the last processed height.
    pub async fn run<S>(&mut self, source: &mut S) -> DriverResult<u32>
    where
        S: BlockSource + Send,
    {
        self.run_with(source, |_| {}).await
    }

    /// Consumes `source` until it closes, passing every [BlockOutcome] to `observe`.
    ///
    /// Stops at the first fatal error.
    pub async fn run_with<S, F>(&mut self, source: &mut S, mut observe: F) -> DriverResult<u32>
    where
        S: BlockSource + Send,
        F: FnMut(&BlockOutcome) + Send,
    {
        while let Some(block) = source.next_block().await {
            let outcome = self.apply_block(block)?;
            observe(&outcome);
        }

        info!(
            target: "driver",
            "Block source closed at height {}",
            self.last_processed_height
        );
        Ok(self.last_processed_height)
    }
}
