//! Contains the reader/writer handles over a [Ledger].

use alloc::{collections::BTreeMap, sync::Arc};
use alloy_primitives::Address;
use spin::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::{Account, Ledger, StateReader};

/// The writing handle over the [Ledger].
///
/// There is exactly one [SharedLedger] per ledger and it is not [Clone]: whoever owns it is the
/// single writer. Any number of [LedgerReader]s may be handed out to concurrent readers.
#[derive(Debug, Default)]
pub struct SharedLedger {
    inner: Arc<RwLock<Ledger>>,
}

impl SharedLedger {
    /// Wraps `ledger` in a new writing handle.
    pub fn new(ledger: Ledger) -> Self {
        Self { inner: Arc::new(RwLock::new(ledger)) }
    }

    /// Returns a read-only handle to the same ledger.
    pub fn reader(&self) -> LedgerReader {
        LedgerReader { inner: Arc::clone(&self.inner) }
    }

    /// Acquires a read guard.
    pub fn read(&self) -> RwLockReadGuard<'_, Ledger> {
        self.inner.read()
    }

    /// Acquires the write guard. Readers are excluded until it is dropped, so every mutation
    /// made under one guard is observed atomically.
    pub fn write(&mut self) -> RwLockWriteGuard<'_, Ledger> {
        self.inner.write()
    }
}

/// A read-only handle over the [Ledger], safe to use while the writer is active.
///
/// Every call observes the ledger as of the moment its read guard is taken.
#[derive(Debug, Clone)]
pub struct LedgerReader {
    inner: Arc<RwLock<Ledger>>,
}

impl LedgerReader {
    /// Acquires a read guard, for reading several values from one consistent state.
    pub fn read(&self) -> RwLockReadGuard<'_, Ledger> {
        self.inner.read()
    }
}

impl StateReader for LedgerReader {
    fn owner(&self) -> Option<Address> {
        self.read().owner()
    }

    fn balance(&self, address: &Address) -> u64 {
        self.read().balance(address)
    }

    fn nonce(&self, address: &Address) -> u64 {
        self.read().nonce(address)
    }

    fn account(&self, address: &Address) -> Account {
        self.read().account(address)
    }

    fn total_supply(&self) -> u64 {
        self.read().total_supply()
    }

    fn balances(&self) -> BTreeMap<Address, u64> {
        self.read().balances().clone()
    }
}
