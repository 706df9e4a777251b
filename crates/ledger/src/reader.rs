//! The read-only query surface over the ledger.

use alloc::collections::BTreeMap;
use alloy_primitives::Address;

use crate::Ledger;

/// A consistent view of a single account.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Account {
    /// The account's balance.
    pub balance: u64,
    /// The nonce expected for the account's next transaction.
    pub nonce: u64,
}

/// Read access to the ledger state, as offered to query gateways.
pub trait StateReader {
    /// Returns the token owner, if the ledger has been initialized.
    fn owner(&self) -> Option<Address>;

    /// Returns the balance of `address`.
    fn balance(&self, address: &Address) -> u64;

    /// Returns the nonce of `address`.
    fn nonce(&self, address: &Address) -> u64;

    /// Returns the balance and nonce of `address`, read from the same state.
    fn account(&self, address: &Address) -> Account;

    /// Returns the sum of all balances.
    fn total_supply(&self) -> u64;

    /// Returns a snapshot of every recorded balance.
    fn balances(&self) -> BTreeMap<Address, u64>;
}

impl StateReader for Ledger {
    fn owner(&self) -> Option<Address> {
        Self::owner(self)
    }

    fn balance(&self, address: &Address) -> u64 {
        Self::balance(self, address)
    }

    fn nonce(&self, address: &Address) -> u64 {
        Self::nonce(self, address)
    }

    fn account(&self, address: &Address) -> Account {
        Account { balance: Self::balance(self, address), nonce: Self::nonce(self, address) }
    }

    fn total_supply(&self) -> u64 {
        Self::total_supply(self)
    }

    fn balances(&self) -> BTreeMap<Address, u64> {
        Self::balances(self).clone()
    }
}
