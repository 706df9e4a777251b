//! Contains the [Ledger] state.

use alloc::collections::BTreeMap;
use alloy_primitives::Address;

use crate::{LedgerError, LedgerResult};

/// The token ledger.
///
/// Account maps retain every address ever seen; unseen addresses read as a zero balance and a
/// zero nonce. There is no eviction.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Ledger {
    /// The token owner. Set at most once.
    owner: Option<Address>,
    /// Account balances.
    balances: BTreeMap<Address, u64>,
    /// Account nonces.
    nonces: BTreeMap<Address, u64>,
    /// Reserved for allowances. No operation reads or writes it.
    approvals: BTreeMap<Address, u64>,
}

impl Ledger {
    /// Creates an empty [Ledger] with no owner.
    pub const fn new() -> Self {
        Self {
            owner: None,
            balances: BTreeMap::new(),
            nonces: BTreeMap::new(),
            approvals: BTreeMap::new(),
        }
    }

    /// Returns the owner, if set.
    pub const fn owner(&self) -> Option<Address> {
        self.owner
    }

    /// Returns the balance of `address`.
    pub fn balance(&self, address: &Address) -> u64 {
        self.balances.get(address).copied().unwrap_or_default()
    }

    /// Returns the nonce expected for the next transaction from `address`.
    pub fn nonce(&self, address: &Address) -> u64 {
        self.nonces.get(address).copied().unwrap_or_default()
    }

    /// Returns all recorded balances.
    pub const fn balances(&self) -> &BTreeMap<Address, u64> {
        &self.balances
    }

    /// Returns the reserved allowance map.
    pub const fn approvals(&self) -> &BTreeMap<Address, u64> {
        &self.approvals
    }

    /// Returns the sum of all balances.
    pub fn total_supply(&self) -> u64 {
        self.balances.values().sum()
    }

    /// Sets `owner` and credits it with `supply`.
    ///
    /// Fails with [LedgerError::OwnerAlreadySet] if an owner is on record.
    pub fn initialize(&mut self, owner: Address, supply: u64) -> LedgerResult<()> {
        if let Some(current) = self.owner {
            return Err(LedgerError::OwnerAlreadySet { current, requested: owner });
        }

        self.owner = Some(owner);
        self.balances.insert(owner, supply);
        Ok(())
    }

    /// Moves `amount` from `from` to `to`.
    ///
    /// The debit is applied before the credit is read, so a self-transfer leaves the balance
    /// unchanged. Fails with [LedgerError::InsufficientBalance], without mutation, if `from`
    /// holds less than `amount`.
    pub fn transfer(&mut self, from: Address, to: Address, amount: u64) -> LedgerResult<()> {
        let balance = self.balance(&from);
        if balance < amount {
            return Err(LedgerError::InsufficientBalance { from, balance, amount });
        }

        self.balances.insert(from, balance - amount);
        let credited = self.balance(&to) + amount;
        self.balances.insert(to, credited);
        Ok(())
    }

    /// Advances the nonce of `address` by one and returns the new value.
    pub fn increment_nonce(&mut self, address: Address) -> u64 {
        let nonce = self.nonces.entry(address).or_default();
        *nonce += 1;
        trace!(target: "ledger", "Advanced nonce of {address} to {nonce}");
        *nonce
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use alloy_primitives::address;

    const OWNER: Address = address!("1000000000000000000000000000000000000001");
    const ALICE: Address = address!("2000000000000000000000000000000000000002");

    fn initialized() -> Ledger {
        let mut ledger = Ledger::new();
        ledger.initialize(OWNER, 10_000).unwrap();
        ledger
    }

    #[test]
    fn test_unseen_accounts_default_to_zero() {
        let ledger = Ledger::new();
        assert_eq!(ledger.balance(&ALICE), 0);
        assert_eq!(ledger.nonce(&ALICE), 0);
        assert_eq!(ledger.owner(), None);
        assert_eq!(ledger.total_supply(), 0);
    }

    #[test]
    fn test_initialize_once() {
        let mut ledger = initialized();
        assert_eq!(ledger.owner(), Some(OWNER));
        assert_eq!(ledger.balance(&OWNER), 10_000);

        let before = ledger.clone();
        assert_eq!(
            ledger.initialize(ALICE, 10_000),
            Err(LedgerError::OwnerAlreadySet { current: OWNER, requested: ALICE })
        );
        assert_eq!(ledger, before);
    }

    #[test]
    fn test_transfer_moves_balance() {
        let mut ledger = initialized();
        ledger.transfer(OWNER, ALICE, 500).unwrap();
        assert_eq!(ledger.balance(&OWNER), 9_500);
        assert_eq!(ledger.balance(&ALICE), 500);
        assert_eq!(ledger.total_supply(), 10_000);
    }

    #[test]
    fn test_transfer_insufficient_balance_is_noop() {
        let mut ledger = initialized();
        let before = ledger.clone();
        assert_eq!(
            ledger.transfer(OWNER, ALICE, 20_000),
            Err(LedgerError::InsufficientBalance { from: OWNER, balance: 10_000, amount: 20_000 })
        );
        assert_eq!(ledger, before);
    }

    #[test]
    fn test_self_transfer_keeps_balance() {
        let mut ledger = initialized();
        ledger.transfer(OWNER, OWNER, 10_000).unwrap();
        assert_eq!(ledger.balance(&OWNER), 10_000);
        assert_eq!(ledger.total_supply(), 10_000);
    }

    #[test]
    fn test_transfer_from_empty_account() {
        let mut ledger = initialized();
        assert!(ledger.transfer(ALICE, OWNER, 1).is_err());
        ledger.transfer(ALICE, OWNER, 0).unwrap();
        assert_eq!(ledger.balance(&OWNER), 10_000);
    }

    #[test]
    fn test_increment_nonce() {
        let mut ledger = Ledger::new();
        assert_eq!(ledger.increment_nonce(ALICE), 1);
        assert_eq!(ledger.increment_nonce(ALICE), 2);
        assert_eq!(ledger.nonce(&ALICE), 2);
        assert_eq!(ledger.nonce(&OWNER), 0);
    }

    #[test]
    fn test_approvals_are_reserved() {
        let mut ledger = initialized();
        ledger.transfer(OWNER, ALICE, 1).unwrap();
        assert!(ledger.approvals().is_empty());
    }
}
