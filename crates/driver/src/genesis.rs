//! Contains the construction of the genesis transaction.

use alloy_primitives::{Address, U256};
use rollup_executor::{sign_transaction, Operation};
use rollup_primitives::{RawTransaction, SigningKey};

use crate::{DriverError, DriverResult};

/// The nonce carried by the genesis transaction.
pub const GENESIS_NONCE: u64 = 0;

/// Builds the genesis transaction: `init(owner)`, signed by `key` for the rollup with
/// `chain_id`.
///
/// `key` does not have to belong to `owner`; the signer only authorizes genesis.
pub fn genesis_transaction(
    key: &SigningKey,
    chain_id: U256,
    owner: Address,
) -> DriverResult<RawTransaction> {
    let input = Operation::Init { owner }.encode();
    sign_transaction(key, chain_id, GENESIS_NONCE, input).map_err(DriverError::GenesisSigning)
}

#[cfg(test)]
mod test {
    use super::*;
    use rollup_executor::{
        test_utils::{key, ROLLUP_CHAIN_ID},
        TxAuthenticator,
    };
    use rollup_primitives::{signer_address, INIT_SELECTOR};

    #[test]
    fn test_genesis_transaction_is_init_at_nonce_zero() {
        let owner = key(1);
        let raw = genesis_transaction(&owner, ROLLUP_CHAIN_ID, signer_address(&owner)).unwrap();

        let tx = TxAuthenticator::new(ROLLUP_CHAIN_ID).authenticate(raw.as_ref()).unwrap();
        assert_eq!(tx.sender, signer_address(&owner));
        assert_eq!(tx.nonce, GENESIS_NONCE);
        assert_eq!(tx.selector, INIT_SELECTOR);
        assert_eq!(&tx.args[12..32], signer_address(&owner).as_slice());
    }
}
