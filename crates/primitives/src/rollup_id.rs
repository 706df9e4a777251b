//! Contains the [RollupId] type.

use alloy_primitives::{B256, U256};
use sha2::{Digest, Sha256};

/// The 256-bit identifier of a rollup, derived by hashing the rollup's name.
///
/// The identifier doubles as the chain id that every transaction targeting the rollup must
/// commit to, which keeps signed transactions from being replayed across rollups.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct RollupId(pub B256);

impl RollupId {
    /// Derives the [RollupId] from the rollup's name as `sha256(name)`.
    pub fn from_name(name: &str) -> Self {
        Self(B256::from_slice(&Sha256::digest(name.as_bytes())))
    }

    /// Returns the chain id of the rollup: the identifier read as a big-endian integer.
    pub fn chain_id(&self) -> U256 {
        U256::from_be_bytes(self.0 .0)
    }
}

impl From<B256> for RollupId {
    fn from(id: B256) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for RollupId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use alloy_primitives::b256;

    #[test]
    fn test_rollup_id_is_sha256_of_name() {
        let id = RollupId::from_name("astria");
        assert_eq!(
            id.0,
            b256!("5bb944ec2fd3ae9c22f68ce78c74b3206199ebf832b18506487ff39548774f91")
        );
    }

    #[test]
    fn test_chain_id_is_big_endian_id() {
        let id = RollupId::from_name("astria");
        let chain_id = id.chain_id();
        assert_eq!(chain_id.to_be_bytes::<32>(), id.0 .0);
        assert!(chain_id > U256::from(u64::MAX));
    }

    #[test]
    fn test_distinct_names_distinct_chains() {
        assert_ne!(RollupId::from_name("a").chain_id(), RollupId::from_name("b").chain_id());
    }
}
