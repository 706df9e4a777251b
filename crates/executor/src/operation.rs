//! Contains the closed set of ledger [Operation]s and their payload codec.

use alloc::vec::Vec;
use alloy_primitives::{Address, Bytes, Selector};
use rollup_primitives::{
    read_address, read_u64, write_address, write_u64, INIT_SELECTOR, SELECTOR_WIDTH, SLOT_WIDTH,
    TRANSFER_SELECTOR,
};

use crate::{ExecutionError, ExecutionResult};

/// The kind of an [Operation], identified on the wire by its selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    /// `initErc20(address)`
    Init,
    /// `transfer(address,uint64)`
    Transfer,
}

impl OperationKind {
    /// Every known operation kind.
    pub const ALL: [Self; 2] = [Self::Init, Self::Transfer];

    /// Looks up the operation kind for `selector`.
    pub fn from_selector(selector: Selector) -> ExecutionResult<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.selector() == selector)
            .ok_or(ExecutionError::UnknownSelector(selector))
    }

    /// Returns the 4-byte selector.
    pub const fn selector(&self) -> Selector {
        match self {
            Self::Init => INIT_SELECTOR,
            Self::Transfer => TRANSFER_SELECTOR,
        }
    }

    /// Returns the number of 32-byte argument slots.
    pub const fn slots(&self) -> usize {
        match self {
            Self::Init => 1,
            Self::Transfer => 2,
        }
    }

    /// Returns the minimum payload length, selector included.
    pub const fn min_payload_len(&self) -> usize {
        SELECTOR_WIDTH + self.slots() * SLOT_WIDTH
    }

    /// Returns the operation's name.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Init => "init",
            Self::Transfer => "transfer",
        }
    }
}

/// A decoded ledger operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Sets the owner and credits it with the genesis supply.
    Init {
        /// The owner to set.
        owner: Address,
    },
    /// Moves tokens from the sender to `to`.
    Transfer {
        /// The credited account.
        to: Address,
        /// The amount moved.
        amount: u64,
    },
}

impl Operation {
    /// Decodes the operation selected by `selector` from its argument slots.
    ///
    /// Bytes past the operation's last slot are ignored. Fails with
    /// [ExecutionError::UnknownSelector] or, when `args` is too short for the selected
    /// operation, [ExecutionError::MalformedPayload].
    pub fn decode(selector: Selector, args: &[u8]) -> ExecutionResult<Self> {
        let kind = OperationKind::from_selector(selector)?;
        let malformed = || ExecutionError::MalformedPayload {
            len: SELECTOR_WIDTH + args.len(),
            min: kind.min_payload_len(),
        };
        if args.len() < kind.slots() * SLOT_WIDTH {
            return Err(malformed());
        }

        let slot = |i: usize| &args[i * SLOT_WIDTH..(i + 1) * SLOT_WIDTH];
        match kind {
            OperationKind::Init => {
                let owner = read_address(slot(0)).ok_or_else(malformed)?;
                Ok(Self::Init { owner })
            }
            OperationKind::Transfer => {
                let to = read_address(slot(0)).ok_or_else(malformed)?;
                let amount = read_u64(slot(1)).ok_or_else(malformed)?;
                Ok(Self::Transfer { to, amount })
            }
        }
    }

    /// Returns the operation's kind.
    pub const fn kind(&self) -> OperationKind {
        match self {
            Self::Init { .. } => OperationKind::Init,
            Self::Transfer { .. } => OperationKind::Transfer,
        }
    }

    /// Encodes the operation as its selector followed by its argument slots.
    pub fn encode(&self) -> Bytes {
        let kind = self.kind();
        let mut out = Vec::with_capacity(kind.min_payload_len());
        out.extend_from_slice(kind.selector().as_slice());
        match self {
            Self::Init { owner } => out.extend_from_slice(&write_address(owner)),
            Self::Transfer { to, amount } => {
                out.extend_from_slice(&write_address(to));
                out.extend_from_slice(&write_u64(*amount));
            }
        }
        out.into()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use alloy_primitives::{address, hex};

    const BOB: Address = address!("3000000000000000000000000000000000000003");

    #[test]
    fn test_init_wire_layout() {
        let payload = Operation::Init { owner: BOB }.encode();
        assert_eq!(payload.len(), 36);
        assert_eq!(&payload[..4], hex!("33b42f4f"));
        assert_eq!(&payload[4..16], [0u8; 12]);
        assert_eq!(&payload[16..36], BOB.as_slice());
    }

    #[test]
    fn test_transfer_wire_layout() {
        let payload = Operation::Transfer { to: BOB, amount: 0x0102 }.encode();
        assert_eq!(payload.len(), 68);
        assert_eq!(&payload[..4], hex!("5d359fbd"));
        assert_eq!(&payload[16..36], BOB.as_slice());
        assert_eq!(&payload[60..68], 0x0102u64.to_be_bytes());
    }

    #[test]
    fn test_decode_ignores_amount_high_bytes() {
        let mut payload = Operation::Transfer { to: BOB, amount: 7 }.encode().to_vec();
        payload[36] = 0xff;
        let op = Operation::decode(TRANSFER_SELECTOR, &payload[4..]).unwrap();
        assert_eq!(op, Operation::Transfer { to: BOB, amount: 7 });
    }

    #[test]
    fn test_decode_ignores_trailing_bytes() {
        let mut payload = Operation::Init { owner: BOB }.encode().to_vec();
        payload.extend_from_slice(&[0xaa; 5]);
        let op = Operation::decode(INIT_SELECTOR, &payload[4..]).unwrap();
        assert_eq!(op, Operation::Init { owner: BOB });
    }

    #[test]
    fn test_short_transfer_is_malformed() {
        let payload = Operation::Init { owner: BOB }.encode();
        let err = Operation::decode(TRANSFER_SELECTOR, &payload[4..]).unwrap_err();
        assert_eq!(err, ExecutionError::MalformedPayload { len: 36, min: 68 });
    }

    #[test]
    fn test_unknown_selector() {
        let selector = Selector::from([0xde, 0xad, 0xbe, 0xef]);
        let err = Operation::decode(selector, &[0u8; 64]).unwrap_err();
        assert_eq!(err, ExecutionError::UnknownSelector(selector));
    }
}
