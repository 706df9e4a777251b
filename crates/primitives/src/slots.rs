//! Fixed-width argument slots following the selector of an operation payload.
//!
//! Every argument occupies one 32-byte slot. Addresses are right-aligned in their slot and
//! integers are big-endian.

use alloy_primitives::Address;

/// The width of an argument slot in bytes.
pub const SLOT_WIDTH: usize = 32;

/// Offset of a 20-byte address within its slot.
const ADDRESS_OFFSET: usize = SLOT_WIDTH - 20;

/// Offset of the low 8 bytes of a `u64` within its slot.
const U64_OFFSET: usize = SLOT_WIDTH - core::mem::size_of::<u64>();

/// Reads the address held in the low 20 bytes of `slot`.
///
/// Returns [None] if `slot` is shorter than [SLOT_WIDTH]. The high 12 bytes are ignored.
pub fn read_address(slot: &[u8]) -> Option<Address> {
    let slot = slot.get(..SLOT_WIDTH)?;
    Some(Address::from_slice(&slot[ADDRESS_OFFSET..]))
}

/// Reads the big-endian integer held in the low 8 bytes of `slot`.
///
/// Returns [None] if `slot` is shorter than [SLOT_WIDTH]. Non-zero high-order bytes are not
/// rejected: a slot holding a value wider than 64 bits is silently truncated.
pub fn read_u64(slot: &[u8]) -> Option<u64> {
    let slot = slot.get(..SLOT_WIDTH)?;
    let mut low = [0u8; 8];
    low.copy_from_slice(&slot[U64_OFFSET..]);
    Some(u64::from_be_bytes(low))
}

/// Writes `address` as a right-aligned slot.
pub fn write_address(address: &Address) -> [u8; SLOT_WIDTH] {
    let mut slot = [0u8; SLOT_WIDTH];
    slot[ADDRESS_OFFSET..].copy_from_slice(address.as_slice());
    slot
}

/// Writes `value` as a big-endian slot.
pub fn write_u64(value: u64) -> [u8; SLOT_WIDTH] {
    let mut slot = [0u8; SLOT_WIDTH];
    slot[U64_OFFSET..].copy_from_slice(&value.to_be_bytes());
    slot
}

#[cfg(test)]
mod test {
    use super::*;
    use alloy_primitives::address;
    use proptest::{prelude::any, proptest};

    #[test]
    fn test_address_is_right_aligned() {
        let addr = address!("00000000000000000000000000000000000000ff");
        let slot = write_address(&addr);
        assert_eq!(slot[31], 0xff);
        assert!(slot[..31].iter().all(|b| *b == 0));
    }

    #[test]
    fn test_short_slot_is_rejected() {
        assert!(read_address(&[0u8; 31]).is_none());
        assert!(read_u64(&[0u8; 31]).is_none());
    }

    #[test]
    fn test_u64_high_bytes_are_truncated() {
        let mut slot = write_u64(500);
        slot[0] = 0xff;
        slot[23] = 0x01;
        assert_eq!(read_u64(&slot), Some(500));
    }

    #[test]
    fn test_address_high_bytes_are_ignored() {
        let addr = address!("1111111111111111111111111111111111111111");
        let mut slot = write_address(&addr);
        slot[0] = 0xaa;
        assert_eq!(read_address(&slot), Some(addr));
    }

    proptest! {
        #[test]
        fn test_u64_reads_only_low_bytes(value in any::<u64>(), high in any::<[u8; 24]>()) {
            let mut slot = write_u64(value);
            slot[..24].copy_from_slice(&high);
            assert_eq!(read_u64(&slot), Some(value));
        }
    }
}
