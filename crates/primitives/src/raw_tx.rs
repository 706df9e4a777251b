//! Contains the [RawTransaction] type.

use alloy_primitives::Bytes;
use alloy_rlp::{Decodable, Encodable};

/// An opaque transaction payload as carried by a sequenced block.
///
/// The bytes are expected to hold a signed transaction envelope, but nothing is validated until
/// the payload reaches the authenticator.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Default, Clone, Hash, PartialEq, Eq)]
pub struct RawTransaction(pub Bytes);

impl RawTransaction {
    /// Returns if the transaction is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the length of the payload in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns the EIP-2718 type byte of the payload, if any.
    pub fn ty(&self) -> Option<u8> {
        self.0.first().copied()
    }
}

impl<T: Into<Bytes>> From<T> for RawTransaction {
    fn from(bytes: T) -> Self {
        Self(bytes.into())
    }
}

impl Encodable for RawTransaction {
    fn encode(&self, out: &mut dyn alloy_rlp::BufMut) {
        self.0.encode(out)
    }

    fn length(&self) -> usize {
        self.0.length()
    }
}

impl Decodable for RawTransaction {
    /// Decodes RLP encoded bytes into [RawTransaction] bytes
    fn decode(buf: &mut &[u8]) -> alloy_rlp::Result<Self> {
        let tx_bytes = Bytes::decode(buf)?;
        Ok(Self(tx_bytes))
    }
}

impl AsRef<[u8]> for RawTransaction {
    fn as_ref(&self) -> &[u8] {
        self.0.as_ref()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use alloy_primitives::bytes;

    #[test]
    fn test_raw_transaction_type_byte() {
        let tx = RawTransaction::from(bytes!("02f8"));
        assert_eq!(tx.ty(), Some(0x02));
        assert_eq!(tx.len(), 2);
        assert!(RawTransaction::default().ty().is_none());
        assert!(RawTransaction::default().is_empty());
    }

    #[test]
    fn test_raw_transaction_rlp_wraps_bytes() {
        let tx = RawTransaction::from(bytes!("deadbeef"));
        let encoded = alloy_rlp::encode(&tx);
        assert_eq!(encoded, alloy_rlp::encode(&tx.0));
        assert_eq!(RawTransaction::decode(&mut encoded.as_slice()).unwrap(), tx);
    }
}
