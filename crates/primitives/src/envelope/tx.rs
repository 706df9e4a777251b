//! Contains the unsigned [TxDynamicFee] transaction.

use alloc::vec::Vec;
use alloy_eips::eip2930::AccessList;
use alloy_primitives::{keccak256, Address, Bytes, B256, U256};
use alloy_rlp::{BufMut, Decodable, Encodable, Header};

use super::{SignedTransaction, TxSignature};

/// The EIP-2718 type byte of the dynamic-fee envelope.
pub const DYNAMIC_FEE_TX_TYPE: u8 = 0x02;

/// An unsigned dynamic-fee transaction with a 256-bit chain id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct TxDynamicFee {
    /// The chain id the transaction commits to.
    pub chain_id: U256,
    /// The sender's nonce.
    pub nonce: u64,
    /// Priority fee. Not metered by the rollup.
    pub max_priority_fee_per_gas: u128,
    /// Fee cap. Not metered by the rollup.
    pub max_fee_per_gas: u128,
    /// Gas limit. Not metered by the rollup.
    pub gas_limit: u64,
    /// The call target. The whole rollup acts as a single contract, so this is conventionally
    /// the zero address.
    pub to: Address,
    /// Native value. Never transferred by the rollup.
    pub value: U256,
    /// The operation payload: selector followed by argument slots.
    pub input: Bytes,
    /// Access list. Unused by the rollup.
    pub access_list: AccessList,
}

impl TxDynamicFee {
    /// Creates a transaction calling the rollup with the given payload. Every field the rollup
    /// does not interpret is zeroed.
    pub fn new(chain_id: U256, nonce: u64, input: Bytes) -> Self {
        Self { chain_id, nonce, input, ..Default::default() }
    }

    /// Returns the hash signed by the sender: `keccak256(0x02 || rlp(fields))`.
    pub fn signature_hash(&self) -> B256 {
        let header = Header { list: true, payload_length: self.fields_len() };
        let mut buf = Vec::with_capacity(1 + header.length() + header.payload_length);
        buf.put_u8(DYNAMIC_FEE_TX_TYPE);
        header.encode(&mut buf);
        self.encode_fields(&mut buf);
        keccak256(&buf)
    }

    /// Attaches a signature to the transaction.
    pub const fn into_signed(self, signature: TxSignature) -> SignedTransaction {
        SignedTransaction { tx: self, signature }
    }

    /// Returns the encoded length of the unsigned fields.
    pub(crate) fn fields_len(&self) -> usize {
        self.chain_id.length() +
            self.nonce.length() +
            self.max_priority_fee_per_gas.length() +
            self.max_fee_per_gas.length() +
            self.gas_limit.length() +
            self.to.length() +
            self.value.length() +
            self.input.length() +
            self.access_list.length()
    }

    /// Encodes the unsigned fields without a list header.
    pub(crate) fn encode_fields(&self, out: &mut dyn BufMut) {
        self.chain_id.encode(out);
        self.nonce.encode(out);
        self.max_priority_fee_per_gas.encode(out);
        self.max_fee_per_gas.encode(out);
        self.gas_limit.encode(out);
        self.to.encode(out);
        self.value.encode(out);
        self.input.encode(out);
        self.access_list.encode(out);
    }

    /// Decodes the unsigned fields from the body of a list.
    pub(crate) fn decode_fields(buf: &mut &[u8]) -> alloy_rlp::Result<Self> {
        Ok(Self {
            chain_id: Decodable::decode(buf)?,
            nonce: Decodable::decode(buf)?,
            max_priority_fee_per_gas: Decodable::decode(buf)?,
            max_fee_per_gas: Decodable::decode(buf)?,
            gas_limit: Decodable::decode(buf)?,
            to: Decodable::decode(buf)?,
            value: Decodable::decode(buf)?,
            input: Decodable::decode(buf)?,
            access_list: Decodable::decode(buf)?,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use alloy_primitives::bytes;

    #[test]
    fn test_new_zeroes_unused_fields() {
        let tx = TxDynamicFee::new(U256::from(7), 3, bytes!("33b42f4f"));
        assert_eq!(tx.to, Address::ZERO);
        assert_eq!(tx.value, U256::ZERO);
        assert_eq!(tx.gas_limit, 0);
        assert!(tx.access_list.0.is_empty());
    }

    #[test]
    fn test_signature_hash_commits_to_chain_id_and_nonce() {
        let tx = TxDynamicFee::new(U256::from(7), 3, bytes!("00"));
        let other_chain = TxDynamicFee { chain_id: U256::from(8), ..tx.clone() };
        let other_nonce = TxDynamicFee { nonce: 4, ..tx.clone() };
        assert_ne!(tx.signature_hash(), other_chain.signature_hash());
        assert_ne!(tx.signature_hash(), other_nonce.signature_hash());
        assert_eq!(tx.signature_hash(), tx.clone().signature_hash());
    }
}
