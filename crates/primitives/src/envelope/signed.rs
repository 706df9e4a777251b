//! Contains the [SignedTransaction] envelope.

use alloc::vec::Vec;
use alloy_primitives::{keccak256, Address, Bytes, U256};
use alloy_rlp::{BufMut, Decodable, Encodable, Header};
use k256::ecdsa::{RecoveryId, Signature, SigningKey, VerifyingKey};

use super::{EnvelopeError, EnvelopeResult, TxDynamicFee, DYNAMIC_FEE_TX_TYPE};

/// A recoverable secp256k1 signature over a [TxDynamicFee] signature hash.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TxSignature {
    /// Parity of the `y` coordinate of the signature's curve point.
    pub y_parity: bool,
    /// The `r` scalar.
    pub r: U256,
    /// The `s` scalar.
    pub s: U256,
}

impl TxSignature {
    fn fields_len(&self) -> usize {
        self.y_parity.length() + self.r.length() + self.s.length()
    }

    fn encode_fields(&self, out: &mut dyn BufMut) {
        self.y_parity.encode(out);
        self.r.encode(out);
        self.s.encode(out);
    }

    fn decode_fields(buf: &mut &[u8]) -> alloy_rlp::Result<Self> {
        Ok(Self {
            y_parity: Decodable::decode(buf)?,
            r: Decodable::decode(buf)?,
            s: Decodable::decode(buf)?,
        })
    }

    fn to_k256(self) -> EnvelopeResult<(Signature, RecoveryId)> {
        let mut bytes = [0u8; 64];
        bytes[..32].copy_from_slice(&self.r.to_be_bytes::<32>());
        bytes[32..].copy_from_slice(&self.s.to_be_bytes::<32>());
        let signature =
            Signature::from_slice(&bytes).map_err(|_| EnvelopeError::InvalidSignature)?;
        Ok((signature, RecoveryId::new(self.y_parity, false)))
    }
}

/// A [TxDynamicFee] together with its signature.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SignedTransaction {
    /// The signed transaction.
    pub tx: TxDynamicFee,
    /// The sender's signature over [TxDynamicFee::signature_hash].
    pub signature: TxSignature,
}

impl SignedTransaction {
    /// Signs `tx` with `key`.
    pub fn sign(tx: TxDynamicFee, key: &SigningKey) -> EnvelopeResult<Self> {
        let hash = tx.signature_hash();
        let (signature, recovery_id) = key
            .sign_prehash_recoverable(hash.as_slice())
            .map_err(|_| EnvelopeError::InvalidSignature)?;
        let signature = TxSignature {
            y_parity: recovery_id.is_y_odd(),
            r: U256::from_be_slice(&signature.r().to_bytes()),
            s: U256::from_be_slice(&signature.s().to_bytes()),
        };
        Ok(tx.into_signed(signature))
    }

    /// Recovers the address that produced the signature.
    pub fn recover_sender(&self) -> EnvelopeResult<Address> {
        let (signature, recovery_id) = self.signature.to_k256()?;
        let hash = self.tx.signature_hash();
        let key = VerifyingKey::recover_from_prehash(hash.as_slice(), &signature, recovery_id)
            .map_err(|_| EnvelopeError::InvalidSignature)?;
        Ok(address_of(&key))
    }

    /// Returns the length of the EIP-2718 encoding.
    pub fn encode_2718_len(&self) -> usize {
        let header = self.rlp_header();
        1 + header.length() + header.payload_length
    }

    /// Encodes the envelope as `0x02 || rlp(fields ++ signature)`.
    pub fn encode_2718(&self, out: &mut dyn BufMut) {
        out.put_u8(DYNAMIC_FEE_TX_TYPE);
        self.rlp_header().encode(out);
        self.tx.encode_fields(out);
        self.signature.encode_fields(out);
    }

    /// Returns the EIP-2718 encoding as [Bytes].
    pub fn encoded_2718(&self) -> Bytes {
        let mut out = Vec::with_capacity(self.encode_2718_len());
        self.encode_2718(&mut out);
        out.into()
    }

    /// Decodes an envelope from the front of `buf`, advancing it past the envelope.
    pub fn decode_2718(buf: &mut &[u8]) -> EnvelopeResult<Self> {
        let (ty, rest) = buf.split_first().ok_or(EnvelopeError::Empty)?;
        if *ty != DYNAMIC_FEE_TX_TYPE {
            return Err(EnvelopeError::UnsupportedType(*ty));
        }
        *buf = rest;

        let header = Header::decode(buf)?;
        if !header.list {
            return Err(alloy_rlp::Error::UnexpectedString.into());
        }
        if buf.len() < header.payload_length {
            return Err(alloy_rlp::Error::InputTooShort.into());
        }

        let (mut body, rest) = buf.split_at(header.payload_length);
        let tx = TxDynamicFee::decode_fields(&mut body)?;
        let signature = TxSignature::decode_fields(&mut body)?;
        if !body.is_empty() {
            return Err(alloy_rlp::Error::ListLengthMismatch {
                expected: header.payload_length,
                got: header.payload_length - body.len(),
            }
            .into());
        }
        *buf = rest;

        Ok(Self { tx, signature })
    }

    /// Decodes an envelope that must span the whole of `bytes`.
    pub fn decode(bytes: &[u8]) -> EnvelopeResult<Self> {
        let mut buf = bytes;
        let signed = Self::decode_2718(&mut buf)?;
        if !buf.is_empty() {
            return Err(EnvelopeError::TrailingBytes(buf.len()));
        }
        Ok(signed)
    }

    fn rlp_header(&self) -> Header {
        Header { list: true, payload_length: self.tx.fields_len() + self.signature.fields_len() }
    }
}

/// Returns the address controlled by a signing key.
pub fn signer_address(key: &SigningKey) -> Address {
    address_of(key.verifying_key())
}

/// Derives the address of a public key: the low 20 bytes of the keccak256 hash of the
/// uncompressed point without its prefix byte.
fn address_of(key: &VerifyingKey) -> Address {
    let point = key.to_encoded_point(false);
    let hash = keccak256(&point.as_bytes()[1..]);
    Address::from_slice(&hash[12..])
}

#[cfg(test)]
mod test {
    use super::*;
    use alloy_primitives::{address, bytes, hex};
    use proptest::{collection::vec, prelude::any, proptest};

    // Well-known development key #0; its address is fixed.
    const DEV_KEY: [u8; 32] =
        hex!("ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80");

    fn dev_key() -> SigningKey {
        SigningKey::from_slice(&DEV_KEY).unwrap()
    }

    fn signed(chain_id: u64, nonce: u64, input: Bytes) -> SignedTransaction {
        SignedTransaction::sign(TxDynamicFee::new(U256::from(chain_id), nonce, input), &dev_key())
            .unwrap()
    }

    #[test]
    fn test_recover_known_address() {
        let tx = signed(1, 0, bytes!("33b42f4f"));
        assert_eq!(
            tx.recover_sender().unwrap(),
            address!("f39Fd6e51aad88F6F4ce6aB8827279cffFb92266")
        );
    }

    #[test]
    fn test_signer_address_matches_recovery() {
        let tx = signed(1, 0, bytes!("00"));
        assert_eq!(signer_address(&dev_key()), tx.recover_sender().unwrap());
    }

    #[test]
    fn test_encoding_starts_with_type_byte() {
        let encoded = signed(1, 0, bytes!("00")).encoded_2718();
        assert_eq!(encoded[0], DYNAMIC_FEE_TX_TYPE);
        assert_eq!(encoded.len(), signed(1, 0, bytes!("00")).encode_2718_len());
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert_eq!(SignedTransaction::decode(&[]), Err(EnvelopeError::Empty));
        assert_eq!(SignedTransaction::decode(&[0x01, 0xc0]), Err(EnvelopeError::UnsupportedType(1)));
        assert!(matches!(SignedTransaction::decode(&[0x02, 0x80]), Err(EnvelopeError::Rlp(_))));
        assert!(matches!(SignedTransaction::decode(&[0x02, 0xc0]), Err(EnvelopeError::Rlp(_))));
    }

    #[test]
    fn test_decode_rejects_trailing_bytes() {
        let mut encoded = signed(1, 0, bytes!("00")).encoded_2718().to_vec();
        encoded.push(0x00);
        assert_eq!(SignedTransaction::decode(&encoded), Err(EnvelopeError::TrailingBytes(1)));
    }

    #[test]
    fn test_decode_rejects_truncated_envelope() {
        let encoded = signed(1, 0, bytes!("0011")).encoded_2718();
        let truncated = &encoded[..encoded.len() - 1];
        assert!(matches!(SignedTransaction::decode(truncated), Err(EnvelopeError::Rlp(_))));
    }

    #[test]
    fn test_wide_chain_id_survives_decode() {
        let chain_id = U256::MAX - U256::from(1);
        let tx = SignedTransaction::sign(TxDynamicFee::new(chain_id, 9, bytes!("ff")), &dev_key())
            .unwrap();
        let decoded = SignedTransaction::decode(&tx.encoded_2718()).unwrap();
        assert_eq!(decoded.tx.chain_id, chain_id);
        assert_eq!(decoded.tx.nonce, 9);
    }

    #[test]
    fn test_tampered_payload_changes_sender() {
        let mut tx = signed(1, 0, bytes!("33b42f4f"));
        let sender = tx.recover_sender().unwrap();
        tx.tx.input = bytes!("5d359fbd");
        match tx.recover_sender() {
            Ok(recovered) => assert_ne!(recovered, sender),
            Err(e) => assert_eq!(e, EnvelopeError::InvalidSignature),
        }
    }

    #[test]
    fn test_zero_signature_is_invalid() {
        let mut tx = signed(1, 0, bytes!("00"));
        tx.signature = TxSignature::default();
        assert_eq!(tx.recover_sender(), Err(EnvelopeError::InvalidSignature));
    }

    proptest! {
        #[test]
        fn test_encode_decode_is_identity(nonce in any::<u64>(), input in vec(any::<u8>(), 0..256)) {
            let tx = signed(5, nonce, input.into());
            let encoded = tx.encoded_2718();
            let decoded = SignedTransaction::decode(&encoded).unwrap();
            assert_eq!(decoded.encoded_2718(), encoded);
            assert_eq!(decoded, tx);
        }
    }
}
