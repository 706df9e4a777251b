//! Errors for the transaction envelope codec.

use thiserror::Error;

/// A [Result] type for the [EnvelopeError].
pub type EnvelopeResult<T> = Result<T, EnvelopeError>;

/// An error decoding, signing or recovering a transaction envelope.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvelopeError {
    /// The payload is empty.
    #[error("Empty transaction payload")]
    Empty,
    /// The payload does not start with the dynamic-fee type byte.
    #[error("Unsupported transaction type: {0}")]
    UnsupportedType(u8),
    /// The payload is not valid RLP for the envelope layout.
    #[error("RLP error: {0}")]
    Rlp(alloy_rlp::Error),
    /// Bytes remain after the envelope.
    #[error("Unexpected {0} trailing bytes after the envelope")]
    TrailingBytes(usize),
    /// The signature is malformed or does not recover to a public key.
    #[error("Invalid signature")]
    InvalidSignature,
}

impl From<alloy_rlp::Error> for EnvelopeError {
    fn from(err: alloy_rlp::Error) -> Self {
        Self::Rlp(err)
    }
}
