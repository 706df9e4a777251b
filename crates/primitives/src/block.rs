//! This module contains the [Block] type delivered by the sequencer.

use crate::RawTransaction;
use alloc::vec::Vec;
use alloy_rlp::{RlpDecodable, RlpEncodable};

/// A sequenced rollup block.
///
/// Blocks are totally ordered by the sequencing layer. The height is strictly monotonic across
/// the feed, and the transactions must be applied in the order they appear.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Default, RlpEncodable, RlpDecodable)]
pub struct Block {
    /// The height of the block.
    pub height: u32,
    /// The opaque transaction payloads, in sequencing order.
    pub transactions: Vec<RawTransaction>,
}

impl Block {
    /// Creates a new [Block].
    pub const fn new(height: u32, transactions: Vec<RawTransaction>) -> Self {
        Self { height, transactions }
    }

    /// Creates a [Block] without any transactions.
    pub const fn empty(height: u32) -> Self {
        Self { height, transactions: Vec::new() }
    }

    /// Returns `true` if the block carries no transactions.
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Returns the number of transactions in the block.
    pub fn len(&self) -> usize {
        self.transactions.len()
    }
}
