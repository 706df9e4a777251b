//! This module contains the [BlockStore] trait and an in-memory implementation of it.

use alloc::{collections::BTreeMap, sync::Arc};
use core::fmt::Debug;
use rollup_primitives::Block;
use spin::RwLock;

use crate::BlockStoreError;

/// A [BlockStore] shared between the block-applying writer and readers.
pub type SharedBlockStore = Arc<RwLock<dyn BlockStore + Send + Sync>>;

/// Describes the interface of a simple, synchronous store of applied blocks keyed by height.
pub trait BlockStore: Debug {
    /// Get the block at `height`.
    fn get_block(&self, height: u32) -> Result<Block, BlockStoreError>;

    /// Record a block, replacing any block previously stored at its height.
    fn insert_block(&mut self, block: Block);

    /// Returns the greatest stored height, if any block is stored.
    fn latest_height(&self) -> Option<u32>;
}

/// A simple, synchronous block store that keeps every block in memory.
#[derive(Default, Clone, Debug, Eq, PartialEq)]
pub struct MemoryBlockStore {
    blocks: BTreeMap<u32, Block>,
}

impl MemoryBlockStore {
    /// Create a new [MemoryBlockStore] with an empty store.
    pub const fn new() -> Self {
        Self { blocks: BTreeMap::new() }
    }

    /// Wraps the store into a [SharedBlockStore].
    pub fn shared(self) -> SharedBlockStore {
        Arc::new(RwLock::new(self))
    }

    /// Returns the number of stored blocks.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Returns `true` if no block is stored.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

impl BlockStore for MemoryBlockStore {
    fn get_block(&self, height: u32) -> Result<Block, BlockStoreError> {
        self.blocks.get(&height).cloned().ok_or(BlockStoreError::NotFound(height))
    }

    fn insert_block(&mut self, block: Block) {
        self.blocks.insert(block.height, block);
    }

    fn latest_height(&self) -> Option<u32> {
        self.blocks.last_key_value().map(|(height, _)| *height)
    }
}
