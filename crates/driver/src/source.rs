//! Contains the [BlockSource] seam between the block producer and the pipeline.

use alloc::boxed::Box;
use async_trait::async_trait;
use rollup_primitives::Block;

/// A source of blocks, delivered in the order the sequencer fixed.
#[async_trait]
pub trait BlockSource {
    /// Waits for the next block. Returns `None` once the source is closed and drained.
    async fn next_block(&mut self) -> Option<Block>;
}

#[cfg(feature = "std")]
pub use queue::{block_queue, BlockFeed, BlockQueue, DEFAULT_QUEUE_CAPACITY};

#[cfg(feature = "std")]
mod queue {
    use super::*;
    use crate::{DriverError, DriverResult};
    use tokio::sync::mpsc;

    /// The default number of blocks buffered between producers and the pipeline.
    pub const DEFAULT_QUEUE_CAPACITY: usize = 20;

    /// Creates a bounded block queue holding at most `capacity` undelivered blocks.
    ///
    /// # Panics
    /// Panics if `capacity` is zero.
    pub fn block_queue(capacity: usize) -> (BlockFeed, BlockQueue) {
        let (tx, rx) = mpsc::channel(capacity);
        (BlockFeed { tx }, BlockQueue { rx })
    }

    /// The producing half of a block queue.
    #[derive(Debug, Clone)]
    pub struct BlockFeed {
        tx: mpsc::Sender<Block>,
    }

    impl BlockFeed {
        /// Submits `block`, waiting while the queue is full.
        pub async fn submit(&self, block: Block) -> DriverResult<()> {
            let height = block.height;
            self.tx.send(block).await.map_err(|_| DriverError::FeedClosed(height))
        }

        /// Returns the number of blocks that can be submitted without waiting.
        pub fn free_capacity(&self) -> usize {
            self.tx.capacity()
        }
    }

    /// The consuming half of a block queue. Closes once every [BlockFeed] is dropped and the
    /// buffered blocks are drained.
    #[derive(Debug)]
    pub struct BlockQueue {
        rx: mpsc::Receiver<Block>,
    }

    #[async_trait]
    impl BlockSource for BlockQueue {
        async fn next_block(&mut self) -> Option<Block> {
            self.rx.recv().await
        }
    }

    #[cfg(test)]
    mod test {
        use super::*;

        #[tokio::test]
        async fn test_queue_preserves_order_and_closes() {
            let (feed, mut queue) = block_queue(4);
            for height in 1..=3 {
                feed.submit(Block::empty(height)).await.unwrap();
            }
            drop(feed);

            let mut heights = Vec::new();
            while let Some(block) = queue.next_block().await {
                heights.push(block.height);
            }
            assert_eq!(heights, [1, 2, 3]);
        }

        #[tokio::test]
        async fn test_full_queue_applies_back_pressure() {
            let (feed, mut queue) = block_queue(1);
            feed.submit(Block::empty(1)).await.unwrap();
            assert_eq!(feed.free_capacity(), 0);

            let producer = tokio::spawn({
                let feed = feed.clone();
                async move { feed.submit(Block::empty(2)).await }
            });
            tokio::task::yield_now().await;
            assert!(!producer.is_finished());

            assert_eq!(queue.next_block().await.map(|b| b.height), Some(1));
            producer.await.unwrap().unwrap();
            assert_eq!(queue.next_block().await.map(|b| b.height), Some(2));
        }

        #[tokio::test]
        async fn test_submit_after_close_fails() {
            let (feed, queue) = block_queue(1);
            drop(queue);
            assert_eq!(feed.submit(Block::empty(9)).await, Err(DriverError::FeedClosed(9)));
        }
    }
}
