//! A development block producer that replays blocks from a JSON file through the block feed.

use anyhow::{anyhow, Result};
use rollup_driver::BlockFeed;
use rollup_primitives::Block;
use std::path::Path;
use tracing::{debug, info};

/// Reads a JSON array of blocks from `path`.
pub fn load_blocks(path: &Path) -> Result<Vec<Block>> {
    let ser_blocks = std::fs::read_to_string(path)
        .map_err(|e| anyhow!("Error reading blocks file {}: {e}", path.display()))?;
    parse_blocks(&ser_blocks)
}

/// Parses a JSON array of blocks.
pub fn parse_blocks(ser_blocks: &str) -> Result<Vec<Block>> {
    serde_json::from_str(ser_blocks).map_err(|e| anyhow!("Error deserializing blocks: {e}"))
}

/// Submits `blocks` in order, then drops the feed.
pub async fn replay(feed: BlockFeed, blocks: Vec<Block>) -> Result<()> {
    let count = blocks.len();
    for block in blocks {
        debug!(target: "node", "Replaying block {}", block.height);
        feed.submit(block).await?;
    }
    info!(target: "node", "Replayed {count} blocks");
    Ok(())
}
