//! The node supervisor: genesis, the pipeline task, the block producer and shutdown.

use crate::{metrics, replay, NodeCli};
use anyhow::{anyhow, Result};
use rollup_driver::{block_queue, genesis_transaction, Driver, DriverResult};
use rollup_ledger::{LedgerReader, MemoryBlockStore, SharedBlockStore, SharedLedger, StateReader};
use rollup_primitives::Block;
use std::future::Future;
use tokio::task::JoinError;
use tracing::{error, info, warn};

/// The state the node leaves behind once its pipeline has stopped.
#[derive(Debug, Clone)]
pub struct NodeExit {
    /// The height of the last processed block.
    pub height: u32,
    /// A read handle on the final ledger.
    pub state: LedgerReader,
    /// The processed blocks.
    pub blocks: SharedBlockStore,
}

/// What ended the supervisor's wait.
enum Stop {
    Pipeline(Result<DriverResult<u32>, JoinError>),
    Metrics(Result<()>),
    Shutdown,
}

/// Starts the node as configured by `cfg`, running until the block feed is exhausted, a fatal
/// error occurs, or the process receives an interrupt.
pub async fn start_node(cfg: NodeCli) -> Result<NodeExit> {
    let blocks = cfg.replay.as_deref().map(replay::load_blocks).transpose()?;
    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(target: "node", "Failed to listen for interrupts: {e}");
            std::future::pending::<()>().await;
        }
    };
    run_node(&cfg, blocks, shutdown).await
}

/// Runs the node.
///
/// Genesis is applied before the pipeline is spawned. If `replay_blocks` is given, its blocks
/// are fed through the bounded queue and the node stops once they are processed. Otherwise the
/// node waits for `shutdown`, after which the queue is closed and drained.
pub async fn run_node<F>(
    cfg: &NodeCli,
    replay_blocks: Option<Vec<Block>>,
    shutdown: F,
) -> Result<NodeExit>
where
    F: Future<Output = ()>,
{
    let rollup_id = cfg.rollup_id();
    info!(target: "node", "Starting rollup {} with id {rollup_id}", cfg.rollup_name);
    if !cfg.owner_key_matches() {
        warn!(
            target: "node",
            "Genesis signer does not control the owner address {}",
            cfg.owner_address
        );
    }

    let blocks = MemoryBlockStore::new().shared();
    let mut driver = Driver::new(SharedLedger::default(), rollup_id.chain_id(), blocks.clone());
    let genesis = genesis_transaction(&cfg.owner_key, rollup_id.chain_id(), cfg.owner_address)?;
    driver.bootstrap(&genesis)?;
    metrics::PROCESSED_HEIGHT.set(0);
    let state = driver.reader();

    let (feed, mut queue) = block_queue(cfg.queue_capacity);
    let mut pipeline =
        tokio::spawn(async move { driver.run_with(&mut queue, metrics::record_block).await });

    let mut idle_feed = None;
    let producer = match replay_blocks {
        Some(blocks) => Some(tokio::spawn(replay::replay(feed, blocks))),
        None => {
            info!(target: "node", "No block producer configured, waiting for shutdown");
            idle_feed = Some(feed);
            None
        }
    };

    let metrics_server = async {
        match cfg.metrics_addr.as_deref() {
            Some(addr) => {
                info!(target: "node", "Serving metrics on {addr}");
                metrics::serve_metrics(addr).await
            }
            None => std::future::pending().await,
        }
    };

    let stop = tokio::select! {
        res = &mut pipeline => Stop::Pipeline(res),
        res = metrics_server => Stop::Metrics(res),
        _ = shutdown => Stop::Shutdown,
    };

    let result = match stop {
        Stop::Pipeline(res) => res,
        Stop::Metrics(res) => {
            error!(target: "node", "Metrics server failed: {:?}", res);
            pipeline.abort();
            return Err(res.err().unwrap_or_else(|| anyhow!("Metrics server stopped")));
        }
        Stop::Shutdown => {
            info!(target: "node", "Shutdown requested, draining the block queue");
            if let Some(producer) = producer {
                producer.abort();
            }
            drop(idle_feed);
            pipeline.await
        }
    };

    let height = match result {
        Ok(Ok(height)) => height,
        Ok(Err(e)) => {
            error!(target: "node", "Pipeline halted: {e}");
            return Err(e.into());
        }
        Err(e) => return Err(anyhow!("Pipeline task failed: {e}")),
    };

    info!(
        target: "node",
        "Pipeline stopped at height {height}, total supply {}",
        state.total_supply()
    );
    Ok(NodeExit { height, state, blocks })
}

#[cfg(test)]
mod test {
    use super::*;
    use clap::Parser;
    use rollup_driver::DriverError;
    use rollup_executor::{test_utils::key, Operation, TransactionBuilder};
    use rollup_primitives::{signer_address, GENESIS_SUPPLY};

    const OWNER_KEY: &str = "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

    fn cli() -> NodeCli {
        NodeCli::try_parse_from([
            "node",
            "--rollup-name",
            "astria",
            "--owner-address",
            "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266",
            "--owner-key",
            OWNER_KEY,
            "--queue-capacity",
            "2",
        ])
        .unwrap()
    }

    #[tokio::test]
    async fn test_replay_to_completion() {
        let cfg = cli();
        let alice = signer_address(&key(2));
        let transfer = TransactionBuilder::new(cfg.chain_id())
            .operation(Operation::Transfer { to: alice, amount: 42 })
            .sign(&cfg.owner_key)
            .unwrap();
        let blocks = vec![Block::new(1, vec![transfer]), Block::empty(2), Block::empty(3)];

        let exit = run_node(&cfg, Some(blocks), std::future::pending()).await.unwrap();

        assert_eq!(exit.height, 3);
        assert_eq!(exit.state.balance(&alice), 42);
        assert_eq!(exit.state.balance(&cfg.owner_address), GENESIS_SUPPLY - 42);
        assert_eq!(exit.state.nonce(&cfg.owner_address), 1);
        assert_eq!(exit.blocks.read().latest_height(), Some(3));
    }

    #[tokio::test]
    async fn test_gap_is_fatal() {
        let cfg = cli();
        let blocks = vec![Block::empty(1), Block::empty(3)];

        let err = run_node(&cfg, Some(blocks), std::future::pending()).await.unwrap_err();
        assert_eq!(
            err.downcast_ref::<DriverError>(),
            Some(&DriverError::BlockSequenceViolation { expected: 2, got: 3 })
        );
    }

    #[tokio::test]
    async fn test_shutdown_without_producer() {
        let cfg = cli();
        let exit = run_node(&cfg, None, async {}).await.unwrap();
        assert_eq!(exit.height, 0);
        assert_eq!(exit.state.owner(), Some(cfg.owner_address));
    }
}
