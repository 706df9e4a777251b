//! This module contains all CLI-specific code for the node binary.

use alloy_primitives::{Address, U256};
use clap::{ArgAction, Parser};
use rollup_driver::DEFAULT_QUEUE_CAPACITY;
use rollup_primitives::{signer_address, RollupId, SigningKey};
use std::path::PathBuf;

mod parser;
pub use parser::{parse_address, parse_capacity, parse_key};

mod tracing_util;
pub use tracing_util::init_tracing_subscriber;

/// The node binary CLI application arguments.
#[derive(Parser, Clone, Debug)]
pub struct NodeCli {
    /// Verbosity level (0-4)
    #[arg(long, short, help = "Verbosity level (0-4)", action = ArgAction::Count)]
    pub v: u8,
    /// Name of the rollup. Its SHA-256 digest is the rollup id and the chain id.
    #[clap(long, env = "ROLLUP_NAME")]
    pub rollup_name: String,
    /// Address credited with the token supply at genesis.
    #[clap(long, env = "OWNER_ADDRESS", value_parser = parse_address)]
    pub owner_address: Address,
    /// Hex encoded secp256k1 private key signing the genesis transaction.
    #[clap(long, env = "OWNER_PRIVATE_KEY", value_parser = parse_key, hide_env_values = true)]
    pub owner_key: SigningKey,
    /// Number of blocks buffered between the block feed and the pipeline.
    #[clap(
        long,
        env = "BLOCK_QUEUE_CAPACITY",
        default_value_t = DEFAULT_QUEUE_CAPACITY,
        value_parser = parse_capacity
    )]
    pub queue_capacity: usize,
    /// Address to serve prometheus metrics on. Metrics are not served if omitted.
    #[clap(long, env = "METRICS_ADDR")]
    pub metrics_addr: Option<String>,
    /// Path to a JSON file of blocks to feed into the pipeline. The node exits once every block
    /// has been processed.
    #[clap(long, env = "REPLAY_BLOCKS")]
    pub replay: Option<PathBuf>,
}

impl NodeCli {
    /// Returns the [RollupId] derived from the rollup name.
    pub fn rollup_id(&self) -> RollupId {
        RollupId::from_name(&self.rollup_name)
    }

    /// Returns the chain id transactions must commit to.
    pub fn chain_id(&self) -> U256 {
        self.rollup_id().chain_id()
    }

    /// Returns `true` if the owner key controls the owner address.
    pub fn owner_key_matches(&self) -> bool {
        signer_address(&self.owner_key) == self.owner_address
    }
}
