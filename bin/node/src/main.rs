#![doc = include_str!("../README.md")]

use anyhow::Result;
use clap::Parser;
use rollup_node::{init_tracing_subscriber, start_node, NodeCli};
use tracing::info;

#[actix_web::main]
async fn main() -> Result<()> {
    let cfg = NodeCli::parse();
    init_tracing_subscriber(cfg.v)?;

    let exit = start_node(cfg).await?;

    info!(target: "node", "Exiting node at height {}.", exit.height);
    Ok(())
}
