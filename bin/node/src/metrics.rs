//! Metrics for the rollup node.

use actix_web::{get, App, HttpServer, Responder};
use anyhow::Result;
use lazy_static::lazy_static;
use prometheus::{
    self, register_int_counter, register_int_counter_vec, register_int_gauge, Encoder, IntCounter,
    IntCounterVec, IntGauge, TextEncoder,
};
use rollup_driver::BlockOutcome;

lazy_static! {
    /// Tracks the height of the last processed block.
    pub static ref PROCESSED_HEIGHT: IntGauge =
        register_int_gauge!("rollup_processed_height", "Height of the last processed block")
            .expect("Failed to register processed height metric");

    /// Tracks the number of processed blocks.
    pub static ref PROCESSED_BLOCKS: IntCounter =
        register_int_counter!("rollup_processed_blocks", "Number of processed blocks")
            .expect("Failed to register processed blocks metric");

    /// Tracks the number of applied transactions.
    pub static ref APPLIED_TRANSACTIONS: IntCounter = register_int_counter!(
        "rollup_applied_transactions",
        "Number of applied transactions"
    )
    .expect("Failed to register applied transactions metric");

    /// Tracks the number of rejected transactions by rejection kind.
    pub static ref REJECTED_TRANSACTIONS: IntCounterVec = register_int_counter_vec!(
        "rollup_rejected_transactions",
        "Number of rejected transactions",
        &["kind"]
    )
    .expect("Failed to register rejected transactions metric");
}

/// Records the outcome of a processed block.
pub fn record_block(outcome: &BlockOutcome) {
    PROCESSED_HEIGHT.set(i64::from(outcome.height));
    PROCESSED_BLOCKS.inc();
    APPLIED_TRANSACTIONS.inc_by(outcome.applied as u64);
    for rejection in &outcome.rejected {
        REJECTED_TRANSACTIONS.with_label_values(&[rejection.kind()]).inc();
    }
}

/// Starts the metrics server.
pub async fn serve_metrics(bind: &str) -> Result<()> {
    HttpServer::new(|| App::new().service(index).service(metrics))
        .bind(bind)
        .map_err(|e| anyhow::anyhow!(e))?
        .run()
        .await
        .map_err(|e| anyhow::anyhow!(e))
}

#[get("/")]
async fn index() -> impl Responder {
    "rollup-node-metrics-server: visit /metrics to view metrics"
}

#[get("/metrics")]
async fn metrics() -> impl Responder {
    let encoder = TextEncoder::new();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&prometheus::gather(), &mut buffer) {
        tracing::error!(target: "node", "Failed to encode prometheus metrics: {:?}", e);
    }

    String::from_utf8_lossy(&buffer).into_owned()
}
