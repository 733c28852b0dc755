//! # UTXO Ledger Runtime
//!
//! Seeds the ledger, replays a command script against it and logs every
//! balance, rejection and completed transaction.
//!
//! ## Environment
//!
//! - `LEDGER_GENESIS` / `LEDGER_SCRIPT`: JSON input files
//! - `LEDGER_COOLDOWN_MS`: pause after each completed transaction
//! - `LEDGER_MIN_CHANGE`: minimum change left to the sender
//! - `LEDGER_LOG_LEVEL` / `RUST_LOG`, `LEDGER_JSON_LOGS`: logging

use anyhow::{Context, Result};
use tracing::info;

use ledger_runtime::{init_logging, load_config, spawn_event_logger, LedgerRuntime, TelemetryConfig};
use utxo_ledger::Ledger;

#[tokio::main]
async fn main() -> Result<()> {
    init_logging(&TelemetryConfig::from_env()).context("Failed to initialize logging")?;

    let config = load_config();
    info!(
        genesis = ?config.genesis_path,
        script = ?config.script_path,
        cooldown_ms = config.cooldown.as_millis() as u64,
        minimum_change = %config.ledger.minimum_change,
        "Starting UTXO ledger runtime"
    );

    let seed = config.load_genesis().context("Failed to load genesis seed")?;
    let script = config.load_script().context("Failed to load command script")?;
    let ledger = Ledger::new(&seed, config.ledger.clone()).context("Failed to create ledger")?;

    let mut runtime = LedgerRuntime::new(ledger, config.cooldown);
    let logger = spawn_event_logger(runtime.subscribe());

    runtime.run(&script).await;
    runtime.log_balances();
    runtime.log_history();

    // Dropping the runtime closes the event channel and ends the logger.
    drop(runtime);
    logger.await.context("Event logger task failed")?;

    Ok(())
}
