//! # Ledger Runtime Library
//!
//! Wiring around the `utxo-ledger` engine, exposed for testing. The main
//! entry point is the `main.rs` binary.
//!
//! ## Startup Sequence
//!
//! 1. Initialize logging (`telemetry`)
//! 2. Load configuration from the environment (`config`)
//! 3. Seed the ledger from the genesis file or the built-in seed
//! 4. Start the completion event logger
//! 5. Run the command script (`script`), pacing it with the cooldown
//! 6. Log the final balances and history
//!
//! ```text
//! script ──→ LedgerRuntime ──→ LedgerService ──→ Ledger (store + history)
//!                 │                  │
//!             Cooldown        BroadcastObserver ──→ event logger task
//! ```

pub mod config;
pub mod cooldown;
pub mod runtime;
pub mod script;
pub mod telemetry;

pub use config::{load_config, load_config_from, ConfigError, RuntimeConfig, DEFAULT_COOLDOWN};
pub use cooldown::Cooldown;
pub use runtime::{spawn_event_logger, LedgerRuntime, RunReport};
pub use script::{demo_script, parse_script, ScriptCommand, ScriptError};
pub use telemetry::{init_logging, TelemetryConfig, TelemetryError};
