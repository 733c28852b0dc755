//! # UTXO Ledger Engine
//!
//! A simplified unspent-transaction-output ledger: a fixed set of addresses,
//! each holding outputs that can only be spent whole, and a transaction
//! mechanism that consumes selected outputs and mints a recipient output and
//! a change output.
//!
//! ## Architecture
//!
//! - **Domain**: identifier allocator, UTXO store, selection session,
//!   validator, applier (`Ledger`), history, invariants
//! - **Ports**: Inbound (`LedgerApi`) and Outbound (`TransactionObserver`)
//! - **Application**: `LedgerService`, the locked single-writer orchestration
//! - **Adapters**: `BroadcastObserver` publishing completion events
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Enforcement Location |
//! |----|-----------|---------------------|
//! | INVARIANT-1 | Value conservation | `domain/store.rs` - `apply_transition()` balance check against stored inputs |
//! | INVARIANT-2 | Unique, monotonic ids | `domain/allocator.rs` - standalone counter |
//! | INVARIANT-3 | No double spend | `domain/store.rs` - `apply_transition()` presence check |
//! | INVARIANT-4 | Sequential history | `domain/history.rs` - `append()` |
//! | INVARIANT-5 | Fixed supply | `domain/store.rs` - value only moves |
//!
//! ## Submit Flow
//!
//! ```text
//! select / choose_recipient / set_amount
//!                 │
//!                 ↓
//!   submit ──→ validate ──✗──→ Err (nothing changes)
//!                 │
//!                 ↓
//!        apply_transition ──✗──→ Err(StaleSelection) (nothing changes)
//!                 │
//!                 ↓
//!      history.append + session reset ──→ observers notified
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod genesis;
pub mod ports;

pub use adapters::{BroadcastObserver, LedgerEvent};
pub use application::service::LedgerService;
pub use config::{ConfigError, LedgerConfig};
pub use domain::entities::*;
pub use domain::errors::{AmountParseError, LedgerError, UnknownAddress, ValidationError};
pub use domain::value_objects::*;
pub use domain::{
    validate, validate_with_minimum, Ledger, LedgerInitError, SelectOutcome, SelectionSession,
    SessionPhase, TransactionHistory, UtxoStore, MINIMUM_CHANGE,
};
pub use genesis::{GenesisError, GenesisSeed};
pub use ports::inbound::LedgerApi;
pub use ports::outbound::TransactionObserver;
