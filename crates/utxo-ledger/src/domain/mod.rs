//! Domain module for the UTXO ledger
//!
//! Entities, value objects, the store and session state machines, the
//! validator, the applier and invariants.

pub mod allocator;
pub mod entities;
pub mod errors;
pub mod history;
pub mod invariants;
pub mod ledger;
pub mod session;
pub mod store;
pub mod validator;
pub mod value_objects;

pub use allocator::IdAllocator;
pub use entities::*;
pub use errors::*;
pub use history::TransactionHistory;
pub use ledger::{Ledger, LedgerInitError};
pub use session::{SelectOutcome, SelectionSession, SessionPhase};
pub use store::UtxoStore;
pub use validator::{validate, validate_with_minimum, MINIMUM_CHANGE};
pub use value_objects::*;
