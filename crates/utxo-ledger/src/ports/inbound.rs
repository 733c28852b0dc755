//! Inbound Ports (Driving Ports / API)
//!
//! What the presentation layer may call. Every operation completes or fails
//! immediately; there is nothing to await.

use crate::domain::entities::{Transaction, Utxo};
use crate::domain::errors::LedgerError;
use crate::domain::session::{SelectOutcome, SelectionSession};
use crate::domain::value_objects::{Address, Amount, UtxoId};

/// Primary ledger API
pub trait LedgerApi: Send + Sync {
    /// Sum of the address's unspent values.
    fn balance(&self, address: Address) -> Amount;

    /// Unspent outputs of the address, oldest first.
    fn unspent(&self, address: Address) -> Vec<Utxo>;

    /// Live output with the given id, if any.
    fn find_unspent(&self, id: UtxoId) -> Option<Utxo>;

    /// Toggle an output in the open selection.
    fn select(&self, utxo: &Utxo) -> SelectOutcome;

    /// Choose who receives. Returns whether the choice was accepted.
    fn choose_recipient(&self, address: Address) -> bool;

    /// Record the amount as typed. Returns whether it was accepted.
    fn set_amount(&self, text: &str) -> bool;

    /// Discard the open selection.
    fn reset(&self);

    /// Validate and apply the open selection.
    ///
    /// Store update and history append happen as one unit; on error nothing
    /// changes, including the selection.
    fn submit(&self) -> Result<Transaction, LedgerError>;

    /// Snapshot of every completed transaction, oldest first.
    fn history(&self) -> Vec<Transaction>;

    /// Copy of the open selection.
    fn session_snapshot(&self) -> SelectionSession;
}
