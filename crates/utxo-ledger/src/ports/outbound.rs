//! Outbound Ports (Driven Ports / SPI)

use crate::domain::entities::Transaction;

/// Receives the completion signal after a transaction is applied.
///
/// Called outside the ledger lock, so implementations may query the ledger.
pub trait TransactionObserver: Send + Sync {
    fn on_transaction_completed(&self, tx: &Transaction);
}
