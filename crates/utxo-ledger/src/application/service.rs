//! Ledger Service
//!
//! Main service implementing `LedgerApi`.
//!
//! Holds the one ledger and the one open selection. Store and history sit
//! behind a single lock, so the read-validate-apply-append sequence of one
//! submit never interleaves with another. Lock order is always session, then
//! ledger.

use crate::domain::entities::{Transaction, Utxo};
use crate::domain::errors::LedgerError;
use crate::domain::ledger::{Ledger, LedgerInitError};
use crate::domain::session::{SelectOutcome, SelectionSession};
use crate::domain::value_objects::{Address, Amount, UtxoId};
use crate::ports::inbound::LedgerApi;
use crate::ports::outbound::TransactionObserver;
use parking_lot::Mutex;
use std::sync::Arc;

use tracing::{debug, info, warn};

/// Ledger Service
///
/// Orchestrates a submit:
/// 1. Lock session and ledger
/// 2. Validate and apply (store + history as one unit)
/// 3. Release locks
/// 4. Notify observers
pub struct LedgerService {
    ledger: Mutex<Ledger>,
    session: Mutex<SelectionSession>,
    observers: Vec<Arc<dyn TransactionObserver>>,
}

impl LedgerService {
    pub fn new(ledger: Ledger) -> Self {
        Self {
            ledger: Mutex::new(ledger),
            session: Mutex::new(SelectionSession::new()),
            observers: Vec::new(),
        }
    }

    /// Service over the default genesis seed and policy.
    pub fn with_defaults() -> Result<Self, LedgerInitError> {
        Ledger::with_defaults().map(Self::new)
    }

    /// Register an observer for completed transactions.
    pub fn with_observer(mut self, observer: Arc<dyn TransactionObserver>) -> Self {
        self.observers.push(observer);
        self
    }

    /// Run `f` against a consistent view of store and history.
    pub fn read<R>(&self, f: impl FnOnce(&Ledger) -> R) -> R {
        f(&self.ledger.lock())
    }
}

impl LedgerApi for LedgerService {
    fn balance(&self, address: Address) -> Amount {
        self.ledger.lock().balance(address)
    }

    fn unspent(&self, address: Address) -> Vec<Utxo> {
        self.ledger.lock().unspent(address).to_vec()
    }

    fn find_unspent(&self, id: UtxoId) -> Option<Utxo> {
        self.ledger.lock().find_unspent(id).cloned()
    }

    fn select(&self, utxo: &Utxo) -> SelectOutcome {
        let outcome = self.session.lock().select(utxo);
        debug!(utxo_id = %utxo.id(), owner = ?utxo.owner(), ?outcome, "Selection updated");
        outcome
    }

    fn choose_recipient(&self, address: Address) -> bool {
        let accepted = self.session.lock().choose_recipient(address);
        if !accepted {
            debug!(recipient = ?address, "Recipient ignored");
        }
        accepted
    }

    fn set_amount(&self, text: &str) -> bool {
        self.session.lock().set_amount(text)
    }

    fn reset(&self) {
        self.session.lock().reset();
        debug!("Selection reset");
    }

    fn submit(&self) -> Result<Transaction, LedgerError> {
        let result = {
            let mut session = self.session.lock();
            let mut ledger = self.ledger.lock();
            ledger.submit(&mut session)
        };

        match &result {
            Ok(tx) => {
                info!(
                    tx_id = %tx.id,
                    from = ?tx.from,
                    to = ?tx.to,
                    inputs = tx.inputs.len(),
                    amount = %tx.recipient_output().value(),
                    change = %tx.change_output().value(),
                    "Transaction applied"
                );
                for observer in &self.observers {
                    observer.on_transaction_completed(tx);
                }
            }
            Err(error) => {
                warn!(%error, "Transaction rejected");
            }
        }

        result
    }

    fn history(&self) -> Vec<Transaction> {
        self.ledger.lock().history().all().to_vec()
    }

    fn session_snapshot(&self) -> SelectionSession {
        self.session.lock().clone()
    }
}
