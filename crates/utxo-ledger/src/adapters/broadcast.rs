//! Completion events over a tokio broadcast channel.
//!
//! The presentation layer subscribes and plays its transfer animation from
//! the flow summary carried by each event.

use crate::domain::entities::{Transaction, TransactionFlow};
use crate::ports::outbound::TransactionObserver;
use serde::Serialize;
use tokio::sync::broadcast;
use tracing::debug;

/// Default channel capacity.
pub const DEFAULT_EVENT_CAPACITY: usize = 64;

/// Events published by the ledger.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum LedgerEvent {
    TransactionCompleted {
        transaction: Transaction,
        flow: TransactionFlow,
    },
}

/// Publishes a [`LedgerEvent`] for every completed transaction.
pub struct BroadcastObserver {
    sender: broadcast::Sender<LedgerEvent>,
}

impl BroadcastObserver {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<LedgerEvent> {
        self.sender.subscribe()
    }
}

impl Default for BroadcastObserver {
    fn default() -> Self {
        Self::new(DEFAULT_EVENT_CAPACITY)
    }
}

impl TransactionObserver for BroadcastObserver {
    fn on_transaction_completed(&self, tx: &Transaction) {
        let event = LedgerEvent::TransactionCompleted {
            transaction: tx.clone(),
            flow: tx.flow(),
        };
        // No subscribers is fine: nobody is watching.
        if self.sender.send(event).is_err() {
            debug!(tx_id = %tx.id, "No subscribers for completion event");
        }
    }
}
