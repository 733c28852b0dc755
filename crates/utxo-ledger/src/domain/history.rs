//! Append-only transaction history

use super::entities::{Transaction, Utxo};
use super::value_objects::{Address, TxId};

/// Completed transactions in completion order. Ids run 1, 2, 3... with no gaps.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TransactionHistory {
    entries: Vec<Transaction>,
}

impl TransactionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a transaction under the next id.
    pub fn append(
        &mut self,
        from: Address,
        to: Address,
        inputs: Vec<Utxo>,
        outputs: [Utxo; 2],
    ) -> &Transaction {
        let id = self.next_id();
        self.entries.push(Transaction {
            id,
            from,
            to,
            inputs,
            outputs,
        });
        &self.entries[self.entries.len() - 1]
    }

    /// Read-only view of every transaction.
    pub fn all(&self) -> &[Transaction] {
        &self.entries
    }

    pub fn get(&self, id: TxId) -> Option<&Transaction> {
        let index = usize::try_from(id.0).ok()?.checked_sub(1)?;
        self.entries.get(index)
    }

    pub fn last(&self) -> Option<&Transaction> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Id the next appended transaction will get.
    pub fn next_id(&self) -> TxId {
        TxId(self.entries.len() as u64 + 1)
    }
}
