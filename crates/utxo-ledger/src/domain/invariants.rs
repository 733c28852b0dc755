//! Domain invariants for the UTXO ledger
//!
//! Checked with `debug_assert!` after every applied transaction and used
//! directly by the property tests.

use super::entities::Transaction;
use super::history::TransactionHistory;
use super::store::UtxoStore;
use super::value_objects::{Amount, TxId, UtxoId};
use std::collections::HashSet;

/// INVARIANT-1: Value Conservation
/// A transaction's outputs sum exactly to its inputs.
pub fn invariant_value_conservation(tx: &Transaction) -> bool {
    let inputs = Amount::checked_sum(tx.inputs.iter().map(|u| u.value()));
    let outputs = Amount::checked_sum(tx.outputs.iter().map(|u| u.value()));
    inputs.is_some() && inputs == outputs
}

/// INVARIANT-2: Unique Identifiers
/// Every output ever minted (live or recorded in history) has a distinct id,
/// and each transaction's outputs are newer than anything minted before it.
pub fn invariant_unique_ids(store: &UtxoStore, history: &TransactionHistory) -> bool {
    let mut minted: HashSet<UtxoId> = HashSet::new();
    for utxo in store.iter() {
        minted.insert(utxo.id());
    }

    let mut newest: Option<UtxoId> = None;
    for tx in history.all() {
        let [sent, change] = &tx.outputs;
        if sent.id() >= change.id() {
            return false;
        }
        if newest.is_some_and(|n| sent.id() <= n) {
            return false;
        }
        newest = Some(change.id());

        // Outputs may still be live, so only count the ones that are not
        for output in &tx.outputs {
            if store.get(output.id()).is_none() && !minted.insert(output.id()) {
                return false;
            }
        }
    }

    // Anything live must be below the next id the store will issue
    store.iter().all(|u| u.id() < store.next_id())
}

/// INVARIANT-3: No Double Spend
/// Nothing consumed by a transaction is live, and nothing is consumed twice.
pub fn invariant_no_double_spend(store: &UtxoStore, history: &TransactionHistory) -> bool {
    let mut consumed: HashSet<UtxoId> = HashSet::new();
    for tx in history.all() {
        for input in &tx.inputs {
            if !consumed.insert(input.id()) || store.get(input.id()).is_some() {
                return false;
            }
        }
    }
    true
}

/// INVARIANT-4: Sequential History
/// Transaction ids are 1, 2, 3... in order.
pub fn invariant_sequential_history(history: &TransactionHistory) -> bool {
    history
        .all()
        .iter()
        .enumerate()
        .all(|(i, tx)| tx.id == TxId(i as u64 + 1))
}

/// INVARIANT-5: Fixed Supply
/// The store holds exactly what genesis put in.
pub fn invariant_total_preserved(store: &UtxoStore, genesis_total: Amount) -> bool {
    store.total_value() == genesis_total
}
