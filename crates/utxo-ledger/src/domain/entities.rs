//! Core entities for the UTXO ledger

use super::value_objects::{Address, Amount, TxId, UtxoId, UNIT};
use serde::Serialize;
use std::fmt;

/// An unspent (or, once recorded in history, spent) transaction output.
///
/// Immutable once minted. Only the store mints outputs, so a `Utxo` held by
/// a caller always describes something the ledger actually issued.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Utxo {
    id: UtxoId,
    value: Amount,
    owner: Address,
}

impl Utxo {
    pub(crate) fn new(id: UtxoId, value: Amount, owner: Address) -> Self {
        Self { id, value, owner }
    }

    pub fn id(&self) -> UtxoId {
        self.id
    }

    pub fn value(&self) -> Amount {
        self.value
    }

    pub fn owner(&self) -> Address {
        self.owner
    }
}

impl fmt::Display for Utxo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UTXO #{} ({} {})", self.id, self.value, UNIT)
    }
}

/// Requested output of a transition, before an id is assigned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OutputSpec {
    pub owner: Address,
    pub value: Amount,
}

impl OutputSpec {
    pub fn new(owner: Address, value: Amount) -> Self {
        Self { owner, value }
    }
}

/// Completed transaction as kept in history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Transaction {
    /// Sequential id, starting at 1
    pub id: TxId,
    /// Sending address
    pub from: Address,
    /// Receiving address
    pub to: Address,
    /// Consumed outputs, in selection order
    pub inputs: Vec<Utxo>,
    /// Recipient output followed by change output
    pub outputs: [Utxo; 2],
}

impl Transaction {
    pub fn recipient_output(&self) -> &Utxo {
        &self.outputs[0]
    }

    pub fn change_output(&self) -> &Utxo {
        &self.outputs[1]
    }

    /// Sum of input values. Inputs were summed without overflow when the
    /// transaction was applied, so this cannot overflow.
    pub fn input_total(&self) -> Amount {
        Amount::checked_sum(self.inputs.iter().map(Utxo::value)).unwrap_or(Amount::ZERO)
    }

    pub fn output_total(&self) -> Amount {
        Amount::checked_sum(self.outputs.iter().map(Utxo::value)).unwrap_or(Amount::ZERO)
    }

    /// Summary handed to the presentation layer when animating the transfer.
    pub fn flow(&self) -> TransactionFlow {
        TransactionFlow {
            inputs: self.inputs.iter().map(Utxo::value).collect(),
            total: self.input_total(),
            amount: self.recipient_output().value(),
            change: self.change_output().value(),
        }
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Transaction #{}: {} → {}", self.id, self.from, self.to)
    }
}

/// Input values merged into one total and split into amount and change.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TransactionFlow {
    pub inputs: Vec<Amount>,
    pub total: Amount,
    pub amount: Amount,
    pub change: Amount,
}
