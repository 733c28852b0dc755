//! # Selection Session
//!
//! In-progress construction of a transaction: who sends, which outputs are
//! spent, who receives and the amount as typed.
//!
//! ```text
//! [Idle] ──select──→ [SelectingInputs] ──set_amount──→ [AwaitingRecipient]
//!   ↑                        │                                  │
//!   │                 choose_recipient                   choose_recipient
//!   │                        ↓                                  ↓
//!   └──reset / deselect last / submit ok──────────────── [ReadyToSend]
//! ```
//!
//! The phase is derived from the fields, so the fields can never disagree
//! with it. A failed submit leaves the session untouched.

use super::entities::Utxo;
use super::value_objects::{Address, AddressRole, Amount, UtxoId};
use serde::Serialize;

/// Coarse state of the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum SessionPhase {
    /// Nothing selected
    Idle,
    /// Inputs chosen, no amount or recipient yet
    SelectingInputs,
    /// Amount entered, recipient still missing
    AwaitingRecipient,
    /// Recipient chosen
    ReadyToSend,
}

/// What a call to [`SelectionSession::select`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectOutcome {
    /// Output added to the inputs (opening the session if it was idle)
    Selected,
    /// Output removed, other inputs remain
    Deselected,
    /// Last input removed, session back to idle
    Cleared,
    /// Output belongs to another address than the fixed sender
    Ignored,
}

/// The single open selection.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SelectionSession {
    sender: Option<Address>,
    inputs: Vec<Utxo>,
    recipient: Option<Address>,
    amount: String,
}

impl SelectionSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> SessionPhase {
        match (self.sender, self.recipient) {
            (None, _) => SessionPhase::Idle,
            (Some(_), Some(_)) => SessionPhase::ReadyToSend,
            (Some(_), None) if self.amount.is_empty() => SessionPhase::SelectingInputs,
            (Some(_), None) => SessionPhase::AwaitingRecipient,
        }
    }

    pub fn is_idle(&self) -> bool {
        self.sender.is_none()
    }

    /// Toggle `utxo` in the inputs.
    ///
    /// Only one sender per transaction: outputs of any other address are
    /// ignored while a sender is fixed.
    pub fn select(&mut self, utxo: &Utxo) -> SelectOutcome {
        match self.sender {
            None => {
                self.sender = Some(utxo.owner());
                self.inputs = vec![utxo.clone()];
                SelectOutcome::Selected
            }
            Some(sender) if sender != utxo.owner() => SelectOutcome::Ignored,
            Some(_) => {
                if let Some(pos) = self.inputs.iter().position(|u| u.id() == utxo.id()) {
                    self.inputs.remove(pos);
                    if self.inputs.is_empty() {
                        self.reset();
                        return SelectOutcome::Cleared;
                    }
                    SelectOutcome::Deselected
                } else {
                    self.inputs.push(utxo.clone());
                    SelectOutcome::Selected
                }
            }
        }
    }

    /// Set the receiving address. Ignored while idle or when `address` is
    /// the sender. Returns whether the recipient was set.
    pub fn choose_recipient(&mut self, address: Address) -> bool {
        match self.sender {
            Some(sender) if sender != address => {
                self.recipient = Some(address);
                true
            }
            _ => false,
        }
    }

    /// Store the amount exactly as typed. Parsing happens on submit.
    /// Ignored while idle.
    pub fn set_amount(&mut self, text: impl Into<String>) -> bool {
        if self.is_idle() {
            return false;
        }
        self.amount = text.into();
        true
    }

    /// Drop the whole selection.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn sender(&self) -> Option<Address> {
        self.sender
    }

    pub fn recipient(&self) -> Option<Address> {
        self.recipient
    }

    pub fn inputs(&self) -> &[Utxo] {
        &self.inputs
    }

    pub fn input_ids(&self) -> Vec<UtxoId> {
        self.inputs.iter().map(Utxo::id).collect()
    }

    pub fn amount_text(&self) -> &str {
        &self.amount
    }

    /// Sum of the selected input values, `None` on overflow.
    pub fn total_selected(&self) -> Option<Amount> {
        Amount::checked_sum(self.inputs.iter().map(Utxo::value))
    }

    pub fn is_selected(&self, id: UtxoId) -> bool {
        self.inputs.iter().any(|u| u.id() == id)
    }

    /// Whether clicking `utxo` would do anything.
    pub fn is_selectable(&self, utxo: &Utxo) -> bool {
        self.sender.map_or(true, |sender| sender == utxo.owner())
    }

    pub fn role_of(&self, address: Address) -> Option<AddressRole> {
        if self.sender == Some(address) {
            Some(AddressRole::Sending)
        } else if self.recipient == Some(address) {
            Some(AddressRole::Receiving)
        } else {
            None
        }
    }

    /// Inputs, recipient and amount text are all present.
    pub fn can_submit(&self) -> bool {
        !self.inputs.is_empty() && self.recipient.is_some() && !self.amount.is_empty()
    }

    /// Change the current amount text would leave, if it parses and fits.
    pub fn preview_change(&self) -> Option<Amount> {
        let amount: Amount = self.amount.parse().ok()?;
        self.total_selected()?.checked_sub(amount)
    }
}
