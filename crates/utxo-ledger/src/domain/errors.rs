//! Error types for the UTXO ledger
//!
//! Every error is recoverable: a failed operation leaves the store, the
//! history and the selection session exactly as they were.

use super::value_objects::{Address, Amount, UtxoId};
use thiserror::Error;

/// Rejections produced by the transaction validator, in rule order.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Amount text is not a finite non-negative decimal number
    #[error("Invalid amount: {0}")]
    InvalidAmount(#[from] AmountParseError),

    /// Amount must be strictly greater than zero
    #[error("Amount must be greater than 0")]
    NonPositiveAmount,

    /// Amount must leave room for change
    #[error("Insufficient funds: amount {amount} must be less than selected total {available}")]
    InsufficientFunds { amount: Amount, available: Amount },

    /// Change left for the sender is below the policy threshold
    #[error("Change {change} is below the minimum of {minimum}")]
    BelowMinimumChange { change: Amount, minimum: Amount },
}

/// Errors surfaced by the store, the applier and the service.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// Proposed amount failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A selected input is no longer unspent under the sending address
    #[error("Stale selection: UTXO #{utxo_id} is no longer unspent")]
    StaleSelection { utxo_id: UtxoId },

    /// The same input was named twice in one transition
    #[error("Duplicate input: UTXO #{0}")]
    DuplicateInput(UtxoId),

    /// A transition tried to mint an output holding nothing
    #[error("Output for {owner} has zero value")]
    ZeroValueOutput { owner: Address },

    /// Change must return to the address that spent the inputs
    #[error("Change must go back to {sender}, not {owner}")]
    ChangeNotToSender { sender: Address, owner: Address },

    /// New outputs do not add up to the inputs they replace
    #[error("Outputs total {outputs} but inputs total {inputs}")]
    ValueMismatch { inputs: Amount, outputs: Amount },

    /// Submit with nothing selected
    #[error("No inputs selected")]
    NoInputsSelected,

    /// Submit before a recipient was chosen
    #[error("No recipient chosen")]
    MissingRecipient,

    /// Summing values exceeded the representable range
    #[error("Amount overflow")]
    AmountOverflow,

    /// The identifier counter cannot issue another id
    #[error("UTXO identifier space exhausted")]
    IdSpaceExhausted,
}

/// Why a piece of text is not a valid amount.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AmountParseError {
    #[error("empty amount")]
    Empty,

    #[error("not a plain decimal number: {0:?}")]
    Malformed(String),

    #[error("too many decimal places: {digits} > {max}")]
    TooPrecise { digits: usize, max: u32 },

    #[error("amount out of range")]
    Overflow,
}

/// Address text that names no known participant.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("Unknown address: {0}")]
pub struct UnknownAddress(pub String);
