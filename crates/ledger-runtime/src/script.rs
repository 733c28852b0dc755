//! Command scripts driving the ledger.
//!
//! A script is a JSON array of commands, standing in for the clicks and key
//! presses of the visual front end:
//!
//! ```json
//! [
//!   {"op": "select", "utxo": 1},
//!   {"op": "choose_recipient", "address": "B"},
//!   {"op": "set_amount", "amount": "6"},
//!   {"op": "submit"}
//! ]
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;
use utxo_ledger::{Address, UtxoId};

/// Script loading errors.
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("Failed to parse script: {0}")]
    Parse(#[from] serde_json::Error),
}

/// One user action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum ScriptCommand {
    /// Click an unspent output
    Select { utxo: UtxoId },
    /// Pick the receiving address
    ChooseRecipient { address: Address },
    /// Type into the amount field
    SetAmount { amount: String },
    /// Press "Create Transaction"
    Submit,
    /// Abandon the selection
    Reset,
    /// Log every address's balance and unspent outputs
    Balances,
}

impl ScriptCommand {
    /// Commands that touch the selection and must wait out the cooldown.
    /// Queries never wait.
    pub fn is_session_command(&self) -> bool {
        !matches!(self, ScriptCommand::Balances)
    }
}

pub fn parse_script(text: &str) -> Result<Vec<ScriptCommand>, ScriptError> {
    Ok(serde_json::from_str(text)?)
}

/// Walk through the default genesis: two rejected amounts, a payment from
/// Alice to Bob, an ignored cross-address click and a payment back.
pub fn demo_script() -> Vec<ScriptCommand> {
    use ScriptCommand::*;

    let amount = |text: &str| SetAmount {
        amount: text.to_string(),
    };

    vec![
        Balances,
        Select { utxo: UtxoId(1) },
        Select { utxo: UtxoId(2) },
        ChooseRecipient {
            address: Address::Bob,
        },
        amount("15"),
        Submit,
        amount("14.9995"),
        Submit,
        amount("6"),
        Submit,
        Balances,
        Select { utxo: UtxoId(4) },
        Select { utxo: UtxoId(3) },
        ChooseRecipient {
            address: Address::Alice,
        },
        amount("2.5"),
        Submit,
        Balances,
    ]
}
