//! # Transaction Applier
//!
//! `Ledger` owns the store and the history together. The only way to mutate
//! either is [`Ledger::submit`], which updates both or neither.

use super::entities::{OutputSpec, Transaction, Utxo};
use super::errors::LedgerError;
use super::history::TransactionHistory;
use super::invariants;
use super::session::SelectionSession;
use super::store::UtxoStore;
use super::validator::validate_with_minimum;
use super::value_objects::{Address, Amount, UtxoId};
use crate::config::{ConfigError, LedgerConfig};
use crate::genesis::{GenesisError, GenesisSeed};
use thiserror::Error;

/// Errors raised while building a ledger.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerInitError {
    #[error(transparent)]
    Genesis(#[from] GenesisError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Store, history and policy of one ledger.
#[derive(Clone, Debug)]
pub struct Ledger {
    store: UtxoStore,
    history: TransactionHistory,
    config: LedgerConfig,
    genesis_total: Amount,
}

impl Ledger {
    pub fn new(seed: &GenesisSeed, config: LedgerConfig) -> Result<Self, LedgerInitError> {
        config.validate()?;
        let store = UtxoStore::from_genesis(seed)?;
        let genesis_total = seed.total()?;
        Ok(Self {
            store,
            history: TransactionHistory::new(),
            config,
            genesis_total,
        })
    }

    /// Default seed and policy.
    pub fn with_defaults() -> Result<Self, LedgerInitError> {
        Self::new(&GenesisSeed::default(), LedgerConfig::default())
    }

    /// Validate and apply the transaction described by `session`.
    ///
    /// On success the session is reset to idle. On any error the store, the
    /// history and the session are left exactly as they were.
    pub fn submit(&mut self, session: &mut SelectionSession) -> Result<Transaction, LedgerError> {
        let sender = match session.sender() {
            Some(sender) if !session.inputs().is_empty() => sender,
            _ => return Err(LedgerError::NoInputsSelected),
        };
        let recipient = session.recipient().ok_or(LedgerError::MissingRecipient)?;

        let total = session.total_selected().ok_or(LedgerError::AmountOverflow)?;
        let amount = validate_with_minimum(total, session.amount_text(), self.config.minimum_change)?;
        let change = total
            .checked_sub(amount)
            .ok_or(LedgerError::AmountOverflow)?;

        let (sent, returned) = self.store.apply_transition(
            session.inputs(),
            sender,
            OutputSpec::new(recipient, amount),
            OutputSpec::new(sender, change),
        )?;

        let tx = self
            .history
            .append(sender, recipient, session.inputs().to_vec(), [sent, returned])
            .clone();
        session.reset();

        debug_assert!(invariants::invariant_value_conservation(&tx));
        debug_assert!(invariants::invariant_no_double_spend(&self.store, &self.history));
        debug_assert!(invariants::invariant_total_preserved(&self.store, self.genesis_total));

        Ok(tx)
    }

    pub fn balance(&self, address: Address) -> Amount {
        self.store.balance(address)
    }

    pub fn unspent(&self, address: Address) -> &[Utxo] {
        self.store.unspent(address)
    }

    pub fn find_unspent(&self, id: UtxoId) -> Option<&Utxo> {
        self.store.get(id)
    }

    pub fn store(&self) -> &UtxoStore {
        &self.store
    }

    pub fn history(&self) -> &TransactionHistory {
        &self.history
    }

    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    pub fn genesis_total(&self) -> Amount {
        self.genesis_total
    }
}
