//! Configuration for the ledger engine

use crate::domain::validator::MINIMUM_CHANGE;
use crate::domain::value_objects::Amount;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Ledger policy configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LedgerConfig {
    /// Smallest change a transaction must return to the sender
    pub minimum_change: Amount,
}

impl LedgerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.minimum_change.is_zero() {
            return Err(ConfigError::ZeroMinimumChange);
        }
        Ok(())
    }
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            minimum_change: MINIMUM_CHANGE,
        }
    }
}

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A zero threshold would allow zero-valued change outputs.
    #[error("minimum_change must be greater than 0")]
    ZeroMinimumChange,
}
