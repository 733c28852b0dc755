//! # Genesis Seed
//!
//! The only input the engine takes from its environment: the initial values
//! held by each address. Every value becomes one UTXO with a fresh id.

use crate::domain::value_objects::{Address, Amount};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// Genesis seed errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenesisError {
    /// Outputs must carry value.
    #[error("Genesis value for {address} must be greater than 0")]
    NonPositiveValue { address: Address },

    /// Seed total does not fit the amount range.
    #[error("Genesis total exceeds the representable amount range")]
    Overflow,

    /// More seeded outputs than identifiers.
    #[error("Genesis seeds more outputs than there are identifiers")]
    TooManyOutputs,

    /// Seed file could not be parsed.
    #[error("Invalid genesis seed: {0}")]
    InvalidSeed(String),
}

/// Initial allocation of values per address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenesisSeed {
    pub allocations: BTreeMap<Address, Vec<Amount>>,
}

impl GenesisSeed {
    pub fn new(allocations: BTreeMap<Address, Vec<Amount>>) -> Self {
        Self { allocations }
    }

    /// Parse a seed from JSON, e.g. `{"allocations": {"A": [10, "0.5"], "B": [4]}}`.
    pub fn from_json(text: &str) -> Result<Self, GenesisError> {
        serde_json::from_str(text).map_err(|e| GenesisError::InvalidSeed(e.to_string()))
    }

    /// Sum of every seeded value.
    pub fn total(&self) -> Result<Amount, GenesisError> {
        Amount::checked_sum(self.allocations.values().flatten().copied())
            .ok_or(GenesisError::Overflow)
    }

    pub fn validate(&self) -> Result<(), GenesisError> {
        for (address, values) in &self.allocations {
            if values.iter().any(Amount::is_zero) {
                return Err(GenesisError::NonPositiveValue { address: *address });
            }
        }
        self.total().map(|_| ())
    }
}

const DEFAULT_ALICE: [Amount; 3] = [coins(10), coins(5), coins(3)];
const DEFAULT_BOB: [Amount; 2] = [coins(8), coins(4)];

/// Evaluated in const items only, so a bad literal fails the build.
const fn coins(n: u64) -> Amount {
    match Amount::from_coins(n) {
        Some(amount) => amount,
        None => panic!("genesis literal out of range"),
    }
}

impl Default for GenesisSeed {
    /// Alice holds 10, 5 and 3; Bob holds 8 and 4.
    fn default() -> Self {
        let mut allocations = BTreeMap::new();
        allocations.insert(Address::Alice, DEFAULT_ALICE.to_vec());
        allocations.insert(Address::Bob, DEFAULT_BOB.to_vec());
        Self { allocations }
    }
}
