//! Per-address unspent output store

use super::allocator::IdAllocator;
use super::entities::{OutputSpec, Utxo};
use super::errors::LedgerError;
use super::value_objects::{Address, Amount, UtxoId};
use crate::genesis::{GenesisError, GenesisSeed};
use std::collections::{BTreeMap, BTreeSet};

/// Unspent outputs grouped by owner, in insertion order.
///
/// Ids are unique across all addresses. The total value held is fixed at
/// genesis; transitions only move value between outputs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UtxoStore {
    utxos: BTreeMap<Address, Vec<Utxo>>,
    allocator: IdAllocator,
}

impl UtxoStore {
    /// Empty store with every known address present.
    pub fn new() -> Self {
        Self {
            utxos: Address::ALL.iter().map(|a| (*a, Vec::new())).collect(),
            allocator: IdAllocator::new(),
        }
    }

    /// Build the initial store. Each seeded value gets a fresh id, in address
    /// order and then list order.
    pub fn from_genesis(seed: &GenesisSeed) -> Result<Self, GenesisError> {
        seed.validate()?;

        let mut store = Self::new();
        for (address, values) in &seed.allocations {
            for value in values {
                let id = store
                    .allocator
                    .next_id()
                    .map_err(|_| GenesisError::TooManyOutputs)?;
                store
                    .utxos
                    .entry(*address)
                    .or_default()
                    .push(Utxo::new(id, *value, *address));
            }
        }
        Ok(store)
    }

    /// Sum of the address's unspent values.
    pub fn balance(&self, address: Address) -> Amount {
        // Bounded by the genesis total, which was checked for overflow.
        Amount::checked_sum(self.unspent(address).iter().map(Utxo::value)).unwrap_or(Amount::ZERO)
    }

    /// Unspent outputs owned by `address`, oldest first.
    pub fn unspent(&self, address: Address) -> &[Utxo] {
        self.utxos.get(&address).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Look up a live output by id.
    pub fn get(&self, id: UtxoId) -> Option<&Utxo> {
        self.utxos.values().flatten().find(|u| u.id() == id)
    }

    pub fn contains(&self, address: Address, id: UtxoId) -> bool {
        self.unspent(address).iter().any(|u| u.id() == id)
    }

    /// Value held across all addresses.
    pub fn total_value(&self) -> Amount {
        Amount::checked_sum(self.utxos.values().flatten().map(Utxo::value)).unwrap_or(Amount::ZERO)
    }

    /// Number of live outputs.
    pub fn len(&self) -> usize {
        self.utxos.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All live outputs, grouped by address.
    pub fn iter(&self) -> impl Iterator<Item = &Utxo> {
        self.utxos.values().flatten()
    }

    /// Id the allocator will hand out next.
    pub fn next_id(&self) -> UtxoId {
        self.allocator.peek()
    }

    /// Spend `spend` from `sender` and mint the recipient and change outputs.
    ///
    /// Each input must match the live output stored under `sender` exactly,
    /// and the two outputs must add up to the inputs. All checks run before
    /// anything is touched, so on error the store is unchanged. The recipient
    /// output receives the lower of the two new ids.
    pub fn apply_transition(
        &mut self,
        spend: &[Utxo],
        sender: Address,
        recipient: OutputSpec,
        change: OutputSpec,
    ) -> Result<(Utxo, Utxo), LedgerError> {
        if spend.is_empty() {
            return Err(LedgerError::NoInputsSelected);
        }

        let mut spent: BTreeSet<UtxoId> = BTreeSet::new();
        for utxo in spend {
            if !spent.insert(utxo.id()) {
                return Err(LedgerError::DuplicateInput(utxo.id()));
            }
        }

        // A copy with a live id but another value or owner is not spendable
        let live = self.unspent(sender);
        if let Some(stale) = spend.iter().find(|utxo| !live.contains(utxo)) {
            return Err(LedgerError::StaleSelection {
                utxo_id: stale.id(),
            });
        }

        if change.owner != sender {
            return Err(LedgerError::ChangeNotToSender {
                sender,
                owner: change.owner,
            });
        }
        for output in [&recipient, &change] {
            if output.value.is_zero() {
                return Err(LedgerError::ZeroValueOutput {
                    owner: output.owner,
                });
            }
        }

        let inputs = Amount::checked_sum(spend.iter().map(Utxo::value))
            .ok_or(LedgerError::AmountOverflow)?;
        let outputs = recipient
            .value
            .checked_add(change.value)
            .ok_or(LedgerError::AmountOverflow)?;
        if inputs != outputs {
            return Err(LedgerError::ValueMismatch { inputs, outputs });
        }

        if self.allocator.remaining() < 2 {
            return Err(LedgerError::IdSpaceExhausted);
        }

        let recipient_utxo = Utxo::new(self.allocator.next_id()?, recipient.value, recipient.owner);
        let change_utxo = Utxo::new(self.allocator.next_id()?, change.value, change.owner);

        self.utxos
            .entry(sender)
            .or_default()
            .retain(|u| !spent.contains(&u.id()));
        self.utxos
            .entry(recipient.owner)
            .or_default()
            .push(recipient_utxo.clone());
        self.utxos
            .entry(change.owner)
            .or_default()
            .push(change_utxo.clone());

        Ok((recipient_utxo, change_utxo))
    }
}

impl Default for UtxoStore {
    fn default() -> Self {
        Self::new()
    }
}
