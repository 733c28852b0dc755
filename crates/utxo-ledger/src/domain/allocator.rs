//! UTXO identifier allocation

use super::errors::LedgerError;
use super::value_objects::UtxoId;

/// Monotonic id counter.
///
/// Independent of the live set: ids of spent outputs are never handed out again.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IdAllocator {
    next: u64,
}

impl IdAllocator {
    /// Allocator whose first id is 1.
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Allocator whose first id is `max + 1`.
    pub fn starting_after(max: UtxoId) -> Self {
        Self {
            next: max.0.saturating_add(1),
        }
    }

    /// Issue the next id.
    pub fn next_id(&mut self) -> Result<UtxoId, LedgerError> {
        if self.next == u64::MAX {
            return Err(LedgerError::IdSpaceExhausted);
        }
        let id = UtxoId(self.next);
        self.next += 1;
        Ok(id)
    }

    /// The id the next call to `next_id` would return.
    pub fn peek(&self) -> UtxoId {
        UtxoId(self.next)
    }

    /// Ids still available before exhaustion.
    pub(crate) fn remaining(&self) -> u64 {
        u64::MAX - self.next
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}
