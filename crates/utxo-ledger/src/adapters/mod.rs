//! Adapters implementing the outbound ports.

pub mod broadcast;

pub use broadcast::{BroadcastObserver, LedgerEvent};
