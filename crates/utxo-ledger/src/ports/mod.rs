//! Ports module for the UTXO ledger
//!
//! Defines inbound (API) and outbound (SPI) port traits.

pub mod inbound;
pub mod outbound;

pub use inbound::LedgerApi;
pub use outbound::TransactionObserver;
