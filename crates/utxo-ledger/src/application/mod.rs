//! Application layer: service orchestration over the domain.

pub mod service;

pub use service::LedgerService;
