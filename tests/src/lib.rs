//! # UTXO Ledger Test Suite
//!
//! Cross-crate tests that exercise the engine only through its public API.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── scenarios.rs    # Worked examples, one test per scenario
//!     ├── properties.rs   # proptest: conservation, ids, double spend, atomicity
//!     ├── concurrency.rs  # Many threads against one LedgerService
//!     └── runtime.rs      # Scripted runs through ledger-runtime
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p ledger-tests
//!
//! # By category
//! cargo test -p ledger-tests integration::scenarios::
//! cargo test -p ledger-tests integration::properties::
//! ```

#![allow(dead_code)]
