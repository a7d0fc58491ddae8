//! Local wallet ledger.
//!
//! This module implements the wallet's session state:
//! - Transaction records (append-only, newest first)
//! - The wallet balance with insufficient-funds rejection
//! - Best-effort balance persistence through a key-value store

pub mod error;
pub mod store;
pub mod transaction;

#[cfg(test)]
mod store_props;

pub use error::LedgerError;
pub use store::{DEFAULT_RECENT_LIMIT, LedgerStore};
pub use transaction::{Transaction, TransactionKind, TransactionOutcome};
