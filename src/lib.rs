//! Consensus-critical transaction set frame.
//!
//! A [`TxSetFrame`] collects the candidate transactions proposed for the
//! next ledger close. Every operation on it is consensus-binding: two
//! replicas holding the same transactions must produce byte-identical
//! results for canonicalization, hashing, surge pricing and apply
//! ordering, or the network forks. See each module for the relevant
//! slice of the algorithm.

pub mod account; // AccountId, SequenceNumber
pub mod apply_order; // sortForApply
pub mod context; // ApplicationContext, Whitelist, ReadOnlyScope
pub mod error; // TxSetError
pub mod frame; // TxSetFrame itself
pub mod hash; // Hash256, lessThanXored
pub mod ledger; // LedgerManager, LedgerHeader
pub mod surge; // surgePricingFilter
pub mod transaction; // Transaction, TransactionFactory
pub mod validate; // checkOrTrim, trimInvalid, checkValid
pub mod wire; // TransactionSetXdr

pub use account::{AccountId, SequenceNumber};
pub use context::{ApplicationContext, ReadOnlyScope, Whitelist};
pub use error::TxSetError;
pub use frame::TxSetFrame;
pub use hash::Hash256;
pub use ledger::{LedgerHeader, LedgerManager};
pub use transaction::{Transaction, TransactionFactory};
pub use wire::TransactionSetXdr;
