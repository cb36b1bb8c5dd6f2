use std::fmt;
use std::sync::Arc;

use crate::account::{AccountId, SequenceNumber};
use crate::context::ApplicationContext;
use crate::error::TxSetError;
use crate::hash::Hash256;
use crate::ledger::LedgerHeader;

/// The exact wire-serialized transaction envelope. Hashing and wire
/// conversion operate on these bytes directly, never on an in-memory
/// representation, so that independent replicas and language runtimes
/// agree byte-for-byte.
pub type WireBytes = Vec<u8>;

/// A candidate transaction, as seen from the TxSet. Individual
/// transaction validation, signature checking, and balance/reserve
/// accounting are the implementor's concern; the TxSet only ever calls
/// through this interface.
pub trait Transaction: fmt::Debug + Send + Sync {
    fn source_id(&self) -> AccountId;
    fn seq_num(&self) -> SequenceNumber;
    fn fee(&self) -> i64;
    fn full_hash(&self) -> Hash256;
    fn envelope(&self) -> &[u8];

    /// Fee normalized by the transaction's consumed capacity under
    /// `ledger`'s cost model. Lower is worse.
    fn fee_ratio(&self, ledger: &LedgerHeader) -> f64;

    fn is_whitelisted(&self, ctx: &dyn ApplicationContext) -> bool;

    /// Verifies this transaction's own validity rules, including that
    /// `seq_num() == last_seq + 1`. `last_seq` is the account's last
    /// accepted sequence number going into this check.
    fn check_valid(&self, ctx: &dyn ApplicationContext, last_seq: SequenceNumber) -> bool;
}

/// Reconstructs transactions from wire envelopes. Parameterized by the
/// network identifier because signature verification downstream is
/// network-specific.
pub trait TransactionFactory {
    fn make_from_wire(
        &self,
        network_id: &[u8],
        envelope: &[u8],
    ) -> Result<Arc<dyn Transaction>, TxSetError>;
}
