use std::marker::PhantomData;

use crate::account::{AccountId, SequenceNumber};
use crate::ledger::{LedgerHeader, LedgerManager};

/// An authority-controlled allow-list granting priority inclusion to its
/// members, and optionally a single holder account with absolute top
/// priority over everyone else.
pub trait Whitelist {
    /// Minimum capacity reserved for non-whitelisted transactions.
    fn unwhitelisted_reserve(&self, max: usize) -> usize;

    fn account_id(&self) -> Option<AccountId>;
}

/// A scoped read-only storage-transaction guard. Held for the duration
/// of `checkValid`/`trimInvalid` so per-transaction validity checks see
/// a consistent snapshot of account state; released on every exit path
/// via `Drop`, including early returns.
pub struct ReadOnlyScope<'a> {
    _marker: PhantomData<&'a ()>,
}

impl<'a> ReadOnlyScope<'a> {
    pub fn new() -> Self {
        ReadOnlyScope {
            _marker: PhantomData,
        }
    }
}

impl<'a> Default for ReadOnlyScope<'a> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> Drop for ReadOnlyScope<'a> {
    fn drop(&mut self) {
        tracing::trace!("released read-only storage scope");
    }
}

/// Everything the TxSet needs from the surrounding application besides
/// the ledger manager and the transactions themselves: the whitelist
/// oracle, a storage scope, and the account-state queries that
/// `checkOrTrim` needs (balance, minimum reserve, last accepted seqNum).
/// Account balance/reserve computation is out of scope for this crate —
/// these methods are exactly the seam where that logic plugs in.
pub trait ApplicationContext {
    fn whitelist(&self) -> &dyn Whitelist;

    fn ledger_manager(&self) -> &dyn LedgerManager;

    fn read_only_scope(&self) -> ReadOnlyScope<'_> {
        ReadOnlyScope::new()
    }

    /// The account's last accepted sequence number (0 if it has never
    /// submitted a transaction), i.e. the `lastSeq` a fresh scan starts
    /// from.
    fn account_seq_num(&self, id: &AccountId) -> SequenceNumber;

    fn account_balance(&self, id: &AccountId) -> i128;

    fn minimum_balance(&self, id: &AccountId, ledger: &LedgerHeader) -> i128;
}
