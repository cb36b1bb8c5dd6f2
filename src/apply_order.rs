use std::collections::BTreeMap;
use std::sync::Arc;

use crate::account::AccountId;
use crate::frame::TxSetFrame;
use crate::hash::Hash256;
use crate::transaction::Transaction;

impl TxSetFrame {
    /// Produces the apply order per §4.2, seeded by this set's own
    /// content hash. Does not mutate `transactions` — canonicalizes (as
    /// a side effect of computing the hash) but leaves wire order alone.
    pub fn sort_for_apply(&mut self) -> Vec<Arc<dyn Transaction>> {
        let seed = self.contents_hash();
        sort_for_apply(self.transactions(), seed)
    }
}

/// Orders `transactions` for application: deterministic across every
/// replica that holds the same set and `seed`, yet not predictable ahead
/// of time from the transactions' own content alone.
///
/// Transactions are first grouped by source account and ordered within
/// each account by ascending sequence number — the account's own
/// relative order is never allowed to depend on `seed`. They are then
/// split into batches by per-account rank (batch 0 holds each account's
/// first transaction, batch 1 its second, and so on), and each batch is
/// sorted by XOR-ing every transaction's full hash with `seed` and
/// comparing the results. Batches are concatenated in rank order.
///
/// `seed` is normally the TxSet's own content hash, making the apply
/// order a deterministic function of the set's contents without being
/// guessable before the set is closed.
pub fn sort_for_apply(
    transactions: &[Arc<dyn Transaction>],
    seed: Hash256,
) -> Vec<Arc<dyn Transaction>> {
    let mut by_account: BTreeMap<AccountId, Vec<Arc<dyn Transaction>>> = BTreeMap::new();
    for tx in transactions {
        by_account.entry(tx.source_id()).or_default().push(tx.clone());
    }
    for txs in by_account.values_mut() {
        txs.sort_by_key(|tx| tx.seq_num());
    }

    let batch_count = by_account.values().map(Vec::len).max().unwrap_or(0);
    let mut result = Vec::with_capacity(transactions.len());

    for rank in 0..batch_count {
        let mut batch: Vec<Arc<dyn Transaction>> = by_account
            .values()
            .filter_map(|txs| txs.get(rank).cloned())
            .collect();
        batch.sort_by(|a, b| Hash256::cmp_xored(&a.full_hash(), &b.full_hash(), &seed));
        result.extend(batch);
    }

    result
}
