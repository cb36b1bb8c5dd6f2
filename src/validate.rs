use std::collections::BTreeMap;
use std::sync::Arc;

use crate::account::{AccountId, SequenceNumber};
use crate::context::ApplicationContext;
use crate::frame::TxSetFrame;
use crate::transaction::Transaction;

/// Policy callbacks behind `checkOrTrim`: `trimInvalid` keeps scanning
/// and discards offenders, `checkValid` aborts the whole check at the
/// first one.
trait CheckPolicy {
    /// `true` to keep scanning (the tx is dropped in trim mode and
    /// simply skipped in check mode), `false` to abort.
    fn on_invalid_tx(&mut self, tx: &Arc<dyn Transaction>, last_seq: SequenceNumber) -> bool;

    fn on_insufficient_balance(&mut self, txs_for_account: &[Arc<dyn Transaction>]) -> bool;
}

/// `trimInvalid`'s policy: never aborts, and remembers everything it
/// drops so the caller can report it.
struct TrimPolicy<'a> {
    frame: &'a mut TxSetFrame,
    trimmed: &'a mut Vec<Arc<dyn Transaction>>,
}

impl<'a> CheckPolicy for TrimPolicy<'a> {
    fn on_invalid_tx(&mut self, tx: &Arc<dyn Transaction>, _last_seq: SequenceNumber) -> bool {
        self.frame.remove_tx(tx);
        self.trimmed.push(tx.clone());
        true
    }

    fn on_insufficient_balance(&mut self, txs_for_account: &[Arc<dyn Transaction>]) -> bool {
        for tx in txs_for_account {
            self.frame.remove_tx(tx);
            self.trimmed.push(tx.clone());
        }
        true
    }
}

/// `checkValid`'s policy: the first problem fails the whole set.
struct AbortPolicy;

impl CheckPolicy for AbortPolicy {
    fn on_invalid_tx(&mut self, _tx: &Arc<dyn Transaction>, _last_seq: SequenceNumber) -> bool {
        false
    }

    fn on_insufficient_balance(&mut self, _txs_for_account: &[Arc<dyn Transaction>]) -> bool {
        false
    }
}

/// Shared validation engine behind `trimInvalid` and `checkValid`.
/// Scans `transactions` grouped by account, checking each transaction's
/// own validity in seqNum order and each account's aggregate fee
/// solvency, invoking `policy` on every failure. Returns `true` iff no
/// callback requested abort.
fn check_or_trim(
    transactions: &[Arc<dyn Transaction>],
    app: &dyn ApplicationContext,
    policy: &mut dyn CheckPolicy,
) -> bool {
    for pair in transactions.windows(2) {
        if pair[1].full_hash() < pair[0].full_hash() {
            return false;
        }
    }

    let mut by_account: BTreeMap<AccountId, Vec<Arc<dyn Transaction>>> = BTreeMap::new();
    for tx in transactions {
        by_account.entry(tx.source_id()).or_default().push(tx.clone());
    }

    for (account, mut txs) in by_account {
        txs.sort_by_key(|tx| tx.seq_num());

        let mut last_seq = app.account_seq_num(&account);
        let mut tot_fee: i128 = 0;
        let mut any_succeeded = false;

        let mut i = 0;
        while i < txs.len() {
            let tx = &txs[i];
            if tx.check_valid(app, last_seq) {
                if !tx.is_whitelisted(app) {
                    tot_fee += tx.fee() as i128;
                }
                last_seq = tx.seq_num();
                any_succeeded = true;
                i += 1;
            } else if policy.on_invalid_tx(tx, last_seq) {
                txs.remove(i);
            } else {
                return false;
            }
        }

        if any_succeeded {
            let ledger = app.ledger_manager().last_closed_ledger_header();
            let new_balance = app.account_balance(&account) - tot_fee;
            if new_balance < app.minimum_balance(&account, &ledger) {
                if !policy.on_insufficient_balance(&txs) {
                    return false;
                }
            }
        }
    }

    true
}

impl TxSetFrame {
    /// Opens a read-only storage scope, canonicalizes, and drops every
    /// transaction that fails its own validity check or pushes its
    /// account's balance below the minimum reserve. Failing accounts are
    /// dropped in full — partial trimming could break seqNum
    /// continuity. Returns the dropped transactions.
    pub fn trim_invalid(&mut self, app: &dyn ApplicationContext) -> Vec<Arc<dyn Transaction>> {
        let _scope = app.read_only_scope();
        self.sort_for_hash();

        let mut trimmed = Vec::new();
        let snapshot = self.transactions().to_vec();
        {
            let mut policy = TrimPolicy {
                frame: self,
                trimmed: &mut trimmed,
            };
            check_or_trim(&snapshot, app, &mut policy);
        }
        trimmed
    }

    /// Opens a read-only storage scope and verifies this set is valid
    /// for `app`'s current ledger: canonical order, `previousLedgerHash`
    /// matches, within capacity, and every account's transactions check
    /// out and remain solvent. The first failure rejects the whole set.
    pub fn check_valid(&self, app: &dyn ApplicationContext) -> bool {
        let _scope = app.read_only_scope();
        let ledger = app.ledger_manager().last_closed_ledger_header();

        if self.previous_ledger_hash() != ledger.hash {
            return false;
        }
        if self.len() > app.ledger_manager().max_tx_set_size() {
            return false;
        }
        if !self.is_canonical() {
            return false;
        }

        let mut policy = AbortPolicy;
        check_or_trim(self.transactions(), app, &mut policy)
    }
}
