use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::account::AccountId;
use crate::context::ApplicationContext;
use crate::frame::TxSetFrame;
use crate::ledger::LedgerManager;
use crate::transaction::Transaction;

impl TxSetFrame {
    /// Trims this set to `lm.max_tx_set_size()` by fee, giving
    /// whitelisted transactions priority and the whitelist holder (if
    /// any) absolute top priority. A no-op when the set is already
    /// within capacity.
    pub fn surge_pricing_filter(&mut self, lm: &dyn LedgerManager, app: &dyn ApplicationContext) {
        let max = lm.max_tx_set_size();
        if self.len() <= max {
            return;
        }

        let ledger = lm.last_closed_ledger_header();
        let whitelist = app.whitelist();
        let holder = whitelist.account_id();

        let (mut whitelisted, unwhitelisted): (Vec<_>, Vec<_>) = self
            .transactions()
            .iter()
            .cloned()
            .partition(|tx| tx.is_whitelisted(app));

        let reserve = whitelist.unwhitelisted_reserve(max).min(unwhitelisted.len());

        let fee_ratios = account_fee_ratios(self.transactions(), &ledger);

        whitelisted.sort_by(|a, b| compare_w(a, b, &holder));
        let whitelist_capacity = max.saturating_sub(reserve);
        if whitelisted.len() > whitelist_capacity {
            for dropped in whitelisted.split_off(whitelist_capacity) {
                self.remove_tx(&dropped);
            }
        }

        let extra_whitelist_room = whitelist_capacity.saturating_sub(whitelisted.len());
        let total_unwhitelisted_capacity = reserve + extra_whitelist_room;

        if unwhitelisted.len() <= total_unwhitelisted_capacity {
            return;
        }

        let mut sorted_unwhitelisted = unwhitelisted;
        sorted_unwhitelisted.sort_by(|a, b| compare_u(a, b, &holder, &fee_ratios));
        for dropped in sorted_unwhitelisted.split_off(total_unwhitelisted_capacity) {
            self.remove_tx(&dropped);
        }
    }
}

/// `accountFeeRatio[A] = min over tx in transactions with sourceID = A of
/// tx.feeRatio(ledger)`. An account is only as attractive as its
/// worst-paying transaction, since every earlier seqNum must be admitted
/// to admit a later one.
fn account_fee_ratios(
    transactions: &[Arc<dyn Transaction>],
    ledger: &crate::ledger::LedgerHeader,
) -> BTreeMap<AccountId, f64> {
    let mut ratios: BTreeMap<AccountId, f64> = BTreeMap::new();
    for tx in transactions {
        let ratio = tx.fee_ratio(ledger);
        ratios
            .entry(tx.source_id())
            .and_modify(|existing| {
                if ratio < *existing {
                    *existing = ratio;
                }
            })
            .or_insert(ratio);
    }
    ratios
}

fn same_account_or_holder_order(
    t1: &Arc<dyn Transaction>,
    t2: &Arc<dyn Transaction>,
    holder: &Option<AccountId>,
) -> Option<Ordering> {
    if t1.source_id() == t2.source_id() {
        return Some(t1.seq_num().cmp(&t2.seq_num()));
    }
    if let Some(holder) = holder {
        if *holder == t1.source_id() {
            return Some(Ordering::Less);
        }
        if *holder == t2.source_id() {
            return Some(Ordering::Greater);
        }
    }
    None
}

/// Sorting comparator for whitelisted transactions: fees are irrelevant
/// among them, so accounts are ordered purely by `sourceID`.
fn compare_w(
    t1: &Arc<dyn Transaction>,
    t2: &Arc<dyn Transaction>,
    holder: &Option<AccountId>,
) -> Ordering {
    same_account_or_holder_order(t1, t2, holder).unwrap_or_else(|| t1.source_id().cmp(&t2.source_id()))
}

/// Sorting comparator for unwhitelisted transactions: higher
/// `accountFeeRatio` first, ties broken by `sourceID` ascending.
fn compare_u(
    t1: &Arc<dyn Transaction>,
    t2: &Arc<dyn Transaction>,
    holder: &Option<AccountId>,
    fee_ratios: &BTreeMap<AccountId, f64>,
) -> Ordering {
    if let Some(order) = same_account_or_holder_order(t1, t2, holder) {
        return order;
    }
    let r1 = fee_ratios.get(&t1.source_id()).copied().unwrap_or(0.0);
    let r2 = fee_ratios.get(&t2.source_id()).copied().unwrap_or(0.0);
    r2.total_cmp(&r1).then_with(|| t1.source_id().cmp(&t2.source_id()))
}
