use serde::{Deserialize, Serialize};

use crate::hash::Hash256;

/// The header of the last-closed ledger, as exposed to the TxSet. Only
/// the fields the spec's algorithms actually consume are modeled here;
/// everything else about a ledger header is the LedgerManager's concern.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerHeader {
    pub hash: Hash256,
    pub max_tx_set_size: u32,
}

/// Supplies the parent ledger's identity and the TxSet capacity limit.
pub trait LedgerManager {
    fn last_closed_ledger_header(&self) -> LedgerHeader;

    fn max_tx_set_size(&self) -> usize {
        self.last_closed_ledger_header().max_tx_set_size as usize
    }
}
