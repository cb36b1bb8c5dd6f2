use std::sync::Arc;

use sha2::{Digest, Sha256};

use crate::error::TxSetError;
use crate::hash::Hash256;
use crate::transaction::{Transaction, TransactionFactory};
use crate::wire::TransactionSetXdr;

/// The unit of this crate: a parent ledger hash plus the candidate
/// transactions proposed on top of it. Single-owner, non-thread-safe —
/// every mutating method takes `&mut self` and invalidates the memoized
/// content hash before returning, including on early exits.
pub struct TxSetFrame {
    previous_ledger_hash: Hash256,
    transactions: Vec<Arc<dyn Transaction>>,
    hash_cache: Option<Hash256>,
}

impl TxSetFrame {
    /// An empty set bound to `previous_ledger_hash`.
    pub fn new(previous_ledger_hash: Hash256) -> Self {
        TxSetFrame {
            previous_ledger_hash,
            transactions: Vec::new(),
            hash_cache: None,
        }
    }

    /// Reconstructs a (not necessarily canonical) TxSet from its wire
    /// representation, via `factory`. `network_id` participates in
    /// downstream signature verification inside the factory.
    pub fn from_wire(
        network_id: &[u8],
        wire: &TransactionSetXdr,
        factory: &dyn TransactionFactory,
    ) -> Result<Self, TxSetError> {
        let mut transactions = Vec::with_capacity(wire.envelopes.len());
        for envelope in &wire.envelopes {
            transactions.push(factory.make_from_wire(network_id, envelope)?);
        }
        Ok(TxSetFrame {
            previous_ledger_hash: wire.previous_ledger_hash,
            transactions,
            hash_cache: None,
        })
    }

    pub fn previous_ledger_hash(&self) -> Hash256 {
        self.previous_ledger_hash
    }

    pub fn set_previous_ledger_hash(&mut self, hash: Hash256) {
        self.previous_ledger_hash = hash;
        self.invalidate_hash();
    }

    pub fn transactions(&self) -> &[Arc<dyn Transaction>] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn add(&mut self, tx: Arc<dyn Transaction>) {
        self.transactions.push(tx);
        self.invalidate_hash();
    }

    /// Removes the transaction with the same full hash as `tx`, if
    /// present. A no-op (and not an error) if it isn't in the set.
    pub fn remove_tx(&mut self, tx: &Arc<dyn Transaction>) -> bool {
        let full_hash = tx.full_hash();
        let before = self.transactions.len();
        self.transactions.retain(|t| t.full_hash() != full_hash);
        let removed = self.transactions.len() != before;
        if removed {
            self.invalidate_hash();
        }
        removed
    }

    /// True iff `transactions` is sorted strictly ascending by full
    /// hash — the only form eligible for `contents_hash`.
    pub fn is_canonical(&self) -> bool {
        self.transactions
            .windows(2)
            .all(|pair| pair[0].full_hash() < pair[1].full_hash())
    }

    /// Reorders `transactions` ascending by full hash. Invalidates the
    /// memoized hash even if the order didn't actually change.
    pub fn sort_for_hash(&mut self) {
        self.transactions.sort_by_key(|tx| tx.full_hash());
        self.invalidate_hash();
    }

    /// The SHA-256 digest of `previousLedgerHash || concat(envelopes in
    /// canonical order)`, memoized until the next mutation. Canonicalizes
    /// in place on first computation.
    pub fn contents_hash(&mut self) -> Hash256 {
        if let Some(hash) = self.hash_cache {
            return hash;
        }
        self.sort_for_hash();

        let mut hasher = Sha256::new();
        hasher.update(self.previous_ledger_hash.as_bytes());
        for tx in &self.transactions {
            hasher.update(tx.envelope());
        }
        let digest = hasher.finalize();
        let mut bytes = [0u8; 32];
        bytes.copy_from_slice(&digest);
        let hash = Hash256::from_bytes(bytes);

        self.hash_cache = Some(hash);
        hash
    }

    /// Serializes the set in its current order. Callers that need
    /// canonical wire output must call `sort_for_hash` first.
    pub fn to_wire(&self) -> TransactionSetXdr {
        TransactionSetXdr {
            previous_ledger_hash: self.previous_ledger_hash,
            envelopes: self
                .transactions
                .iter()
                .map(|tx| tx.envelope().to_vec())
                .collect(),
        }
    }

    fn invalidate_hash(&mut self) {
        self.hash_cache = None;
    }
}
