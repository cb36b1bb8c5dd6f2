//! Shared test doubles for the TxSet integration suite, in the spirit of
//! the mempool test helpers `create_test_transaction`/`create_mock_state`.

use std::collections::BTreeMap;
use std::sync::Arc;

use txset::{AccountId, ApplicationContext, Hash256, LedgerHeader, LedgerManager, Transaction};

#[derive(Debug)]
pub struct MockTransaction {
    pub source: AccountId,
    pub seq: u64,
    pub fee: i64,
    pub hash: Hash256,
    pub envelope: Vec<u8>,
    pub whitelisted: bool,
    pub fee_ratio: f64,
}

impl Transaction for MockTransaction {
    fn source_id(&self) -> AccountId {
        self.source.clone()
    }

    fn seq_num(&self) -> u64 {
        self.seq
    }

    fn fee(&self) -> i64 {
        self.fee
    }

    fn full_hash(&self) -> Hash256 {
        self.hash
    }

    fn envelope(&self) -> &[u8] {
        &self.envelope
    }

    fn fee_ratio(&self, _ledger: &LedgerHeader) -> f64 {
        self.fee_ratio
    }

    fn is_whitelisted(&self, _ctx: &dyn ApplicationContext) -> bool {
        self.whitelisted
    }

    fn check_valid(&self, ctx: &dyn ApplicationContext, last_seq: u64) -> bool {
        self.seq == last_seq + 1 && ctx.account_seq_num(&self.source) <= last_seq
    }
}

/// Builds a transaction with a one-byte-repeated hash, for readable test
/// fixtures. `fee_ratio` defaults to `fee as f64`.
pub fn create_test_transaction(source: &str, seq: u64, fee: i64, hash_byte: u8) -> Arc<dyn Transaction> {
    Arc::new(MockTransaction {
        source: AccountId::new(source),
        seq,
        fee,
        hash: Hash256::from_bytes([hash_byte; 32]),
        envelope: vec![hash_byte; 8],
        whitelisted: false,
        fee_ratio: fee as f64,
    })
}

pub fn create_whitelisted_transaction(source: &str, seq: u64, hash_byte: u8) -> Arc<dyn Transaction> {
    Arc::new(MockTransaction {
        source: AccountId::new(source),
        seq,
        fee: 100,
        hash: Hash256::from_bytes([hash_byte; 32]),
        envelope: vec![hash_byte; 8],
        whitelisted: true,
        fee_ratio: 0.0,
    })
}

pub struct MockWhitelist {
    pub reserve: usize,
    pub holder: Option<AccountId>,
}

impl txset::context::Whitelist for MockWhitelist {
    fn unwhitelisted_reserve(&self, _max: usize) -> usize {
        self.reserve
    }

    fn account_id(&self) -> Option<AccountId> {
        self.holder.clone()
    }
}

impl Default for MockWhitelist {
    fn default() -> Self {
        MockWhitelist {
            reserve: 0,
            holder: None,
        }
    }
}

pub struct MockLedgerManager {
    pub header: LedgerHeader,
}

impl LedgerManager for MockLedgerManager {
    fn last_closed_ledger_header(&self) -> LedgerHeader {
        self.header
    }
}

/// A minimal application context backed by in-memory account state.
/// Every account not explicitly seeded starts at seqNum 0 with an
/// effectively unlimited balance and zero reserve requirement.
pub struct MockContext {
    pub whitelist: MockWhitelist,
    pub ledger_manager: MockLedgerManager,
    pub seq_nums: BTreeMap<AccountId, u64>,
    pub balances: BTreeMap<AccountId, i128>,
    pub minimum_balances: BTreeMap<AccountId, i128>,
}

impl MockContext {
    pub fn new(previous_ledger_hash: Hash256, max_tx_set_size: u32) -> Self {
        MockContext {
            whitelist: MockWhitelist::default(),
            ledger_manager: MockLedgerManager {
                header: LedgerHeader {
                    hash: previous_ledger_hash,
                    max_tx_set_size,
                },
            },
            seq_nums: BTreeMap::new(),
            balances: BTreeMap::new(),
            minimum_balances: BTreeMap::new(),
        }
    }

    pub fn with_balance(mut self, account: &str, balance: i128) -> Self {
        self.balances.insert(AccountId::new(account), balance);
        self
    }

    pub fn with_whitelist_holder(mut self, account: &str) -> Self {
        self.whitelist.holder = Some(AccountId::new(account));
        self
    }

    pub fn with_unwhitelisted_reserve(mut self, reserve: usize) -> Self {
        self.whitelist.reserve = reserve;
        self
    }
}

impl ApplicationContext for MockContext {
    fn whitelist(&self) -> &dyn txset::context::Whitelist {
        &self.whitelist
    }

    fn ledger_manager(&self) -> &dyn LedgerManager {
        &self.ledger_manager
    }

    fn account_seq_num(&self, id: &AccountId) -> u64 {
        self.seq_nums.get(id).copied().unwrap_or(0)
    }

    fn account_balance(&self, id: &AccountId) -> i128 {
        self.balances.get(id).copied().unwrap_or(1_000_000_000)
    }

    fn minimum_balance(&self, id: &AccountId, _ledger: &LedgerHeader) -> i128 {
        self.minimum_balances.get(id).copied().unwrap_or(0)
    }
}
