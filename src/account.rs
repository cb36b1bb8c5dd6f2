use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque account identifier with total ordering. Modeled as an owned
/// string (the teacher's `storage::tx::Transaction` keys accounts the
/// same way, by address string) rather than a fixed-size key, since the
/// TxSet never interprets the bytes itself.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AccountId(String);

impl AccountId {
    pub fn new(id: impl Into<String>) -> Self {
        AccountId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for AccountId {
    fn from(s: &str) -> Self {
        AccountId(s.to_string())
    }
}

impl From<String> for AccountId {
    fn from(s: String) -> Self {
        AccountId(s)
    }
}

/// Strictly monotonic per-account counter.
pub type SequenceNumber = u64;
