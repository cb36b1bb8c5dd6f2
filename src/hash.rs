use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A fixed 32-byte digest. Used both as a transaction's full hash and as
/// a ledger/TxSet content hash; equality and ordering are plain
/// lexicographic comparison on the underlying bytes.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct Hash256([u8; 32]);

impl Hash256 {
    pub const fn zero() -> Self {
        Hash256([0u8; 32])
    }

    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Hash256(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// `(a XOR k) < (b XOR k)` — the comparator apply ordering uses to
    /// interleave batches using a value submitters could not predict.
    pub fn less_than_xored(a: &Hash256, b: &Hash256, k: &Hash256) -> bool {
        Self::xor(a, k) < Self::xor(b, k)
    }

    /// Total order on `(a XOR k, b XOR k)`, for use as a sort comparator.
    pub fn cmp_xored(a: &Hash256, b: &Hash256, k: &Hash256) -> Ordering {
        Self::xor(a, k).cmp(&Self::xor(b, k))
    }

    fn xor(a: &Hash256, k: &Hash256) -> [u8; 32] {
        let mut out = [0u8; 32];
        for i in 0..32 {
            out[i] = a.0[i] ^ k.0[i];
        }
        out
    }
}

impl From<[u8; 32]> for Hash256 {
    fn from(bytes: [u8; 32]) -> Self {
        Hash256(bytes)
    }
}

impl fmt::Debug for Hash256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hash256({})", hex::encode(self.0))
    }
}

impl fmt::Display for Hash256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}
