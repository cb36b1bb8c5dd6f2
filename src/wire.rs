use crate::error::TxSetError;
use crate::hash::Hash256;

/// The TxSet's own external representation: the parent ledger hash
/// followed by a length-prefixed array of transaction envelopes. Each
/// envelope is carried as opaque bytes — interpreting them is the
/// transaction factory's job, not this codec's.
///
/// `previousLedgerHash` is fixed at 32 bytes, the envelope count is a
/// big-endian `u32`, and each envelope is itself length-prefixed with a
/// big-endian `u32`, mirroring the network's canonical external-data
/// encoding referenced in the spec without depending on an XDR crate
/// this workspace doesn't otherwise use.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransactionSetXdr {
    pub previous_ledger_hash: Hash256,
    pub envelopes: Vec<Vec<u8>>,
}

const HASH_LEN: usize = 32;
const LEN_PREFIX: usize = 4;

impl TransactionSetXdr {
    pub fn encode(&self) -> Vec<u8> {
        let body_len: usize = self.envelopes.iter().map(|e| LEN_PREFIX + e.len()).sum();
        let mut out = Vec::with_capacity(HASH_LEN + LEN_PREFIX + body_len);
        out.extend_from_slice(self.previous_ledger_hash.as_bytes());
        out.extend_from_slice(&(self.envelopes.len() as u32).to_be_bytes());
        for envelope in &self.envelopes {
            out.extend_from_slice(&(envelope.len() as u32).to_be_bytes());
            out.extend_from_slice(envelope);
        }
        out
    }

    pub fn decode(bytes: &[u8]) -> Result<Self, TxSetError> {
        if bytes.len() < HASH_LEN + LEN_PREFIX {
            return Err(TxSetError::Truncated);
        }
        let mut hash = [0u8; HASH_LEN];
        hash.copy_from_slice(&bytes[..HASH_LEN]);
        let mut pos = HASH_LEN;

        let count = read_u32(bytes, pos)? as usize;
        pos += LEN_PREFIX;

        let mut envelopes = Vec::with_capacity(count);
        for _ in 0..count {
            let len = read_u32(bytes, pos)? as usize;
            pos += LEN_PREFIX;
            if pos + len > bytes.len() {
                return Err(TxSetError::EnvelopeLengthOutOfBounds {
                    declared: len,
                    available: bytes.len() - pos,
                });
            }
            envelopes.push(bytes[pos..pos + len].to_vec());
            pos += len;
        }

        Ok(TransactionSetXdr {
            previous_ledger_hash: Hash256::from_bytes(hash),
            envelopes,
        })
    }
}

fn read_u32(bytes: &[u8], pos: usize) -> Result<u32, TxSetError> {
    if pos + LEN_PREFIX > bytes.len() {
        return Err(TxSetError::Truncated);
    }
    let mut arr = [0u8; LEN_PREFIX];
    arr.copy_from_slice(&bytes[pos..pos + LEN_PREFIX]);
    Ok(u32::from_be_bytes(arr))
}
