/// Failures that can occur at the TxSet's wire boundary. `checkValid` and
/// `trimInvalid` never raise these — per the spec they surface only as
/// boolean verdicts — this type is for the structural operations that do
/// have a real failure mode: decoding a wire payload and reconstructing
/// transactions from it.
#[derive(Debug, thiserror::Error)]
pub enum TxSetError {
    #[error("wire payload truncated while decoding transaction set")]
    Truncated,

    #[error("transaction set declares {declared} envelopes but only {available} bytes remain")]
    EnvelopeLengthOutOfBounds { declared: usize, available: usize },

    #[error("failed to reconstruct transaction from wire envelope: {0}")]
    InvalidEnvelope(String),
}
