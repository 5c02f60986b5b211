use galois::AlgebraError;
use thiserror::Error;

/// Errors from Reed-Solomon configuration, encoding, and decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RsError {
    /// n must be in 1..=255 and k strictly below n.
    #[error("invalid code parameters: n = {n}, k = {k}")]
    InvalidParameters { n: usize, k: usize },

    /// The message does not fit the k data bytes of one codeword.
    #[error("message length {len} exceeds k = {k}")]
    MessageTooLong { len: usize, k: usize },

    /// The received word is not exactly n bytes.
    #[error("received word is {len} bytes, expected n = {n}")]
    LengthMismatch { len: usize, n: usize },

    /// The received word has more errors than the code can correct.
    #[error("received word is uncorrectable")]
    Uncorrectable,
}

// Algebra failures while decoding only arise from words that cannot be
// reconciled with any codeword.
impl From<AlgebraError> for RsError {
    fn from(_: AlgebraError) -> Self {
        RsError::Uncorrectable
    }
}
