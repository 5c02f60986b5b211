use thiserror::Error;

/// Errors from QR Code encoding.
///
/// `DataTooLong` is the one every caller must plan for: decrease the
/// error correction level, raise the maximum version, shorten the data,
/// or re-segment text to fit a denser mode. The remaining variants are
/// input-validation failures detected before any work is done.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QrError {
    /// No version in the searched range fits the segments at the
    /// requested error correction level.
    #[error("data length = {len} bits, max capacity = {capacity} bits")]
    DataTooLong { len: usize, capacity: usize },

    /// A segment has more characters than its count field can express at
    /// any version in the searched range.
    #[error("segment too long for its character count field")]
    SegmentTooLong,

    /// The minimum version exceeds the maximum version.
    #[error("minimum version {min} exceeds maximum version {max}")]
    InvalidVersionRange { min: u8, max: u8 },

    /// Numeric mode accepts only the decimal digits 0-9.
    #[error("string contains non-numeric characters")]
    NotNumeric,

    /// Alphanumeric mode accepts only its 45-character set.
    #[error("string contains characters outside the alphanumeric set")]
    NotAlphanumeric,

    /// ECI assignment values must be below 1,000,000.
    #[error("ECI assignment value {0} out of range")]
    EciOutOfRange(u32),
}
