use crate::bits::BitBuffer;
use crate::error::QrError;
use crate::types::{Mode, Version};
use crate::ALPHANUMERIC_CHARSET;

/// A segment of character/binary/control data in a QR Code symbol.
///
/// Instances are immutable. The factories pack text or bytes into the
/// mode-specific payload; the payload excludes the mode indicator and the
/// character count header, which the encoder writes per version. The
/// low-level `raw` constructor accepts a pre-packed payload, which is how
/// callers supply kanji data (13 bits per character) without this crate
/// doing any Shift-JIS analysis.
///
/// Segments impose no length restrictions of their own, but QR Codes do:
/// even in the most favorable conditions a symbol holds at most 7089
/// characters.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Segment {
    mode: Mode,
    num_chars: usize,
    bits: BitBuffer,
}

impl Segment {
    /// Packs binary data as a byte mode segment. All byte slices are
    /// acceptable; any text can be UTF-8 encoded and packed this way.
    pub fn bytes(data: &[u8]) -> Self {
        let mut bits = BitBuffer::with_capacity(data.len() * 8);
        for &b in data {
            bits.push_bits(u32::from(b), 8);
        }
        Segment::raw(Mode::Byte, data.len(), bits)
    }

    /// Packs a string of decimal digits as a numeric mode segment:
    /// 10 bits per group of 3 digits, 7 or 4 bits for a 2- or 1-digit
    /// remainder.
    ///
    /// Fails with `NotNumeric` unless every character is in 0-9.
    pub fn numeric(text: &str) -> Result<Self, QrError> {
        if !Segment::is_numeric(text) {
            return Err(QrError::NotNumeric);
        }
        Ok(Segment::pack_numeric(text))
    }

    /// Packs text as an alphanumeric mode segment: 11 bits per character
    /// pair (45·a + b), 6 bits for a trailing single.
    ///
    /// Fails with `NotAlphanumeric` unless every character is a digit, an
    /// uppercase letter, or one of space $ % * + - . / :
    pub fn alphanumeric(text: &str) -> Result<Self, QrError> {
        if !Segment::is_alphanumeric(text) {
            return Err(QrError::NotAlphanumeric);
        }
        Ok(Segment::pack_alphanumeric(text))
    }

    /// Builds an Extended Channel Interpretation designator segment.
    ///
    /// The assignment value is written in 8, 16, or 24 bits depending on
    /// magnitude; values of 1,000,000 and above fail with `EciOutOfRange`.
    /// ECI segments have a character count of zero.
    pub fn eci(assign_value: u32) -> Result<Self, QrError> {
        let mut bits = BitBuffer::with_capacity(24);
        if assign_value < 1 << 7 {
            bits.push_bits(assign_value, 8);
        } else if assign_value < 1 << 14 {
            bits.push_bits(0b10, 2);
            bits.push_bits(assign_value, 14);
        } else if assign_value < 1_000_000 {
            bits.push_bits(0b110, 3);
            bits.push_bits(assign_value, 21);
        } else {
            return Err(QrError::EciOutOfRange(assign_value));
        }
        Ok(Segment::raw(Mode::Eci, 0, bits))
    }

    /// Returns zero or more segments representing the given text, using
    /// the densest single mode that covers it: numeric, then
    /// alphanumeric, then UTF-8 bytes. Kanji and ECI segments are never
    /// produced automatically.
    pub fn make_segments(text: &str) -> Vec<Self> {
        if text.is_empty() {
            vec![]
        } else if Segment::is_numeric(text) {
            vec![Segment::pack_numeric(text)]
        } else if Segment::is_alphanumeric(text) {
            vec![Segment::pack_alphanumeric(text)]
        } else {
            vec![Segment::bytes(text.as_bytes())]
        }
    }

    /// Creates a segment from a pre-packed payload.
    ///
    /// The character count must agree with the mode and payload length,
    /// but the constraint isn't checked.
    pub fn raw(mode: Mode, num_chars: usize, bits: BitBuffer) -> Self {
        Segment {
            mode,
            num_chars,
            bits,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn num_chars(&self) -> usize {
        self.num_chars
    }

    /// The mode-specific payload bits.
    pub fn bits(&self) -> &BitBuffer {
        &self.bits
    }

    /// The number of bits needed to encode the given segments at the
    /// given version, including each segment's mode indicator and
    /// character count header. None if some segment has too many
    /// characters for its count field, or the total overflows.
    pub fn total_bits(segs: &[Self], version: Version) -> Option<usize> {
        let mut result: usize = 0;
        for seg in segs {
            let ccbits = seg.mode.char_count_bits(version);
            if let Some(limit) = 1usize.checked_shl(ccbits.into()) {
                if seg.num_chars >= limit {
                    return None;
                }
            }
            result = result.checked_add(4 + usize::from(ccbits))?;
            result = result.checked_add(seg.bits.len())?;
        }
        Some(result)
    }

    /// Tests whether every character is a decimal digit.
    pub fn is_numeric(text: &str) -> bool {
        text.chars().all(|c| c.is_ascii_digit())
    }

    /// Tests whether every character is in the alphanumeric mode set.
    pub fn is_alphanumeric(text: &str) -> bool {
        text.chars().all(|c| ALPHANUMERIC_CHARSET.contains(c))
    }

    fn pack_numeric(text: &str) -> Self {
        let mut bits = BitBuffer::with_capacity(text.len() * 10 / 3 + 7);
        let mut accum: u32 = 0;
        let mut count: u8 = 0;
        for b in text.bytes() {
            accum = accum * 10 + u32::from(b - b'0');
            count += 1;
            if count == 3 {
                bits.push_bits(accum, 10);
                accum = 0;
                count = 0;
            }
        }
        if count > 0 {
            // 1 or 2 digits remaining
            bits.push_bits(accum, count * 3 + 1);
        }
        Segment::raw(Mode::Numeric, text.len(), bits)
    }

    fn pack_alphanumeric(text: &str) -> Self {
        let mut bits = BitBuffer::with_capacity(text.len() * 11 / 2 + 6);
        let mut accum: u32 = 0;
        let mut count: u8 = 0;
        for c in text.chars() {
            let i = ALPHANUMERIC_CHARSET
                .find(c)
                .expect("characters were validated") as u32;
            accum = accum * 45 + i;
            count += 1;
            if count == 2 {
                bits.push_bits(accum, 11);
                accum = 0;
                count = 0;
            }
        }
        if count > 0 {
            // 1 character remaining
            bits.push_bits(accum, 6);
        }
        Segment::raw(Mode::Alphanumeric, text.len(), bits)
    }
}
