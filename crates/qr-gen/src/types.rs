/// The error correction level in a QR Code symbol.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub enum Ecc {
    /// Tolerates about 7% erroneous codewords.
    Low,
    /// Tolerates about 15% erroneous codewords.
    Medium,
    /// Tolerates about 25% erroneous codewords.
    Quartile,
    /// Tolerates about 30% erroneous codewords.
    High,
}

impl Ecc {
    /// The row index of this level in the per-version ECC tables.
    pub fn ordinal(self) -> usize {
        match self {
            Ecc::Low => 0,
            Ecc::Medium => 1,
            Ecc::Quartile => 2,
            Ecc::High => 3,
        }
    }

    /// The 2-bit value encoded into the format information.
    pub fn format_bits(self) -> u8 {
        match self {
            Ecc::Low => 1,
            Ecc::Medium => 0,
            Ecc::Quartile => 3,
            Ecc::High => 2,
        }
    }
}

/// Describes how a segment's data bits are interpreted.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Mode {
    Numeric,
    Alphanumeric,
    Byte,
    Kanji,
    Eci,
}

impl Mode {
    /// The 4-bit mode indicator written before each segment.
    pub fn indicator(self) -> u32 {
        match self {
            Mode::Numeric => 0x1,
            Mode::Alphanumeric => 0x2,
            Mode::Byte => 0x4,
            Mode::Kanji => 0x8,
            Mode::Eci => 0x7,
        }
    }

    /// The bit width of the character count field at the given version.
    ///
    /// The width steps up at versions 10 and 27. ECI segments have no
    /// character count field, hence width 0.
    pub fn char_count_bits(self, ver: Version) -> u8 {
        let group = usize::from((ver.value() + 7) / 17);
        (match self {
            Mode::Numeric => [10, 12, 14],
            Mode::Alphanumeric => [9, 11, 13],
            Mode::Byte => [8, 16, 16],
            Mode::Kanji => [8, 10, 12],
            Mode::Eci => [0, 0, 0],
        })[group]
    }
}

/// A version number between 1 and 40 (inclusive).
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub struct Version(u8);

impl Version {
    /// The minimum version number supported by the QR Code Model 2 standard.
    pub const MIN: Version = Version(1);

    /// The maximum version number supported by the QR Code Model 2 standard.
    pub const MAX: Version = Version(40);

    /// Creates a version object from the given number.
    ///
    /// Panics if the number is outside the range [1, 40].
    pub fn new(ver: u8) -> Self {
        assert!(
            (Version::MIN.0..=Version::MAX.0).contains(&ver),
            "version number out of range"
        );
        Version(ver)
    }

    /// Returns the value, which is in the range [1, 40].
    pub fn value(self) -> u8 {
        self.0
    }

    /// The symbol width and height in modules: 4·version + 17.
    pub fn size(self) -> i32 {
        i32::from(self.0) * 4 + 17
    }
}
