use crate::types::{Ecc, Version};

/// ECC codewords per block, indexed [ecc.ordinal()][version]. Index 0 is
/// padding and holds an illegal value. Values are from ISO/IEC 18004.
pub static ECC_CODEWORDS_PER_BLOCK: [[i8; 41]; 4] = [
    // Version:
    //0,  1,  2,  3,  4,  5,  6,  7,  8,  9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 25, 26, 27, 28, 29, 30, 31, 32, 33, 34, 35, 36, 37, 38, 39, 40
    [
        -1, 7, 10, 15, 20, 26, 18, 20, 24, 30, 18, 20, 24, 26, 30, 22, 24, 28, 30, 28, 28, 28, 28,
        30, 30, 26, 28, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
    ], // Low
    [
        -1, 10, 16, 26, 18, 24, 16, 18, 22, 22, 26, 30, 22, 22, 24, 24, 28, 28, 26, 26, 26, 26, 28,
        28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28,
    ], // Medium
    [
        -1, 13, 22, 18, 26, 18, 24, 18, 22, 20, 24, 28, 26, 24, 20, 30, 24, 28, 28, 26, 30, 28, 30,
        30, 30, 30, 28, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
    ], // Quartile
    [
        -1, 17, 28, 22, 16, 22, 28, 26, 26, 24, 28, 24, 28, 22, 24, 24, 30, 28, 28, 26, 28, 30, 24,
        30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
    ], // High
];

/// Number of error correction blocks, indexed [ecc.ordinal()][version].
/// Index 0 is padding and holds an illegal value.
pub static NUM_ERROR_CORRECTION_BLOCKS: [[i8; 41]; 4] = [
    // Version:
    //0, 1, 2, 3, 4, 5, 6, 7, 8, 9,10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 25, 26, 27, 28, 29, 30, 31, 32, 33, 34, 35, 36, 37, 38, 39, 40
    [
        -1, 1, 1, 1, 1, 1, 2, 2, 2, 2, 4, 4, 4, 4, 4, 6, 6, 6, 6, 7, 8, 8, 9, 9, 10, 12, 12, 12,
        13, 14, 15, 16, 17, 18, 19, 19, 20, 21, 22, 24, 25,
    ], // Low
    [
        -1, 1, 1, 1, 2, 2, 4, 4, 4, 5, 5, 5, 8, 9, 9, 10, 10, 11, 13, 14, 16, 17, 17, 18, 20, 21,
        23, 25, 26, 28, 29, 31, 33, 35, 37, 38, 40, 43, 45, 47, 49,
    ], // Medium
    [
        -1, 1, 1, 2, 2, 4, 4, 6, 6, 8, 8, 8, 10, 12, 16, 12, 17, 16, 18, 21, 20, 23, 23, 25, 27,
        29, 34, 34, 35, 38, 40, 43, 45, 48, 51, 53, 56, 59, 62, 65, 68,
    ], // Quartile
    [
        -1, 1, 1, 2, 4, 4, 4, 5, 6, 8, 8, 11, 11, 16, 16, 18, 16, 19, 21, 25, 25, 25, 34, 30, 32,
        35, 37, 40, 42, 45, 48, 51, 54, 57, 60, 63, 66, 70, 74, 77, 81,
    ], // High
];

// Looks up a per-version table entry for the given level.
pub(crate) fn table_get(table: &'static [[i8; 41]; 4], ver: Version, ecl: Ecc) -> usize {
    table[ecl.ordinal()][usize::from(ver.value())] as usize
}

// Returns the number of data bits that can be stored at the given version
// after all function modules are excluded. Includes remainder bits, so
// the result need not be a multiple of 8. Range [208, 29648].
pub(crate) fn raw_data_modules(ver: Version) -> usize {
    let size = ver.size() as usize;

    // Start from every module and retire the function patterns one by
    // one: the three 8x8 finder-plus-separator corners, both 15-bit
    // format copies with the always-dark module, and the two timing
    // lines outside those corners.
    let mut modules = size * size;
    modules -= 3 * 8 * 8 + 2 * 15 + 1;
    modules -= 2 * (size - 2 * 8);

    // 5x5 alignment patterns on an n-by-n grid missing its three
    // finder corners; the 2(n-2) patterns centered on a timing line
    // cover five cells each that are already gone.
    let n = alignment_positions(ver).len();
    if n > 0 {
        modules -= 25 * (n * n - 3) - 2 * 5 * (n - 2);
    }

    // Both version information strips.
    if ver.value() >= 7 {
        modules -= 2 * 18;
    }

    debug_assert!((208..=29648).contains(&modules));
    modules
}

// The number of 8-bit data codewords (excluding error correction) at the
// given version and level, with remainder bits discarded.
pub(crate) fn data_codewords(ver: Version, ecl: Ecc) -> usize {
    raw_data_modules(ver) / 8
        - table_get(&ECC_CODEWORDS_PER_BLOCK, ver, ecl)
            * table_get(&NUM_ERROR_CORRECTION_BLOCKS, ver, ecl)
}

// Ascending center positions of the alignment patterns for a version,
// used on both axes. Empty for version 1.
pub(crate) fn alignment_positions(ver: Version) -> &'static [i32] {
    ALIGNMENT_POSITIONS[usize::from(ver.value())]
}

// Alignment pattern centers from the standard's table, one row per
// version with index 0 as padding. Positions always start at 6, end at
// size - 7, and are evenly spaced up to rounding.
static ALIGNMENT_POSITIONS: [&[i32]; 41] = [
    &[],
    &[],
    &[6, 18],
    &[6, 22],
    &[6, 26],
    &[6, 30],
    &[6, 34],
    &[6, 22, 38],
    &[6, 24, 42],
    &[6, 26, 46],
    &[6, 28, 50],
    &[6, 30, 54],
    &[6, 32, 58],
    &[6, 34, 62],
    &[6, 26, 46, 66],
    &[6, 26, 48, 70],
    &[6, 26, 50, 74],
    &[6, 30, 54, 78],
    &[6, 30, 56, 82],
    &[6, 30, 58, 86],
    &[6, 34, 62, 90],
    &[6, 28, 50, 72, 94],
    &[6, 26, 50, 74, 98],
    &[6, 30, 54, 78, 102],
    &[6, 28, 54, 80, 106],
    &[6, 32, 58, 84, 110],
    &[6, 30, 58, 86, 114],
    &[6, 34, 62, 90, 118],
    &[6, 26, 50, 74, 98, 122],
    &[6, 30, 54, 78, 102, 126],
    &[6, 26, 52, 78, 104, 130],
    &[6, 30, 56, 82, 108, 134],
    &[6, 34, 60, 86, 112, 138],
    &[6, 30, 58, 86, 114, 142],
    &[6, 34, 62, 90, 118, 146],
    &[6, 30, 54, 78, 102, 126, 150],
    &[6, 24, 50, 76, 102, 128, 154],
    &[6, 28, 54, 80, 106, 132, 158],
    &[6, 32, 58, 84, 110, 136, 162],
    &[6, 26, 54, 82, 110, 138, 166],
    &[6, 30, 58, 86, 114, 142, 170],
];
