use crate::bits::BitBuffer;
use crate::error::QrError;
use crate::grid::Grid;
use crate::mask::Mask;
use crate::segment::Segment;
use crate::symbol::QrSymbol;
use crate::tables::{self, ECC_CODEWORDS_PER_BLOCK, NUM_ERROR_CORRECTION_BLOCKS};
use crate::types::{Ecc, Version};
use galois::{Gf256, Poly};

// The full encoding pipeline behind the public factory functions:
// version selection, level boosting, bit stream assembly, and symbol
// construction.
pub(crate) fn encode(
    segs: &[Segment],
    mut ecl: Ecc,
    min_version: Version,
    max_version: Version,
    mask: Option<Mask>,
    boost_ecl: bool,
) -> Result<QrSymbol, QrError> {
    if min_version > max_version {
        return Err(QrError::InvalidVersionRange {
            min: min_version.value(),
            max: max_version.value(),
        });
    }

    // Find the smallest version whose data capacity fits the segments.
    let mut version = min_version;
    let used_bits = loop {
        let capacity_bits = tables::data_codewords(version, ecl) * 8;
        let used = Segment::total_bits(segs, version);
        match used {
            Some(n) if n <= capacity_bits => break n,
            _ if version >= max_version => {
                return Err(match used {
                    Some(n) => QrError::DataTooLong {
                        len: n,
                        capacity: capacity_bits,
                    },
                    None => QrError::SegmentTooLong,
                });
            }
            _ => version = Version::new(version.value() + 1),
        }
    };

    // Raise the error correction level as far as the chosen version
    // still accommodates; capacity shrinks monotonically with level.
    if boost_ecl {
        for stronger in [Ecc::Medium, Ecc::Quartile, Ecc::High] {
            if used_bits <= tables::data_codewords(version, stronger) * 8 {
                ecl = stronger;
            }
        }
    }

    // Concatenate the segments into the data bit stream.
    let capacity_bits = tables::data_codewords(version, ecl) * 8;
    let mut bb = BitBuffer::with_capacity(capacity_bits);
    for seg in segs {
        bb.push_bits(seg.mode().indicator(), 4);
        bb.push_bits(seg.num_chars() as u32, seg.mode().char_count_bits(version));
        bb.extend(seg.bits());
    }
    debug_assert_eq!(bb.len(), used_bits);

    // Terminator (at most 4 zero bits), then pad to a byte boundary.
    let terminator = (capacity_bits - bb.len()).min(4);
    bb.push_bits(0, terminator as u8);
    bb.push_bits(0, (bb.len().wrapping_neg() & 7) as u8);
    debug_assert_eq!(bb.len() % 8, 0);

    // Alternating pad bytes fill the rest of the capacity.
    for pad in [0xECu32, 0x11].into_iter().cycle() {
        if bb.len() >= capacity_bits {
            break;
        }
        bb.push_bits(pad, 8);
    }

    Ok(assemble(version, ecl, &bb.into_bytes(), mask))
}

// Builds the symbol from finished data codewords: function patterns,
// ECC interleaving, zigzag placement, then mask selection. With no
// forced mask, all eight are trialed (apply, redraw format bits, score,
// undo) and the lowest penalty wins, ties to the lowest mask number.
pub(crate) fn assemble(
    version: Version,
    ecl: Ecc,
    data: &[u8],
    forced: Option<Mask>,
) -> QrSymbol {
    let mut grid = Grid::new(version);
    grid.draw_function_patterns(version, ecl);
    grid.place_codewords(&interleave_with_ecc(data, version, ecl));

    let mask = forced.unwrap_or_else(|| {
        let mut best = Mask::new(0);
        let mut best_score = i32::MAX;
        for m in 0..8 {
            let m = Mask::new(m);
            grid.apply_mask(m);
            grid.draw_format_bits(ecl, m);
            let score = grid.penalty_score();
            if score < best_score {
                best = m;
                best_score = score;
            }
            grid.apply_mask(m); // XOR undoes the trial
        }
        best
    });
    grid.apply_mask(mask);
    grid.draw_format_bits(ecl, mask);

    QrSymbol::from_parts(version, ecl, mask, grid.into_modules())
}

// Splits the data codewords into blocks, appends each block's ECC, and
// interleaves the bytes column by column. Short blocks carry a phantom
// byte so every block has the same column count; the phantom column is
// skipped on output.
pub(crate) fn interleave_with_ecc(data: &[u8], version: Version, ecl: Ecc) -> Vec<u8> {
    assert_eq!(
        data.len(),
        tables::data_codewords(version, ecl),
        "wrong data codeword count"
    );

    let num_blocks = tables::table_get(&NUM_ERROR_CORRECTION_BLOCKS, version, ecl);
    let ecc_len = tables::table_get(&ECC_CODEWORDS_PER_BLOCK, version, ecl);
    let raw_codewords = tables::raw_data_modules(version) / 8;
    let num_short = num_blocks - raw_codewords % num_blocks;
    let short_len = raw_codewords / num_blocks;

    let generator = block_generator(ecc_len);
    let mut blocks: Vec<Vec<u8>> = Vec::with_capacity(num_blocks);
    let mut consumed = 0usize;
    for i in 0..num_blocks {
        let data_len = short_len - ecc_len + usize::from(i >= num_short);
        let mut block = data[consumed..consumed + data_len].to_vec();
        consumed += data_len;
        let ecc = block_ecc(&block, &generator);
        if i < num_short {
            block.push(0);
        }
        block.extend_from_slice(&ecc);
        blocks.push(block);
    }

    let mut result = Vec::with_capacity(raw_codewords);
    for col in 0..=short_len {
        for (i, block) in blocks.iter().enumerate() {
            if col != short_len - ecc_len || i >= num_short {
                result.push(block[col]);
            }
        }
    }
    assert_eq!(result.len(), raw_codewords, "interleave length mismatch");
    result
}

// The block generator polynomial (x - 2^0)(x - 2^1)...(x - 2^(deg-1));
// 2 generates the field, and QR block ECC starts its roots at 2^0.
fn block_generator(degree: usize) -> Poly {
    let mut g = Poly::one();
    let mut root = Gf256::ONE;
    for _ in 0..degree {
        g = &g * &Poly::new(vec![Gf256::ONE, root]);
        root = root * Gf256(2);
    }
    g
}

// A block's ECC bytes: the remainder of the block data shifted left by
// the ECC length, divided by the generator.
fn block_ecc(block: &[u8], generator: &Poly) -> Vec<u8> {
    Poly::from_bytes(block)
        .shift(generator.degree())
        .rem(generator)
        .expect("generator polynomial is non-zero")
        .to_bytes_padded(generator.degree())
}
