//! End-to-end behavior of the QR encoder: version selection, level
//! boosting, mask handling, and the structural invariants of finished
//! symbols.

use pretty_assertions::assert_eq;
use qr_gen::{BitBuffer, Ecc, Mask, Mode, QrError, QrSymbol, Segment, Version};

#[test]
fn hello_world_fits_version_1() {
    let qr = QrSymbol::encode_text("Hello, world!", Ecc::Low).unwrap();
    assert_eq!(qr.version(), Version::new(1));
    assert_eq!(qr.size(), 21);
    // 116 data bits fit the Medium capacity at version 1, so the level
    // is boosted without growing the symbol.
    assert_eq!(qr.error_correction_level(), Ecc::Medium);
}

#[test]
fn boosting_can_be_disabled() {
    let segs = Segment::make_segments("Hello, world!");
    let qr = QrSymbol::encode_segments_advanced(
        &segs,
        Ecc::Low,
        Version::MIN,
        Version::MAX,
        None,
        false,
    )
    .unwrap();
    assert_eq!(qr.error_correction_level(), Ecc::Low);
}

#[test]
fn numeric_text_stays_version_1() {
    let qr = QrSymbol::encode_text("11220910000042", Ecc::Medium).unwrap();
    assert_eq!(qr.version(), Version::new(1));
    let segs = Segment::make_segments("11220910000042");
    assert_eq!(segs.len(), 1);
    assert_eq!(segs[0].mode(), Mode::Numeric);
}

#[test]
fn alphanumeric_text_uses_a_single_segment() {
    let text = "DOLLAR-AMOUNT:$39.87 PERCENTAGE:100.00% OPERATIONS:+-*/";
    let segs = Segment::make_segments(text);
    assert_eq!(segs.len(), 1);
    assert_eq!(segs[0].mode(), Mode::Alphanumeric);

    let qr = QrSymbol::encode_text(text, Ecc::High).unwrap();
    assert_eq!(qr.version(), Version::new(5));
    assert_eq!(qr.error_correction_level(), Ecc::High);
}

#[test]
fn version_search_respects_the_minimum() {
    let segs = Segment::make_segments("Hello, world!");
    let qr = QrSymbol::encode_segments_advanced(
        &segs,
        Ecc::Low,
        Version::new(3),
        Version::MAX,
        None,
        true,
    )
    .unwrap();
    assert_eq!(qr.version(), Version::new(3));
}

#[test]
fn data_too_long_reports_the_shortfall() {
    let err = QrSymbol::encode_binary(&vec![0u8; 3000], Ecc::Low).unwrap_err();
    match err {
        QrError::DataTooLong { len, capacity } => {
            assert_eq!(len, 4 + 16 + 3000 * 8);
            assert_eq!(capacity, 2956 * 8);
        }
        other => panic!("unexpected error {other:?}"),
    }

    let segs = Segment::make_segments("this will not fit version one at high");
    let err = QrSymbol::encode_segments_advanced(
        &segs,
        Ecc::High,
        Version::MIN,
        Version::MIN,
        None,
        true,
    )
    .unwrap_err();
    assert!(matches!(err, QrError::DataTooLong { .. }));
}

#[test]
fn inverted_version_range_is_rejected() {
    let err = QrSymbol::encode_segments_advanced(
        &[],
        Ecc::Low,
        Version::new(2),
        Version::new(1),
        None,
        true,
    )
    .unwrap_err();
    assert_eq!(err, QrError::InvalidVersionRange { min: 2, max: 1 });
}

#[test]
fn empty_text_still_produces_a_symbol() {
    let qr = QrSymbol::encode_text("", Ecc::Low).unwrap();
    assert_eq!(qr.version(), Version::new(1));
}

#[test]
fn encoding_is_deterministic() {
    let a = QrSymbol::encode_text("stability check", Ecc::Quartile).unwrap();
    let b = QrSymbol::encode_text("stability check", Ecc::Quartile).unwrap();
    assert_eq!(a, b);
}

#[test]
fn automatic_mask_agrees_with_forcing_it() {
    let segs = Segment::make_segments("https://www.example.com/");
    let auto =
        QrSymbol::encode_segments_advanced(&segs, Ecc::High, Version::MIN, Version::MAX, None, true)
            .unwrap();
    let forced = QrSymbol::encode_segments_advanced(
        &segs,
        Ecc::High,
        Version::MIN,
        Version::MAX,
        Some(auto.mask()),
        true,
    )
    .unwrap();
    assert_eq!(auto, forced);
}

#[test]
fn forced_masks_are_reported_back() {
    let segs = Segment::make_segments("MASKS");
    for m in 0..8 {
        let qr = QrSymbol::encode_segments_advanced(
            &segs,
            Ecc::Low,
            Version::MIN,
            Version::MAX,
            Some(Mask::new(m)),
            true,
        )
        .unwrap();
        assert_eq!(qr.mask(), Mask::new(m));
    }
}

#[test]
fn function_patterns_survive_every_mask() {
    let segs = Segment::make_segments("function pattern check");
    let symbols: Vec<QrSymbol> = (0..8)
        .map(|m| {
            QrSymbol::encode_segments_advanced(
                &segs,
                Ecc::Low,
                Version::MIN,
                Version::MAX,
                Some(Mask::new(m)),
                true,
            )
            .unwrap()
        })
        .collect();

    let size = symbols[0].size();
    // Finder cores and separators.
    for qr in &symbols {
        for &(cx, cy) in &[(3, 3), (size - 4, 3), (3, size - 4)] {
            for dy in -3..=3i32 {
                for dx in -3..=3i32 {
                    let expect = dx.abs().max(dy.abs()) != 2;
                    assert_eq!(qr.module(cx + dx, cy + dy), expect, "({cx},{cy})+({dx},{dy})");
                }
            }
        }
        // Timing patterns between the finders.
        for i in 8..size - 8 {
            assert_eq!(qr.module(i, 6), i % 2 == 0);
            assert_eq!(qr.module(6, i), i % 2 == 0);
        }
        // The module above the bottom-left finder is always dark.
        assert!(qr.module(8, size - 8));
    }
}

#[test]
fn out_of_range_modules_read_light() {
    let qr = QrSymbol::encode_text("border", Ecc::Low).unwrap();
    assert!(!qr.module(-1, 0));
    assert!(!qr.module(0, -1));
    assert!(!qr.module(qr.size(), 0));
    assert!(!qr.module(0, qr.size()));
}

#[test]
fn eci_and_byte_segments_compose() {
    let segs = [Segment::eci(26).unwrap(), Segment::bytes("héllo".as_bytes())];
    let qr = QrSymbol::encode_segments(&segs, Ecc::Low).unwrap();
    assert_eq!(qr.version(), Version::new(1));
}

#[test]
fn raw_kanji_segments_encode() {
    // Two characters, pre-packed at 13 bits each.
    let mut bits = BitBuffer::new();
    bits.push_bits(0x01AB, 13);
    bits.push_bits(0x0E14, 13);
    let seg = Segment::raw(Mode::Kanji, 2, bits);
    let qr = QrSymbol::encode_segments(&[seg], Ecc::Quartile).unwrap();
    assert_eq!(qr.version(), Version::new(1));
}

#[test]
fn large_symbols_carry_version_information() {
    let qr = QrSymbol::encode_binary(&vec![0xA5u8; 200], Ecc::Low).unwrap();
    assert!(qr.version() >= Version::new(7));
    // Bit 0 of the version info sits at (size-11, 0) and equals the
    // version's lowest bit; spot check a correlated corner cell exists.
    assert_eq!(qr.size(), qr.version().value() as i32 * 4 + 17);
}
