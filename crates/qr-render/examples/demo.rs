//! Computes a set of demonstration QR Codes and prints them to the
//! console, plus the SVG code for the first one as a sample.

use qr_gen::{BitBuffer, Ecc, Mask, Mode, QrSymbol, Segment, Version};
use qr_render::{to_console_string, to_svg_string};

fn main() {
    do_basic_demo();
    do_variety_demo();
    do_segment_demo();
    do_mask_demo();
}

/*---- Demo suite ----*/

// Creates a single QR Code, then prints it to the console.
fn do_basic_demo() {
    let qr = QrSymbol::encode_text("Hello, world!", Ecc::Low).unwrap();
    print_qr(&qr);
    println!("{}", to_svg_string(&qr, 4));
}

// Exercises different encoding features, printing each symbol.
fn do_variety_demo() {
    // Numeric mode encoding (3.33 bits per digit).
    let qr = QrSymbol::encode_text("11220910000042", Ecc::Medium).unwrap();
    print_qr(&qr);

    // Alphanumeric mode encoding (5.5 bits per character).
    let qr = QrSymbol::encode_text(
        "DOLLAR-AMOUNT:$39.87 PERCENTAGE:100.00% OPERATIONS:+-*/",
        Ecc::High,
    )
    .unwrap();
    print_qr(&qr);

    // Unicode text as UTF-8.
    let qr = QrSymbol::encode_text("こんにちwa、世界！ αβγδ", Ecc::Quartile).unwrap();
    print_qr(&qr);

    // Kanji mode, with the payload pre-packed at 13 bits per character.
    let mut bits = BitBuffer::new();
    for &ch in &[0x0135u32, 0x0830, 0x0FC0, 0x05D7, 0x0AB7] {
        bits.push_bits(ch, 13);
    }
    let seg = Segment::raw(Mode::Kanji, 5, bits);
    let qr = QrSymbol::encode_segments(&[seg], Ecc::Low).unwrap();
    print_qr(&qr);
}

// Creates QR Codes with manually specified segments for compactness.
fn do_segment_demo() {
    // Illustration "silver": alphanumeric prefix, numeric tail.
    let silver0 = "THE SQUARE ROOT OF 2 IS 1.";
    let silver1 = "41421356237309504880168872420969807856967187537694807317667973799";
    let qr = QrSymbol::encode_text(&[silver0, silver1].concat(), Ecc::Low).unwrap();
    print_qr(&qr);

    let segs = [
        Segment::alphanumeric(silver0).unwrap(),
        Segment::numeric(silver1).unwrap(),
    ];
    let qr = QrSymbol::encode_segments(&segs, Ecc::Low).unwrap();
    print_qr(&qr);

    // Illustration "golden": a byte, numeric, alphanumeric mix.
    let golden0 = "Golden ratio φ = 1.";
    let golden1 = "6180339887498948482045868343656381177203091798057628621354486227052604628189024497072072041893911374";
    let golden2 = "......";
    let qr = QrSymbol::encode_text(&[golden0, golden1, golden2].concat(), Ecc::Low).unwrap();
    print_qr(&qr);

    let segs = [
        Segment::bytes(golden0.as_bytes()),
        Segment::numeric(golden1).unwrap(),
        Segment::alphanumeric(golden2).unwrap(),
    ];
    let qr = QrSymbol::encode_segments(&segs, Ecc::Low).unwrap();
    print_qr(&qr);
}

// Creates QR Codes with the same contents but different mask patterns.
fn do_mask_demo() {
    let segs = Segment::make_segments("https://www.example.com/");
    let auto = QrSymbol::encode_segments(&segs, Ecc::High).unwrap();
    print_qr(&auto);
    print_qr(&encode_with_mask(&segs, Ecc::High, 3));

    // Chinese text as UTF-8.
    let segs = Segment::make_segments(
        "維基百科（Wikipedia，聆聽i/ˌwɪkᵻˈpiːdi.ə/）\
         是一個自由內容、公開編輯且多語言的網路百科全書協作計畫",
    );
    for m in [0u8, 1, 5, 7] {
        print_qr(&encode_with_mask(&segs, Ecc::Medium, m));
    }
}

fn encode_with_mask(segs: &[Segment], ecl: Ecc, mask: u8) -> QrSymbol {
    QrSymbol::encode_segments_advanced(
        segs,
        ecl,
        Version::MIN,
        Version::MAX,
        Some(Mask::new(mask)),
        true,
    )
    .unwrap()
}

// Prints the given symbol with a 4-module quiet zone.
fn print_qr(qr: &QrSymbol) {
    println!("{}", to_console_string(qr, 4));
}
