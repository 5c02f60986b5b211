//! End-to-end tests for the (n, k) Reed-Solomon codec, covering the
//! classic (255, 223) configuration plus heavily-parity and short codes.

use pretty_assertions::assert_eq;
use rand::Rng;
use rs_codec::RsCodec;

#[test]
fn valid_codeword_verifies() {
    let codec = RsCodec::new(255, 223).unwrap();
    let code = codec.encode(b"Hello, world!").unwrap();
    assert!(codec.verify(&code));
}

#[test]
fn any_single_byte_flip_invalidates() {
    let codec = RsCodec::new(255, 223).unwrap();
    let code = codec
        .encode(b"Hello, world! This is a test message, to be encoded, and verified.")
        .unwrap();

    for i in 0..code.len() {
        let mut bad = code.clone();
        bad[i] ^= 0xFF;
        assert!(!codec.verify(&bad), "flip at {i} still verified");
    }
}

#[test]
fn decode_without_errors_returns_the_message() {
    let codec = RsCodec::new(255, 223).unwrap();
    let message = b"Hello, world! This is a long string";
    let code = codec.encode(message).unwrap();
    assert_eq!(codec.decode(&code).unwrap(), message);
}

#[test]
fn decode_strips_and_decode_padded_keeps_zero_padding() {
    let codec = RsCodec::new(255, 223).unwrap();
    let message = b"Hello, world! This is a long string";
    let mut padded = vec![0u8; 223 - message.len()];
    padded.extend_from_slice(message);

    let code = codec.encode(&padded).unwrap();
    assert_eq!(code.len(), 255);

    let mut corrupted = code.clone();
    corrupted[5] = 0x50;

    assert_eq!(codec.decode(&code).unwrap(), message);
    assert_eq!(codec.decode(&corrupted).unwrap(), message);
    assert_eq!(codec.decode_padded(&code).unwrap(), padded);
    assert_eq!(codec.decode_padded(&corrupted).unwrap(), padded);
}

#[test]
fn single_error_decodes_at_every_position() {
    let codec = RsCodec::new(255, 223).unwrap();
    let message = b"Hello, world! This is a long string";
    let code = codec.encode(message).unwrap();

    for i in 0..code.len() {
        let mut received = code.clone();
        received[i] = received[i].wrapping_add(50);
        assert_eq!(codec.decode(&received).unwrap(), message, "error at {i}");
    }
}

#[test]
fn sixteen_errors_decode() {
    let codec = RsCodec::new(255, 223).unwrap();
    let message = b"Hello, world! This is a long string";
    let code = codec.encode(message).unwrap();

    let errors = [5, 6, 12, 13, 38, 40, 42, 47, 50, 57, 58, 59, 60, 61, 62, 65];
    let mut received = code.clone();
    for &e in &errors {
        received[e] = received[e].wrapping_add(50);
    }
    assert_eq!(codec.decode(&received).unwrap(), message);
}

#[test]
fn rs_255_13_tolerates_121_errors() {
    let codec = RsCodec::new(255, 13).unwrap();
    let message = b"Hello, world!";
    let code = codec.encode(message).unwrap();
    assert_eq!(code.len(), 255);
    assert!(codec.verify(&code));
    assert_eq!(codec.decode(&code).unwrap(), message);

    let changes = [
        1, 4, 5, 6, 9, 10, 14, 15, 19, 20, 21, 24, 26, 30, 32, 34, 38, 39, 40, 42, 43, 44, 45, 47,
        49, 50, 53, 59, 60, 62, 65, 67, 68, 69, 71, 73, 74, 79, 80, 81, 85, 89, 90, 93, 94, 95,
        100, 101, 105, 106, 107, 110, 112, 117, 120, 121, 123, 126, 127, 132, 133, 135, 136, 138,
        143, 149, 150, 152, 154, 158, 159, 161, 162, 163, 165, 166, 168, 169, 170, 174, 176, 177,
        178, 179, 182, 186, 191, 192, 193, 196, 197, 198, 200, 203, 206, 208, 209, 210, 211, 212,
        216, 219, 222, 224, 225, 226, 228, 230, 232, 234, 235, 237, 238, 240, 242, 244, 245, 248,
        249, 250, 253,
    ];
    assert_eq!(changes.len(), codec.error_capacity());

    let mut received = code.clone();
    for &pos in &changes {
        received[pos] = ((received[pos] as u16 + 50) % 255) as u8;
    }
    assert_eq!(codec.decode(&received).unwrap(), message);
}

#[test]
fn rs_30_10_tolerates_10_errors() {
    let codec = RsCodec::new(30, 10).unwrap();
    let message = b"Hello, wor";
    let code = codec.encode(message).unwrap();
    assert_eq!(code.len(), 30);
    assert!(codec.verify(&code));
    assert_eq!(codec.decode(&code).unwrap(), message);

    let changes = [0, 1, 2, 4, 7, 10, 14, 18, 22, 27];
    let mut received = code.clone();
    for &pos in &changes {
        received[pos] = ((received[pos] as u16 + 50) % 255) as u8;
    }
    assert_eq!(codec.decode(&received).unwrap(), message);
}

#[test]
fn random_words_round_trip_within_capacity() {
    let mut rng = rand::rng();

    for _ in 0..25 {
        let n = rng.random_range(4..=60usize);
        let k = rng.random_range(1..n);
        let codec = RsCodec::new(n, k).unwrap();

        let message: Vec<u8> = (0..k).map(|_| rng.random()).collect();
        let code = codec.encode(&message).unwrap();
        assert!(codec.verify(&code));

        let mut received = code.clone();
        let mut positions: Vec<usize> = (0..n).collect();
        for _ in 0..codec.error_capacity() {
            let idx = rng.random_range(0..positions.len());
            let pos = positions.swap_remove(idx);
            received[pos] ^= rng.random_range(1..=255u8);
        }
        assert_eq!(
            codec.decode_padded(&received).unwrap(),
            message,
            "n={n} k={k}"
        );
    }
}
