//! Generates QR Code symbols from text strings and byte arrays.
//!
//! Supports all 40 versions (sizes) and all 4 error correction levels of
//! the QR Code Model 2 standard, with numeric, alphanumeric, byte, kanji,
//! and ECI segment modes. The output is the raw module grid; rendering to
//! console art, SVG, or PNG lives in the companion `qr-render` crate.
//!
//! Simple operation:
//!
//! ```
//! use qr_gen::{Ecc, QrSymbol};
//!
//! let qr = QrSymbol::encode_text("Hello, world!", Ecc::Low).unwrap();
//! for y in 0..qr.size() {
//!     for x in 0..qr.size() {
//!         let _dark = qr.module(x, y);
//!     }
//! }
//! ```
//!
//! Manual operation, with explicit segments, a pinned version range, and
//! a forced mask:
//!
//! ```
//! use qr_gen::{Ecc, Mask, QrSymbol, Segment, Version};
//!
//! let segs = Segment::make_segments("3141592653589793238462643383");
//! let qr = QrSymbol::encode_segments_advanced(
//!     &segs, Ecc::High, Version::new(5), Version::new(5), Some(Mask::new(2)), false).unwrap();
//! assert_eq!(qr.version().value(), 5);
//! ```

mod bits;
mod encode;
mod error;
mod grid;
mod mask;
mod segment;
mod symbol;
mod tables;
mod types;

pub use bits::*;
pub use error::*;
pub use mask::{Mask, MASK_PATTERNS};
pub use segment::*;
pub use symbol::*;
pub use tables::{ECC_CODEWORDS_PER_BLOCK, NUM_ERROR_CORRECTION_BLOCKS};
pub use types::*;

/// The set of all legal characters in alphanumeric mode; each character
/// maps to its index in the string.
pub static ALPHANUMERIC_CHARSET: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ $%*+-./:";
