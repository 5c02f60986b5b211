//! A configurable Reed-Solomon codec over GF(2^8).
//!
//! `RsCodec::new(n, k)` builds a systematic (n,k) code: codewords are n
//! bytes, of which k carry the message and n-k carry parity. Up to
//! (n-k)/2 corrupted bytes per codeword can be corrected. The classic
//! deep-space configuration is `RsCodec::new(255, 223)`.
//!
//! Messages shorter than k bytes are treated as left-zero-padded, and
//! `decode` strips those leading zero bytes again. That round trip is
//! lossy for binary data whose leading bytes may legitimately be zero;
//! pad such data to k bytes per block yourself, or use `decode_padded`.
//!
//! ```
//! use rs_codec::RsCodec;
//!
//! let codec = RsCodec::new(255, 223).unwrap();
//! let mut received = codec.encode(b"Hello, world!").unwrap();
//! received[0] ^= 0xFF;
//! received[10] ^= 0xFF;
//! assert_eq!(codec.decode(&received).unwrap(), b"Hello, world!");
//! ```

mod codec;
mod error;

pub use codec::*;
pub use error::*;
