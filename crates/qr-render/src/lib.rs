//! Reference renderers for `qr-gen` symbols.
//!
//! These are deliberately simple surfaces over the raw module grid:
//! console art for terminals, an SVG string, and a PNG byte stream.
//! All of them read the quiet zone straight off `QrSymbol::module`,
//! which returns light for out-of-range coordinates.

mod error;
mod png;
mod text;

pub use error::*;
pub use png::*;
pub use text::*;

use serde::{Deserialize, Serialize};

/// Settings shared by the pixel-oriented renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderOptions {
    /// Quiet zone width in modules.
    pub border: u32,
    /// Output pixels per module.
    pub scale: u32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            border: 4,
            scale: 8,
        }
    }
}
