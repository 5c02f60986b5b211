use image::ImageError;
use thiserror::Error;

/// Errors from rendering a symbol to an output format.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RenderError {
    #[error("image error: {0}")]
    Image(#[from] ImageError),

    #[error("module scale must be at least 1")]
    ZeroScale,
}
