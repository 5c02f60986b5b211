use crate::error::RenderError;
use crate::RenderOptions;
use image::imageops::{resize, FilterType};
use image::{DynamicImage, ImageBuffer, ImageFormat, Luma};
use qr_gen::QrSymbol;
use std::io::Cursor;

/// Renders a symbol to PNG bytes: black modules on white, with the
/// quiet zone and per-module scaling taken from the options.
pub fn to_png(qr: &QrSymbol, options: &RenderOptions) -> Result<Vec<u8>, RenderError> {
    if options.scale == 0 {
        return Err(RenderError::ZeroScale);
    }
    let border = options.border as i32;
    let dimension = (qr.size() + border * 2) as u32;

    let base: ImageBuffer<Luma<u8>, Vec<u8>> = ImageBuffer::from_fn(dimension, dimension, |x, y| {
        if qr.module(x as i32 - border, y as i32 - border) {
            Luma([0u8])
        } else {
            Luma([255u8])
        }
    });
    let scaled = resize(
        &base,
        dimension * options.scale,
        dimension * options.scale,
        FilterType::Nearest,
    );

    let mut cursor = Cursor::new(Vec::new());
    DynamicImage::ImageLuma8(scaled).write_to(&mut cursor, ImageFormat::Png)?;
    Ok(cursor.into_inner())
}
