//! Decoding image bytes into bitmaps and encoding bitmaps as PNG.

use std::io::Cursor;

use image::{ImageFormat, RgbaImage};
use tint_core::{Bitmap, BitmapError};

use crate::error::{CodecError, Result};

/// Decode PNG, JPEG, WebP or GIF bytes into an RGBA bitmap.
///
/// Formats without alpha come back fully opaque. Animated GIFs yield their
/// first frame.
pub fn decode(bytes: &[u8]) -> Result<Bitmap> {
    let img = image::load_from_memory(bytes).map_err(CodecError::Decode)?;
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();

    tracing::debug!(width, height, "decoded image");
    Ok(Bitmap::new(width, height, rgba.into_raw())?)
}

/// Encode a bitmap as PNG bytes.
pub fn encode_png(bitmap: &Bitmap) -> Result<Vec<u8>> {
    let (width, height) = bitmap.dimensions();
    let img = RgbaImage::from_raw(width, height, bitmap.as_bytes().to_vec()).ok_or(
        BitmapError::ShapeMismatch {
            width,
            height,
            expected: bitmap.len() * tint_core::CHANNELS,
            actual: bitmap.as_bytes().len(),
        },
    )?;

    let mut png = Vec::new();
    img.write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
        .map_err(CodecError::Encode)?;
    Ok(png)
}
