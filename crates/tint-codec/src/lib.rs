//! Image bytes in, recolored images out.
//!
//! The recolorizer works on decoded RGBA bitmaps. This crate is the thin
//! layer around it that decodes PNG/JPEG/WebP/GIF bytes, encodes results as
//! PNG, and wraps them in base64 `data:` URLs for browser hosts. Everything
//! here is synchronous; hosts that load files asynchronously await around it.

pub mod data_url;
pub mod error;
pub mod image_io;

pub use data_url::{decode_data_url, to_data_url, PNG_DATA_URL_PREFIX};
pub use error::{CodecError, Result};
pub use image_io::{decode, encode_png};

use rayon::prelude::*;
use tint_core::Rgb;
use tint_recolor::{recolorize_batch, recolorize_with, RecolorOptions};

/// Decode an image, recolorize it onto `target`, and return a PNG data URL.
pub fn recolorize_to_data_url(bytes: &[u8], target: Rgb, options: &RecolorOptions) -> Result<String> {
    let source = decode(bytes)?;
    let recolored = recolorize_with(&source, target, options);
    to_data_url(&recolored)
}

/// Decode an image once and produce a PNG data URL per target color.
///
/// Recoloring and encoding both run in parallel; results follow the order of
/// `targets`.
pub fn recolorize_batch_to_data_urls(
    bytes: &[u8],
    targets: &[Rgb],
    options: &RecolorOptions,
) -> Result<Vec<String>> {
    let source = decode(bytes)?;
    recolorize_batch(&source, targets, options)
        .par_iter()
        .map(to_data_url)
        .collect()
}
