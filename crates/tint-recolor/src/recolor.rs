//! Per-pixel recolorization.
//!
//! Every surface pixel (alpha > 0) is reduced to a single luminance scalar,
//! which then scales each channel of the target color. Output hue and
//! saturation therefore come from the target only, while shading follows the
//! source artwork. Pixels with alpha 0 are copied through untouched.

use tint_core::{Bitmap, Rgb, TintError, CHANNELS};

use crate::luminance::{Enhance, LuminanceMethod};

/// Options for a recolorization call.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RecolorOptions {
    /// Formula used to reduce a source pixel to luminance.
    pub method: LuminanceMethod,

    /// Optional power curve applied to the luminance before scaling.
    pub enhance: Option<Enhance>,
}

impl RecolorOptions {
    pub fn new(method: LuminanceMethod) -> Self {
        Self {
            method,
            enhance: None,
        }
    }

    pub fn with_enhance(mut self, enhance: Enhance) -> Self {
        self.enhance = Some(enhance);
        self
    }

    /// Luminance of a source pixel with the enhance curve applied.
    #[inline]
    pub fn luminance(&self, r: u8, g: u8, b: u8) -> f32 {
        let l = self.method.luminance(r, g, b);
        match self.enhance {
            Some(enhance) => enhance.apply(l),
            None => l,
        }
    }
}

impl From<LuminanceMethod> for RecolorOptions {
    fn from(method: LuminanceMethod) -> Self {
        Self::new(method)
    }
}

/// Recolorize a bitmap onto `target` with the given luminance method.
pub fn recolorize(bitmap: &Bitmap, target: Rgb, method: LuminanceMethod) -> Bitmap {
    recolorize_with(bitmap, target, &RecolorOptions::new(method))
}

/// Recolorize a bitmap onto `target` with full options.
pub fn recolorize_with(bitmap: &Bitmap, target: Rgb, options: &RecolorOptions) -> Bitmap {
    tracing::debug!(
        width = bitmap.width(),
        height = bitmap.height(),
        color = %target,
        method = %options.method,
        enhance = ?options.enhance.map(|e| e.exponent()),
        "recolorizing bitmap"
    );

    let mut output = bitmap.clone();
    recolor_pixels(output.as_bytes_mut(), target, options);
    output
}

/// Recolorize an untyped RGBA buffer.
///
/// The buffer shape is checked before any pixel is touched.
pub fn recolorize_raw(
    width: u32,
    height: u32,
    rgba: &[u8],
    target: Rgb,
    options: &RecolorOptions,
) -> Result<Vec<u8>, TintError> {
    let bitmap = Bitmap::new(width, height, rgba.to_vec())?;
    Ok(recolorize_with(&bitmap, target, options).into_bytes())
}

/// Recolorize a single RGBA pixel.
#[inline]
pub fn recolor_pixel(pixel: [u8; 4], target: Rgb, options: &RecolorOptions) -> [u8; 4] {
    let [r, g, b, a] = pixel;
    if a == 0 {
        return pixel;
    }

    let l = options.luminance(r, g, b);
    let out = Rgb::from_f32_clamped(target.r as f32 * l, target.g as f32 * l, target.b as f32 * l);
    [out.r, out.g, out.b, a]
}

fn recolor_pixels(data: &mut [u8], target: Rgb, options: &RecolorOptions) {
    for px in data.chunks_exact_mut(CHANNELS) {
        let out = recolor_pixel([px[0], px[1], px[2], px[3]], target, options);
        px.copy_from_slice(&out);
    }
}
