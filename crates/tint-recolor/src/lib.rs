//! Shading-preserving recolorization of garment images.
//!
//! A source photo of a garment is recolored to any target color by reducing
//! each surface pixel to a luminance scalar and scaling the target color by
//! it. Shadows and highlights of the original survive; hue and saturation
//! come entirely from the target.
//!
//! # Example
//!
//! ```
//! use tint_core::{Bitmap, Rgb};
//! use tint_recolor::{recolorize, LuminanceMethod};
//!
//! let src = Bitmap::filled(2, 2, [100, 150, 200, 255]).unwrap();
//! let red = recolorize(&src, Rgb::new(255, 0, 0), LuminanceMethod::Natural);
//! assert_eq!(red.pixel(0, 0), Some([143, 0, 0, 255]));
//! ```

pub mod batch;
pub mod luminance;
pub mod recolor;

pub use batch::{recolorize_batch, recolorize_batch_hex};
pub use luminance::{Enhance, LuminanceMethod};
pub use recolor::{recolor_pixel, recolorize, recolorize_raw, recolorize_with, RecolorOptions};
