//! Batch recolorization across many target colors.
//!
//! Each target color is an independent task with its own output buffer, run
//! on the rayon pool. Results come back in the order of the targets.

use rayon::prelude::*;
use tint_core::{hex_to_rgb, Bitmap, Rgb, TintError};

use crate::recolor::{recolorize_with, RecolorOptions};

/// Recolorize one source bitmap onto every target color in parallel.
pub fn recolorize_batch(bitmap: &Bitmap, targets: &[Rgb], options: &RecolorOptions) -> Vec<Bitmap> {
    tracing::debug!(
        colors = targets.len(),
        pixels = bitmap.len(),
        method = %options.method,
        "starting batch recolorization"
    );

    targets
        .par_iter()
        .map(|target| recolorize_with(bitmap, *target, options))
        .collect()
}

/// Like [`recolorize_batch`], with targets given as hex strings.
///
/// Every hex string is validated before any pixel work starts.
pub fn recolorize_batch_hex<S: AsRef<str>>(
    bitmap: &Bitmap,
    targets: &[S],
    options: &RecolorOptions,
) -> Result<Vec<Bitmap>, TintError> {
    let colors = targets
        .iter()
        .map(|hex| hex_to_rgb(hex.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(recolorize_batch(bitmap, &colors, options))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::luminance::LuminanceMethod;
    use crate::recolor::recolorize;
    use tint_core::ColorError;

    fn sample() -> Bitmap {
        Bitmap::new(
            2,
            2,
            vec![
                255, 255, 255, 255, //
                100, 150, 200, 255, //
                0, 0, 0, 255, //
                40, 40, 40, 0,
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_batch_matches_single_calls_in_order() {
        let src = sample();
        let targets = [
            Rgb::new(255, 0, 0),
            Rgb::new(0, 128, 255),
            Rgb::new(30, 60, 90),
        ];

        let batch = recolorize_batch(&src, &targets, &RecolorOptions::default());
        assert_eq!(batch.len(), targets.len());
        for (out, target) in batch.iter().zip(targets) {
            assert_eq!(out, &recolorize(&src, target, LuminanceMethod::Natural));
        }
    }

    #[test]
    fn test_batch_hex_validates_first() {
        let err = recolorize_batch_hex(&sample(), &["#FF0000", "nope"], &RecolorOptions::default())
            .unwrap_err();
        assert_eq!(
            err,
            TintError::Color(ColorError::InvalidHex {
                value: "nope".to_string()
            })
        );
    }

    #[test]
    fn test_batch_hex() {
        let out = recolorize_batch_hex(&sample(), &["#f00", "00FF00"], &RecolorOptions::default())
            .unwrap();
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].pixel(0, 0), Some([255, 0, 0, 255]));
        assert_eq!(out[1].pixel(0, 0), Some([0, 255, 0, 255]));
        assert_eq!(out[1].pixel(1, 1), Some([40, 40, 40, 0]));
    }

    #[test]
    fn test_empty_batch() {
        let out = recolorize_batch(&sample(), &[], &RecolorOptions::default());
        assert!(out.is_empty());
    }
}
