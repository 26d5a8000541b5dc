//! Error types for the tint engine.

use thiserror::Error;

/// Top-level error type for the tint engine.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TintError {
    #[error(transparent)]
    Color(#[from] ColorError),

    #[error(transparent)]
    Bitmap(#[from] BitmapError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors while reading color values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("Invalid hex color {value:?}: expected 3 or 6 hex digits")]
    InvalidHex { value: String },
}

/// Errors about the shape of a pixel buffer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BitmapError {
    #[error("Bitmap buffer has {actual} bytes, expected {expected} for {width}x{height} RGBA")]
    ShapeMismatch {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },

    #[error("Bitmap dimensions {width}x{height} overflow the addressable buffer size")]
    TooLarge { width: u32, height: u32 },
}

/// Errors in caller-supplied configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("Unknown luminance method: {name}")]
    UnknownLuminanceMethod { name: String },

    #[error("Unknown match policy: {name}")]
    UnknownMatchPolicy { name: String },

    #[error("Enhance exponent must be finite and positive, got {value}")]
    InvalidEnhanceExponent { value: f32 },

    #[error("Confidence scale must be finite and non-negative, got {value}")]
    InvalidConfidenceScale { value: f32 },
}
