//! Error types for tint-codec.

use thiserror::Error;
use tint_core::{BitmapError, TintError};

/// Result type for codec operations.
pub type Result<T> = std::result::Result<T, CodecError>;

/// Errors that can occur while decoding or encoding images.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The bytes are not a supported image.
    #[error("Failed to decode image: {0}")]
    Decode(#[source] image::ImageError),

    /// The bitmap could not be written as PNG.
    #[error("Failed to encode PNG: {0}")]
    Encode(#[source] image::ImageError),

    /// A string that should be a base64 data URL is not one.
    #[error("Invalid data URL: {0}")]
    InvalidDataUrl(String),

    /// Base64 decoding error.
    #[error("Base64 error: {0}")]
    Base64(#[from] base64::DecodeError),

    /// Color, shape or configuration error from the core.
    #[error(transparent)]
    Tint(#[from] TintError),
}

impl From<BitmapError> for CodecError {
    fn from(err: BitmapError) -> Self {
        Self::Tint(err.into())
    }
}
