//! Error types for tint-match.

use thiserror::Error;
use tint_core::ColorError;

/// Result type for catalog loading.
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Errors that can occur while loading a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Malformed JSON, or an entry with an invalid hex value.
    #[error("Catalog JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// An entry built in code carried an invalid hex value.
    #[error(transparent)]
    Color(#[from] ColorError),
}
