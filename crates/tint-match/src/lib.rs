//! Nearest-color matching for garment catalogs.
//!
//! Arbitrary colors are ranked against a catalog of named swatches using a
//! perceptual distance ([`MatchPolicy`]), and each match carries a confidence
//! score in [0, 100].
//!
//! # Example
//!
//! ```
//! use tint_core::Rgb;
//! use tint_match::{find_nearest, Catalog};
//!
//! let catalog = Catalog::from_json(r##"[
//!     {"hex": "#FFFFFF", "name": "White"},
//!     {"hex": "#000000", "name": "Black"}
//! ]"##).unwrap();
//!
//! let matches = find_nearest(Rgb::new(0xFE, 0xFE, 0xFE), catalog.as_slice(), 3);
//! assert_eq!(matches[0].name, "White");
//! assert!(matches[0].confidence > 99.0);
//! ```

pub mod catalog;
pub mod distance;
pub mod error;
pub mod matcher;

pub use catalog::{Catalog, CatalogColor};
pub use distance::{delta_e2000, weighted_rgb, MatchPolicy};
pub use error::CatalogError;
pub use matcher::{find_nearest, ColorMatcher, MatchOptions, MatchResult, DEFAULT_LIMIT};
