//! Core types for the tint recolorization engine.
//!
//! This crate provides the foundational types used by every other tint crate:
//! - 8-bit RGB colors and validated hex strings
//! - HSL and CIE Lab conversions
//! - RGBA bitmaps with a checked buffer shape
//! - Error types

pub mod bitmap;
pub mod color;
pub mod errors;

pub use bitmap::*;
pub use color::*;
pub use errors::*;
