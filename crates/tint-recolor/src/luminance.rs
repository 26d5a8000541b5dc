//! Luminance formulas and the optional enhance curve.
//!
//! Canonical table:
//!
//! | method     | aliases    | weights (r, g, b)        |
//! |------------|------------|--------------------------|
//! | `Natural`  |            | 0.2126, 0.7152, 0.0722   |
//! | `Vibrant`  | `average`  | 1/3, 1/3, 1/3            |
//! | `Balanced` | `weighted` | 0.299, 0.587, 0.114      |
//!
//! Each formula maps 8-bit channels to [0, 1]. The power-curve enhance is a
//! separate post-transform on that scalar, never folded into a formula.

use std::fmt;
use std::str::FromStr;

use tint_core::ConfigError;

/// A luminance formula, selected once per recolorization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub enum LuminanceMethod {
    /// ITU-R BT.709 perceptual weights.
    #[default]
    Natural,
    /// Plain channel mean.
    Vibrant,
    /// NTSC/PAL (BT.601) weights.
    Balanced,
}

impl LuminanceMethod {
    pub const ALL: [LuminanceMethod; 3] = [Self::Natural, Self::Vibrant, Self::Balanced];

    /// Luminance of an 8-bit pixel, in [0, 1].
    #[inline]
    pub fn luminance(self, r: u8, g: u8, b: u8) -> f32 {
        let (r, g, b) = (r as f32, g as f32, b as f32);
        match self {
            Self::Natural => (0.2126 * r + 0.7152 * g + 0.0722 * b) / 255.0,
            Self::Vibrant => (r + g + b) / (3.0 * 255.0),
            Self::Balanced => (0.299 * r + 0.587 * g + 0.114 * b) / 255.0,
        }
    }

    /// Canonical lower-case name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Natural => "natural",
            Self::Vibrant => "vibrant",
            Self::Balanced => "balanced",
        }
    }
}

impl FromStr for LuminanceMethod {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "natural" => Ok(Self::Natural),
            "vibrant" | "average" => Ok(Self::Vibrant),
            "balanced" | "weighted" => Ok(Self::Balanced),
            _ => Err(ConfigError::UnknownLuminanceMethod {
                name: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for LuminanceMethod {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<LuminanceMethod> for String {
    fn from(method: LuminanceMethod) -> Self {
        method.name().to_string()
    }
}

impl fmt::Display for LuminanceMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Power-curve adjustment applied to a luminance scalar: `l' = l^exponent`.
///
/// Exponents below 1 brighten midtones while leaving 0 and 1 fixed.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "f32", into = "f32"))]
pub struct Enhance {
    exponent: f32,
}

impl Enhance {
    /// The conventional midtone lift.
    pub const MIDTONES: Enhance = Enhance { exponent: 0.8 };

    pub fn new(exponent: f32) -> Result<Self, ConfigError> {
        if !exponent.is_finite() || exponent <= 0.0 {
            return Err(ConfigError::InvalidEnhanceExponent { value: exponent });
        }
        Ok(Self { exponent })
    }

    pub fn exponent(&self) -> f32 {
        self.exponent
    }

    #[inline]
    pub fn apply(&self, luminance: f32) -> f32 {
        luminance.max(0.0).powf(self.exponent)
    }
}

impl Default for Enhance {
    fn default() -> Self {
        Self::MIDTONES
    }
}

impl TryFrom<f32> for Enhance {
    type Error = ConfigError;

    fn try_from(value: f32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Enhance> for f32 {
    fn from(enhance: Enhance) -> Self {
        enhance.exponent
    }
}
