//! JavaScript-facing value types.

use serde::{Deserialize, Serialize};
use tint_core::{ConfigError, Rgb};
use tint_match::{MatchPolicy, MatchResult};
use tint_recolor::{Enhance, LuminanceMethod, RecolorOptions};

/// `{ r, g, b }` object for JavaScript.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RgbJs {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl From<Rgb> for RgbJs {
    fn from(rgb: Rgb) -> Self {
        Self {
            r: rgb.r,
            g: rgb.g,
            b: rgb.b,
        }
    }
}

/// Catalog match for JavaScript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResultJs {
    pub hex: String,
    pub name: String,
    #[serde(default)]
    pub family: Option<String>,
    pub distance: f32,
    pub confidence: f32,
}

impl From<MatchResult> for MatchResultJs {
    fn from(result: MatchResult) -> Self {
        Self {
            hex: result.hex.to_string(),
            name: result.name,
            family: result.family,
            distance: result.distance,
            confidence: result.confidence,
        }
    }
}

/// Recolor options as passed from JavaScript.
///
/// Missing fields fall back to Natural luminance without enhancement.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecolorOptionsJs {
    #[serde(default)]
    pub method: Option<String>,
    #[serde(default)]
    pub enhance: Option<f32>,
}

impl RecolorOptionsJs {
    pub fn new(method: Option<String>, enhance: Option<f32>) -> Self {
        Self { method, enhance }
    }

    /// Convert to core options, rejecting unknown methods and bad exponents.
    pub fn into_core(self) -> Result<RecolorOptions, ConfigError> {
        let method = match self.method.as_deref() {
            Some(name) => name.parse::<LuminanceMethod>()?,
            None => LuminanceMethod::default(),
        };
        let mut options = RecolorOptions::new(method);
        if let Some(exponent) = self.enhance {
            options = options.with_enhance(Enhance::new(exponent)?);
        }
        Ok(options)
    }
}

/// Parse an optional policy name, defaulting to Delta E 76.
pub fn parse_policy(policy: Option<&str>) -> Result<MatchPolicy, ConfigError> {
    policy.map_or(Ok(MatchPolicy::default()), str::parse)
}
