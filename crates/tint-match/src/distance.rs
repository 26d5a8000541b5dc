//! Color distance metrics.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tint_core::{ConfigError, Lab, Rgb};

/// Weighted RGB coefficients (luma-inspired).
const RGB_WEIGHTS: [f32; 3] = [0.30, 0.59, 0.11];

/// Largest possible weighted RGB distance (black vs white).
pub const WEIGHTED_RGB_MAX: f32 = 171.097;

/// How catalog colors are compared against a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum MatchPolicy {
    /// Euclidean distance in CIE Lab (Delta E 1976).
    #[default]
    DeltaE76,
    /// CIEDE2000 with unit weighting factors.
    DeltaE2000,
    /// `sqrt((0.30 dr)^2 + (0.59 dg)^2 + (0.11 db)^2)` on 8-bit channels.
    WeightedRgb,
}

impl MatchPolicy {
    pub const ALL: [MatchPolicy; 3] = [Self::DeltaE76, Self::DeltaE2000, Self::WeightedRgb];

    pub fn name(self) -> &'static str {
        match self {
            Self::DeltaE76 => "delta-e76",
            Self::DeltaE2000 => "delta-e2000",
            Self::WeightedRgb => "weighted-rgb",
        }
    }

    /// Confidence lost per unit of distance.
    ///
    /// Lab metrics put black and white about 100 apart, so one point per unit
    /// takes the widest catalog spread to zero. Weighted RGB tops out at
    /// [`WEIGHTED_RGB_MAX`] and is scaled to match.
    pub fn default_confidence_scale(self) -> f32 {
        match self {
            Self::DeltaE76 | Self::DeltaE2000 => 1.0,
            Self::WeightedRgb => 100.0 / WEIGHTED_RGB_MAX,
        }
    }

    /// Convert a color into this policy's comparison space.
    pub fn prepare(self, rgb: Rgb) -> Prepared {
        match self {
            Self::DeltaE76 | Self::DeltaE2000 => Prepared::Lab(rgb.to_lab()),
            Self::WeightedRgb => Prepared::Rgb(rgb),
        }
    }

    /// Distance between two prepared colors. Both must come from [`MatchPolicy::prepare`]
    /// on this policy; mixed spaces fall back to converting the RGB side to Lab.
    pub fn distance_prepared(self, a: &Prepared, b: &Prepared) -> f32 {
        match (self, a, b) {
            (Self::WeightedRgb, Prepared::Rgb(a), Prepared::Rgb(b)) => weighted_rgb(*a, *b),
            (Self::DeltaE2000, a, b) => delta_e2000(&a.lab(), &b.lab()),
            (_, a, b) => a.lab().delta_e76(&b.lab()),
        }
    }

    /// Distance between two colors under this policy.
    pub fn distance(self, a: Rgb, b: Rgb) -> f32 {
        self.distance_prepared(&self.prepare(a), &self.prepare(b))
    }
}

impl FromStr for MatchPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .flat_map(char::to_lowercase)
            .collect();

        match key.as_str() {
            "deltae76" | "deltae" | "cie76" | "lab" => Ok(Self::DeltaE76),
            "deltae2000" | "ciede2000" => Ok(Self::DeltaE2000),
            "weightedrgb" | "weighted" | "rgb" => Ok(Self::WeightedRgb),
            _ => Err(ConfigError::UnknownMatchPolicy {
                name: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for MatchPolicy {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<MatchPolicy> for String {
    fn from(policy: MatchPolicy) -> Self {
        policy.name().to_string()
    }
}

impl fmt::Display for MatchPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A color converted into a comparison space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Prepared {
    Lab(Lab),
    Rgb(Rgb),
}

impl Prepared {
    fn lab(&self) -> Lab {
        match self {
            Prepared::Lab(lab) => *lab,
            Prepared::Rgb(rgb) => rgb.to_lab(),
        }
    }
}

/// Weighted Euclidean distance on 8-bit RGB channels.
pub fn weighted_rgb(a: Rgb, b: Rgb) -> f32 {
    let d = |x: u8, y: u8, w: f32| (x as f32 - y as f32) * w;
    let dr = d(a.r, b.r, RGB_WEIGHTS[0]);
    let dg = d(a.g, b.g, RGB_WEIGHTS[1]);
    let db = d(a.b, b.b, RGB_WEIGHTS[2]);
    (dr * dr + dg * dg + db * db).sqrt()
}

/// CIEDE2000 color difference (kL = kC = kH = 1).
pub fn delta_e2000(lab1: &Lab, lab2: &Lab) -> f32 {
    let (l1, a1, b1) = (lab1.l as f64, lab1.a as f64, lab1.b as f64);
    let (l2, a2, b2) = (lab2.l as f64, lab2.a as f64, lab2.b as f64);

    let c1 = (a1 * a1 + b1 * b1).sqrt();
    let c2 = (a2 * a2 + b2 * b2).sqrt();
    let c_avg_pow7 = ((c1 + c2) / 2.0).powi(7);
    let g = 0.5 * (1.0 - (c_avg_pow7 / (c_avg_pow7 + 25.0_f64.powi(7))).sqrt());

    let a1p = a1 * (1.0 + g);
    let a2p = a2 * (1.0 + g);
    let c1p = (a1p * a1p + b1 * b1).sqrt();
    let c2p = (a2p * a2p + b2 * b2).sqrt();

    let hue = |b: f64, a: f64| {
        if b == 0.0 && a == 0.0 {
            0.0
        } else {
            b.atan2(a).to_degrees().rem_euclid(360.0)
        }
    };
    let h1p = hue(b1, a1p);
    let h2p = hue(b2, a2p);

    let dl = l2 - l1;
    let dc = c2p - c1p;

    let chroma_product = c1p * c2p;
    let dh_angle = if chroma_product == 0.0 {
        0.0
    } else if (h2p - h1p).abs() <= 180.0 {
        h2p - h1p
    } else if h2p - h1p > 180.0 {
        h2p - h1p - 360.0
    } else {
        h2p - h1p + 360.0
    };
    let dh = 2.0 * chroma_product.sqrt() * (dh_angle.to_radians() / 2.0).sin();

    let lp = (l1 + l2) / 2.0;
    let cp = (c1p + c2p) / 2.0;
    let hp = if chroma_product == 0.0 {
        h1p + h2p
    } else if (h1p - h2p).abs() <= 180.0 {
        (h1p + h2p) / 2.0
    } else if h1p + h2p < 360.0 {
        (h1p + h2p + 360.0) / 2.0
    } else {
        (h1p + h2p - 360.0) / 2.0
    };

    let t = 1.0 - 0.17 * (hp - 30.0).to_radians().cos()
        + 0.24 * (2.0 * hp).to_radians().cos()
        + 0.32 * (3.0 * hp + 6.0).to_radians().cos()
        - 0.20 * (4.0 * hp - 63.0).to_radians().cos();

    let lp_50_sq = (lp - 50.0).powi(2);
    let sl = 1.0 + (0.015 * lp_50_sq) / (20.0 + lp_50_sq).sqrt();
    let sc = 1.0 + 0.045 * cp;
    let sh = 1.0 + 0.015 * cp * t;

    let d_theta = 30.0 * (-((hp - 275.0) / 25.0).powi(2)).exp();
    let cp_pow7 = cp.powi(7);
    let rc = 2.0 * (cp_pow7 / (cp_pow7 + 25.0_f64.powi(7))).sqrt();
    let rt = -rc * (2.0 * d_theta).to_radians().sin();

    let tl = dl / sl;
    let tc = dc / sc;
    let th = dh / sh;

    (tl * tl + tc * tc + th * th + rt * tc * th).max(0.0).sqrt() as f32
}
