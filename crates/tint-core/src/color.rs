//! Color types and color-space conversions.
//!
//! Hex parsing never falls back to black: anything that is not 3 or 6 hex
//! digits (after trimming and an optional `#`) is a [`ColorError::InvalidHex`].

use std::fmt;
use std::str::FromStr;

use crate::errors::ColorError;

/// An 8-bit sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Self = Self::new(255, 255, 255);
    pub const BLACK: Self = Self::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create from computed channel values, rounding and clamping each to [0, 255].
    pub fn from_f32_clamped(r: f32, g: f32, b: f32) -> Self {
        Self {
            r: clamp_channel(r),
            g: clamp_channel(g),
            b: clamp_channel(b),
        }
    }

    /// Parse a hex string such as `"#FF5733"`, `"ff5733"` or `"#f53"`.
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        hex_to_rgb(hex)
    }

    /// Canonical hex form, e.g. `"#FF5733"`.
    pub fn to_hex(&self) -> String {
        rgb_to_hex(*self)
    }

    pub fn to_hsl(&self) -> Hsl {
        rgb_to_hsl(*self)
    }

    pub fn to_lab(&self) -> Lab {
        rgb_to_lab(*self)
    }

    /// Channels as an array in R, G, B order.
    pub fn to_array(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(c: [u8; 3]) -> Self {
        Self::new(c[0], c[1], c[2])
    }
}

impl FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        hex_to_rgb(s)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// A validated hex color in canonical form (`#RRGGBB`, upper-case).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct Hex(String);

impl Hex {
    /// Validate and canonicalize a hex string.
    pub fn parse(value: &str) -> Result<Self, ColorError> {
        hex_to_rgb(value).map(Self::from)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The color this hex string denotes.
    pub fn rgb(&self) -> Rgb {
        // Canonical strings are always "#RRGGBB".
        let channel = |i: usize| u8::from_str_radix(&self.0[i..i + 2], 16).unwrap_or(0);
        Rgb::new(channel(1), channel(3), channel(5))
    }
}

impl From<Rgb> for Hex {
    fn from(rgb: Rgb) -> Self {
        Hex(rgb_to_hex(rgb))
    }
}

impl TryFrom<String> for Hex {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Hex> for String {
    fn from(hex: Hex) -> Self {
        hex.0
    }
}

impl FromStr for Hex {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Hex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// HSL color: hue in degrees [0, 360), saturation and lightness in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hsl {
    pub h: f32,
    pub s: f32,
    pub l: f32,
}

impl Hsl {
    pub fn new(h: f32, s: f32, l: f32) -> Self {
        Self { h, s, l }
    }

    pub fn to_rgb(&self) -> Rgb {
        hsl_to_rgb(*self)
    }
}

/// CIE L*a*b* color (D65 white point) for perceptual comparison.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Lab {
    pub l: f32,
    pub a: f32,
    pub b: f32,
}

impl Lab {
    /// Delta E (CIE76): Euclidean distance in Lab space.
    pub fn delta_e76(&self, other: &Lab) -> f32 {
        let dl = self.l - other.l;
        let da = self.a - other.a;
        let db = self.b - other.b;
        (dl * dl + da * da + db * db).sqrt()
    }
}

/// Parse a 3- or 6-digit hex color, with or without a leading `#`.
pub fn hex_to_rgb(hex: &str) -> Result<Rgb, ColorError> {
    let invalid = || ColorError::InvalidHex {
        value: hex.to_string(),
    };

    let digits = hex.trim();
    let digits = digits.strip_prefix('#').unwrap_or(digits);
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let nibble = |b: u8| -> u8 {
        match b {
            b'0'..=b'9' => b - b'0',
            b'a'..=b'f' => b - b'a' + 10,
            _ => b - b'A' + 10,
        }
    };

    let bytes = digits.as_bytes();
    match bytes.len() {
        3 => {
            let expand = |b: u8| nibble(b) * 17;
            Ok(Rgb::new(expand(bytes[0]), expand(bytes[1]), expand(bytes[2])))
        }
        6 => {
            let pair = |i: usize| nibble(bytes[i]) << 4 | nibble(bytes[i + 1]);
            Ok(Rgb::new(pair(0), pair(2), pair(4)))
        }
        _ => Err(invalid()),
    }
}

/// Format as canonical `#RRGGBB`.
pub fn rgb_to_hex(rgb: Rgb) -> String {
    rgb.to_string()
}

/// Convert RGB to HSL.
pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let r = rgb.r as f32 / 255.0;
    let g = rgb.g as f32 / 255.0;
    let b = rgb.b as f32 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return Hsl::new(0.0, 0.0, l);
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };

    let h = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    Hsl::new(h * 60.0, s, l)
}

/// Convert HSL to RGB. Hue wraps; saturation and lightness are clamped to [0, 1].
pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    let h = hsl.h.rem_euclid(360.0) / 360.0;
    let s = hsl.s.clamp(0.0, 1.0);
    let l = hsl.l.clamp(0.0, 1.0);

    if s == 0.0 {
        let v = l * 255.0;
        return Rgb::from_f32_clamped(v, v, v);
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    Rgb::from_f32_clamped(
        hue_to_channel(p, q, h + 1.0 / 3.0) * 255.0,
        hue_to_channel(p, q, h) * 255.0,
        hue_to_channel(p, q, h - 1.0 / 3.0) * 255.0,
    )
}

fn hue_to_channel(p: f32, q: f32, t: f32) -> f32 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

/// Convert sRGB to CIE Lab through linear RGB and XYZ (D65).
pub fn rgb_to_lab(rgb: Rgb) -> Lab {
    let (x, y, z) = rgb_to_xyz(rgb);

    // Reference white point (D65)
    let ref_x = 95.047;
    let ref_y = 100.0;
    let ref_z = 108.883;

    let fx = lab_f(x / ref_x);
    let fy = lab_f(y / ref_y);
    let fz = lab_f(z / ref_z);

    Lab {
        l: 116.0 * fy - 16.0,
        a: 500.0 * (fx - fy),
        b: 200.0 * (fy - fz),
    }
}

fn rgb_to_xyz(rgb: Rgb) -> (f32, f32, f32) {
    let r = srgb_to_linear(rgb.r as f32 / 255.0);
    let g = srgb_to_linear(rgb.g as f32 / 255.0);
    let b = srgb_to_linear(rgb.b as f32 / 255.0);

    // sRGB primaries, D65 white point
    let x = r * 0.4124564 + g * 0.3575761 + b * 0.1804375;
    let y = r * 0.2126729 + g * 0.7151522 + b * 0.0721750;
    let z = r * 0.0193339 + g * 0.1191920 + b * 0.9503041;

    (x * 100.0, y * 100.0, z * 100.0)
}

fn lab_f(t: f32) -> f32 {
    let delta: f32 = 6.0 / 29.0;
    if t > delta.powi(3) {
        t.cbrt()
    } else {
        t / (3.0 * delta * delta) + 4.0 / 29.0
    }
}

fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

fn clamp_channel(v: f32) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_hex_to_rgb() {
        assert_eq!(hex_to_rgb("#FF5733").unwrap(), Rgb::new(255, 87, 51));
        assert_eq!(hex_to_rgb("ff5733").unwrap(), Rgb::new(255, 87, 51));
        assert_eq!(hex_to_rgb("  #fF5733 ").unwrap(), Rgb::new(255, 87, 51));
    }

    #[test]
    fn test_hex_shorthand_expands() {
        assert_eq!(hex_to_rgb("#abc").unwrap(), Rgb::new(0xAA, 0xBB, 0xCC));
        assert_eq!(Hex::parse("abc").unwrap().as_str(), "#AABBCC");
    }

    #[test]
    fn test_hex_rejects_malformed() {
        for bad in ["", "#", "#12", "#1234", "#12345", "#1234567", "#GGGGGG", "+f+f+f", "#ff 00 0"] {
            assert_eq!(
                hex_to_rgb(bad),
                Err(ColorError::InvalidHex {
                    value: bad.to_string()
                }),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_rgb_to_hex_is_canonical() {
        assert_eq!(rgb_to_hex(Rgb::new(255, 85, 0)), "#FF5500");
        assert_eq!(rgb_to_hex(Rgb::new(1, 2, 3)), "#010203");
    }

    #[test]
    fn test_from_f32_clamped() {
        assert_eq!(
            Rgb::from_f32_clamped(-4.0, 127.5, 300.0),
            Rgb::new(0, 128, 255)
        );
    }

    #[test]
    fn test_hex_newtype_rgb() {
        let hex: Hex = "#0a7".parse().unwrap();
        assert_eq!(hex.to_string(), "#00AA77");
        assert_eq!(hex.rgb(), Rgb::new(0, 0xAA, 0x77));
    }

    #[test]
    fn test_rgb_to_hsl_primaries() {
        let red = rgb_to_hsl(Rgb::new(255, 0, 0));
        assert_eq!(red.h, 0.0);
        assert!((red.s - 1.0).abs() < 1e-6);
        assert!((red.l - 0.5).abs() < 1e-6);

        let blue = rgb_to_hsl(Rgb::new(0, 0, 255));
        assert!((blue.h - 240.0).abs() < 1e-3);

        let grey = rgb_to_hsl(Rgb::new(128, 128, 128));
        assert_eq!(grey.s, 0.0);
    }

    #[test]
    fn test_hsl_to_rgb_wraps_hue() {
        assert_eq!(hsl_to_rgb(Hsl::new(360.0, 1.0, 0.5)), Rgb::new(255, 0, 0));
        assert_eq!(hsl_to_rgb(Hsl::new(-240.0, 1.0, 0.5)), Rgb::new(0, 255, 0));
    }

    #[test]
    fn test_lab_extremes() {
        let white = rgb_to_lab(Rgb::WHITE);
        assert!((white.l - 100.0).abs() < 0.01);
        assert!(white.a.abs() < 0.01);
        assert!(white.b.abs() < 0.01);

        let black = rgb_to_lab(Rgb::BLACK);
        assert!(black.l.abs() < 0.01);

        assert!(white.delta_e76(&black) > 99.0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_hex_serde_validates() {
        let hex: Hex = serde_json::from_str("\"#fff\"").unwrap();
        assert_eq!(hex.as_str(), "#FFFFFF");
        assert!(serde_json::from_str::<Hex>("\"#ffff\"").is_err());
    }

    proptest! {
        #[test]
        fn prop_hex_round_trip(r: u8, g: u8, b: u8) {
            let rgb = Rgb::new(r, g, b);
            prop_assert_eq!(hex_to_rgb(&rgb_to_hex(rgb)).unwrap(), rgb);
            prop_assert_eq!(Hex::from(rgb).rgb(), rgb);
        }

        #[test]
        fn prop_hsl_round_trip(r: u8, g: u8, b: u8) {
            let rgb = Rgb::new(r, g, b);
            let back = hsl_to_rgb(rgb_to_hsl(rgb));
            prop_assert!((back.r as i16 - r as i16).abs() <= 1);
            prop_assert!((back.g as i16 - g as i16).abs() <= 1);
            prop_assert!((back.b as i16 - b as i16).abs() <= 1);
        }

        #[test]
        fn prop_lab_lightness_in_range(r: u8, g: u8, b: u8) {
            let lab = rgb_to_lab(Rgb::new(r, g, b));
            prop_assert!(lab.l >= -0.01 && lab.l <= 100.01);
        }
    }
}
