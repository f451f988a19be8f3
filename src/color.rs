//! RGB color values for node and segment styling.
//!
//! Colors travel through configuration files as `#rrggbb` hex strings and
//! through the generator as linear floating components in `[0, 1]`.
//! Interpolation is plain linear RGB; that matches the reference gradient
//! and keeps generation byte-for-byte reproducible.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);
    /// CSS `gray` (#808080).
    pub const GRAY: Self = Self::new(128.0 / 255.0, 128.0 / 255.0, 128.0 / 255.0);
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);

    #[must_use]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#rrggbb` or `rrggbb` hex string.
    #[must_use]
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim().strip_prefix('#').unwrap_or(hex.trim());
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some(Self::new(
            f64::from(r) / 255.0,
            f64::from(g) / 255.0,
            f64::from(b) / 255.0,
        ))
    }

    #[must_use]
    pub fn to_hex(self) -> String {
        let [r, g, b, _] = self.to_rgba8(1.0);
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    /// Linear RGB interpolation `self * (1 - t) + rhs * t`.
    #[must_use]
    pub fn lerp(self, rhs: Self, t: f64) -> Self {
        Self::new(
            self.r + (rhs.r - self.r) * t,
            self.g + (rhs.g - self.g) * t,
            self.b + (rhs.b - self.b) * t,
        )
    }

    /// Quantize to 8-bit RGBA with the given opacity.
    #[must_use]
    pub fn to_rgba8(self, opacity: f64) -> [u8; 4] {
        let quantize = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [
            quantize(self.r),
            quantize(self.g),
            quantize(self.b),
            quantize(opacity),
        ]
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for Rgb {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        Self::from_hex(&text)
            .ok_or_else(|| D::Error::custom(format!("invalid hex color `{text}`")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_with_and_without_hash() {
        assert_eq!(Rgb::from_hex("#ffffff"), Some(Rgb::WHITE));
        assert_eq!(Rgb::from_hex("000000"), Some(Rgb::BLACK));
        assert_eq!(Rgb::from_hex("#808080"), Some(Rgb::GRAY));
    }

    #[test]
    fn rejects_malformed_hex() {
        assert!(Rgb::from_hex("#fff").is_none());
        assert!(Rgb::from_hex("#gggggg").is_none());
        assert!(Rgb::from_hex("").is_none());
        assert!(Rgb::from_hex("#ffffff00").is_none());
    }

    #[test]
    fn hex_round_trips() {
        for hex in ["#ffffff", "#808080", "#123abc", "#000000"] {
            assert_eq!(Rgb::from_hex(hex).unwrap().to_hex(), hex);
        }
    }

    #[test]
    fn lerp_endpoints_and_midpoint() {
        let a = Rgb::WHITE;
        let b = Rgb::BLACK;
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 0.5), Rgb::new(0.5, 0.5, 0.5));
    }

    #[test]
    fn rgba8_quantization_clamps() {
        assert_eq!(Rgb::new(2.0, -1.0, 0.5).to_rgba8(0.3), [255, 0, 128, 77]);
    }
}
