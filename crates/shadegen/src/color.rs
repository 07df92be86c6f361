//! RGB and HSL color values and the conversions between them.
//!
//! [`Rgb`] is the boundary type: it is what the parser produces and what a
//! palette is made of. [`Hsl`] is the working space the ramp builder uses to
//! vary lightness while holding hue fixed.
//!
//! Both conversions are total. Converting RGB → HSL → RGB reproduces every
//! channel within ±1.
//!
//! ```
//! use shadegen::{Hsl, Rgb};
//!
//! let rgb = Rgb::new(0x22, 0x8b, 0xe6);
//! let hsl = rgb.to_hsl();
//! assert!((hsl.h - 207.86).abs() < 0.01);
//! assert_eq!(hsl.to_rgb(), rgb);
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::InvalidColorFormat;

/// An sRGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Create a color from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Canonical `#rrggbb` form (lowercase).
    #[must_use]
    pub fn to_hex(self) -> String {
        self.to_string()
    }

    /// Convert to HSL. See [`to_hsl`].
    #[must_use]
    pub fn to_hsl(self) -> Hsl {
        to_hsl(self)
    }

    /// Largest absolute per-channel difference to `other`.
    #[must_use]
    pub fn max_channel_delta(self, other: Self) -> u8 {
        self.r
            .abs_diff(other.r)
            .max(self.g.abs_diff(other.g))
            .max(self.b.abs_diff(other.b))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = InvalidColorFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse::parse(s)
    }
}

impl TryFrom<&str> for Rgb {
    type Error = InvalidColorFormat;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        crate::parse::parse(value)
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(rgb: Rgb) -> Self {
        [rgb.r, rgb.g, rgb.b]
    }
}

/// A color in HSL space.
///
/// `h` is in degrees `[0, 360)`, `s` and `l` are percentages `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Convert to RGB. See [`to_rgb`].
    #[must_use]
    pub fn to_rgb(self) -> Rgb {
        to_rgb(self)
    }
}

impl From<Rgb> for Hsl {
    fn from(rgb: Rgb) -> Self {
        to_hsl(rgb)
    }
}

impl From<Hsl> for Rgb {
    fn from(hsl: Hsl) -> Self {
        to_rgb(hsl)
    }
}

/// Convert RGB to HSL.
///
/// Achromatic colors (all channels equal) get hue 0 and saturation 0.
#[must_use]
pub fn to_hsl(rgb: Rgb) -> Hsl {
    let r = f64::from(rgb.r) / 255.0;
    let g = f64::from(rgb.g) / 255.0;
    let b = f64::from(rgb.b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;
    let l = (max + min) / 2.0;

    if delta == 0.0 {
        return Hsl::new(0.0, 0.0, l * 100.0);
    }

    let s = (delta / (1.0 - (2.0 * l - 1.0).abs())).clamp(0.0, 1.0);

    let sector = if max == r {
        ((g - b) / delta).rem_euclid(6.0)
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };

    Hsl::new(normalize_hue(sector * 60.0), s * 100.0, l * 100.0)
}

/// Convert HSL to RGB.
///
/// Hue is wrapped into `[0, 360)`, saturation and lightness are clamped to
/// `[0, 100]`. Channels are rounded to nearest.
#[must_use]
pub fn to_rgb(hsl: Hsl) -> Rgb {
    let h = normalize_hue(hsl.h);
    let s = clamp_percent(hsl.s) / 100.0;
    let l = clamp_percent(hsl.l) / 100.0;

    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let h_prime = h / 60.0;
    let x = c * (1.0 - (h_prime % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = match h_prime as u8 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    Rgb::new(to_channel(r + m), to_channel(g + m), to_channel(b + m))
}

fn normalize_hue(h: f64) -> f64 {
    if !h.is_finite() {
        return 0.0;
    }
    let h = h.rem_euclid(360.0);
    // rem_euclid can round up to the modulus for tiny negative inputs.
    if h >= 360.0 { 0.0 } else { h }
}

fn clamp_percent(v: f64) -> f64 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 100.0) }
}

fn to_channel(v: f64) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

#[cfg(feature = "serde")]
impl serde::Serialize for Rgb {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Rgb {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = <String as serde::Deserialize>::deserialize(deserializer)?;
        crate::parse::parse(&text).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64, tol: f64) {
        assert!(
            (actual - expected).abs() <= tol,
            "expected {expected} ± {tol}, got {actual}"
        );
    }

    #[test]
    fn display_is_lowercase_hex() {
        assert_eq!(Rgb::new(0xAB, 0x0C, 0xFF).to_string(), "#ab0cff");
        assert_eq!(Rgb::BLACK.to_hex(), "#000000");
        assert_eq!(Rgb::WHITE.to_hex(), "#ffffff");
    }

    #[test]
    fn primaries_convert_to_expected_hsl() {
        let red = to_hsl(Rgb::new(255, 0, 0));
        assert_eq!((red.h, red.s, red.l), (0.0, 100.0, 50.0));

        let green = to_hsl(Rgb::new(0, 255, 0));
        assert_eq!((green.h, green.s, green.l), (120.0, 100.0, 50.0));

        let blue = to_hsl(Rgb::new(0, 0, 255));
        assert_eq!((blue.h, blue.s, blue.l), (240.0, 100.0, 50.0));
    }

    #[test]
    fn magenta_side_hue_stays_below_360() {
        let hsl = to_hsl(Rgb::new(255, 0, 1));
        assert!(hsl.h < 360.0);
        assert!(hsl.h > 359.0);
    }

    #[test]
    fn grays_are_achromatic() {
        for v in [0u8, 1, 127, 128, 254, 255] {
            let hsl = to_hsl(Rgb::new(v, v, v));
            assert_eq!(hsl.h, 0.0);
            assert_eq!(hsl.s, 0.0);
            assert_close(hsl.l, f64::from(v) / 255.0 * 100.0, 1e-9);
        }
    }

    #[test]
    fn known_color_converts_both_ways() {
        let rgb = Rgb::new(0x22, 0x8b, 0xe6);
        let hsl = rgb.to_hsl();
        assert_close(hsl.h, 207.857, 0.001);
        assert_close(hsl.s, 79.675, 0.001);
        assert_close(hsl.l, 51.765, 0.001);
        assert_eq!(hsl.to_rgb(), rgb);
    }

    #[test]
    fn to_rgb_normalizes_out_of_range_components() {
        assert_eq!(to_rgb(Hsl::new(360.0, 100.0, 50.0)), Rgb::new(255, 0, 0));
        assert_eq!(to_rgb(Hsl::new(-120.0, 100.0, 50.0)), Rgb::new(0, 0, 255));
        assert_eq!(to_rgb(Hsl::new(0.0, 150.0, 120.0)), Rgb::WHITE);
        assert_eq!(to_rgb(Hsl::new(0.0, -5.0, -1.0)), Rgb::BLACK);
        assert_eq!(to_rgb(Hsl::new(f64::NAN, f64::NAN, 50.0)), Rgb::new(128, 128, 128));
    }

    #[test]
    fn round_trip_is_exact_on_a_coarse_grid() {
        for r in (0..=255u8).step_by(15) {
            for g in (0..=255u8).step_by(15) {
                for b in (0..=255u8).step_by(15) {
                    let rgb = Rgb::new(r, g, b);
                    assert!(
                        to_rgb(to_hsl(rgb)).max_channel_delta(rgb) <= 1,
                        "round trip drifted for {rgb}"
                    );
                }
            }
        }
    }

    #[test]
    fn array_conversions() {
        let rgb = Rgb::from([1, 2, 3]);
        assert_eq!(rgb, Rgb::new(1, 2, 3));
        let channels: [u8; 3] = rgb.into();
        assert_eq!(channels, [1, 2, 3]);
    }

    #[test]
    fn max_channel_delta_is_symmetric() {
        let a = Rgb::new(10, 200, 30);
        let b = Rgb::new(12, 195, 30);
        assert_eq!(a.max_channel_delta(b), 5);
        assert_eq!(b.max_channel_delta(a), 5);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn rgb_serializes_as_hex_string() {
        let json = serde_json::to_string(&Rgb::new(0x22, 0x8b, 0xe6)).unwrap();
        assert_eq!(json, "\"#228be6\"");
        let back: Rgb = serde_json::from_str("\"#228BE6\"").unwrap();
        assert_eq!(back, Rgb::new(0x22, 0x8b, 0xe6));
        assert!(serde_json::from_str::<Rgb>("\"nope\"").is_err());
    }
}
