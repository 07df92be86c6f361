//! The palette pipeline: parse, convert, ramp, render, select.
//!
//! [`generate_palette`] runs the whole pipeline with the default ramp.
//! [`PaletteGenerator`] runs it with a custom [`RampConfig`] built through
//! [`PaletteGenerator::builder`].
//!
//! # Example
//!
//! ```
//! use shadegen::generate_palette;
//!
//! let generated = generate_palette("#228be6").unwrap();
//! assert_eq!(generated.palette().len(), 10);
//! assert_eq!(generated.base_color().to_hex(), "#228be6");
//!
//! let (base_index, palette) = generated.into_parts();
//! let hex = palette.to_hex();
//! assert_eq!(hex[base_index], "#228be6");
//! ```

use std::fmt;
use std::ops::Index;

use crate::color::{Rgb, to_hsl, to_rgb};
use crate::error::{BaseIndexOutOfRange, InvalidColorFormat, RampConfigError};
use crate::parse::parse;
use crate::ramp::{
    DEFAULT_EDGE_FALLOFF, DEFAULT_LIGHTNESS_STOPS, RampConfig, SHADE_COUNT, select_base_index,
};

/// Ten shades of one hue, lightest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Palette([Rgb; SHADE_COUNT]);

impl Palette {
    pub const fn new(shades: [Rgb; SHADE_COUNT]) -> Self {
        Self(shades)
    }

    /// Always [`SHADE_COUNT`].
    #[allow(clippy::len_without_is_empty)]
    pub const fn len(&self) -> usize {
        SHADE_COUNT
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rgb> {
        self.0.iter()
    }

    pub const fn as_array(&self) -> &[Rgb; SHADE_COUNT] {
        &self.0
    }

    pub const fn lightest(&self) -> Rgb {
        self.0[0]
    }

    pub const fn darkest(&self) -> Rgb {
        self.0[SHADE_COUNT - 1]
    }

    /// Every shade in canonical `#rrggbb` form.
    #[must_use]
    pub fn to_hex(&self) -> [String; SHADE_COUNT] {
        self.0.map(Rgb::to_hex)
    }
}

impl Index<usize> for Palette {
    type Output = Rgb;

    fn index(&self, index: usize) -> &Rgb {
        &self.0[index]
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a Rgb;
    type IntoIter = std::slice::Iter<'a, Rgb>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Palette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, shade) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{shade}")?;
        }
        Ok(())
    }
}

/// A palette plus the index of the shade that reproduces the input color.
///
/// The base index always names one of the shades; [`GeneratedPalette::new`]
/// and deserialization both reject anything outside `0..SHADE_COUNT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawGeneratedPalette")
)]
pub struct GeneratedPalette {
    base_index: usize,
    palette: Palette,
}

impl GeneratedPalette {
    pub const fn new(base_index: usize, palette: Palette) -> Result<Self, BaseIndexOutOfRange> {
        if base_index >= SHADE_COUNT {
            return Err(BaseIndexOutOfRange(base_index));
        }
        Ok(Self {
            base_index,
            palette,
        })
    }

    /// Position of the input color in the palette, in `0..SHADE_COUNT`.
    pub const fn base_index(&self) -> usize {
        self.base_index
    }

    pub const fn palette(&self) -> Palette {
        self.palette
    }

    /// The shade at `base_index`.
    #[must_use]
    pub fn base_color(&self) -> Rgb {
        self.palette[self.base_index]
    }

    /// Split into `(base_index, palette)`.
    #[must_use]
    pub fn into_parts(self) -> (usize, Palette) {
        (self.base_index, self.palette)
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawGeneratedPalette {
    base_index: usize,
    palette: Palette,
}

#[cfg(feature = "serde")]
impl TryFrom<RawGeneratedPalette> for GeneratedPalette {
    type Error = BaseIndexOutOfRange;

    fn try_from(raw: RawGeneratedPalette) -> Result<Self, Self::Error> {
        Self::new(raw.base_index, raw.palette)
    }
}

/// Generates palettes with a fixed ramp configuration.
///
/// Immutable once built; share it freely across threads.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PaletteGenerator {
    ramp: RampConfig,
}

impl PaletteGenerator {
    /// Generator with the default stops and desaturation curve.
    pub const fn new() -> Self {
        Self {
            ramp: RampConfig::DEFAULT,
        }
    }

    pub fn builder() -> PaletteGeneratorBuilder {
        PaletteGeneratorBuilder::new()
    }

    pub const fn ramp(&self) -> &RampConfig {
        &self.ramp
    }

    /// Parse `input` and derive its palette.
    ///
    /// Fails only when `input` is not an accepted color literal.
    pub fn generate(&self, input: &str) -> Result<GeneratedPalette, InvalidColorFormat> {
        let rgb = parse(input)?;
        Ok(self.generate_from_rgb(rgb))
    }

    /// Derive the palette for an already parsed color.
    #[must_use]
    pub fn generate_from_rgb(&self, rgb: Rgb) -> GeneratedPalette {
        let base = to_hsl(rgb);
        let ramp = self.ramp.build(base);
        let base_index = select_base_index(&ramp, base);
        let palette = Palette(ramp.map(to_rgb));

        tracing::trace!(
            color = %rgb,
            base_index,
            hue = base.h,
            lightness = base.l,
            "generated shade palette"
        );

        GeneratedPalette {
            base_index,
            palette,
        }
    }
}

/// Builder for [`PaletteGenerator`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[must_use]
pub struct PaletteGeneratorBuilder {
    stops: [f64; SHADE_COUNT],
    edge_falloff: f64,
}

impl Default for PaletteGeneratorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PaletteGeneratorBuilder {
    pub const fn new() -> Self {
        Self {
            stops: DEFAULT_LIGHTNESS_STOPS,
            edge_falloff: DEFAULT_EDGE_FALLOFF,
        }
    }

    /// Target lightness per shade in percent, lightest first.
    pub const fn stops(mut self, stops: [f64; SHADE_COUNT]) -> Self {
        self.stops = stops;
        self
    }

    /// Exponent of the edge desaturation curve, see [`crate::attenuation`].
    pub const fn edge_falloff(mut self, falloff: f64) -> Self {
        self.edge_falloff = falloff;
        self
    }

    /// Validate the configuration.
    pub fn build(self) -> Result<PaletteGenerator, RampConfigError> {
        let ramp = RampConfig::new(self.stops, self.edge_falloff)?;
        Ok(PaletteGenerator { ramp })
    }
}

/// Parse `input` and derive its ten-shade palette with the default ramp.
///
/// The same input always yields the same result.
pub fn generate_palette(input: &str) -> Result<GeneratedPalette, InvalidColorFormat> {
    PaletteGenerator::new().generate(input)
}
