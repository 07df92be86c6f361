#![forbid(unsafe_code)]

//! Shade palette generation for a single user-chosen color.
//!
//! # Role
//! `shadegen` turns one color literal into a ten-step ramp of the same hue,
//! lightest to darkest, and reports which step reproduces the input. Theme
//! builders use the result as a custom color family without caring how the
//! shades were derived.
//!
//! # This crate provides
//! - [`parse`] for hex (`#rrggbb`, `#rgb`) and `rgb(r, g, b)` literals.
//! - [`Rgb`] / [`Hsl`] with [`to_hsl`] and [`to_rgb`] conversions.
//! - [`build_ramp`] and [`select_base_index`] for the HSL shade ramp.
//! - [`generate_palette`] running the whole pipeline, and
//!   [`PaletteGenerator`] for custom lightness stops.
//!
//! # Guarantees
//! Every stage is a pure function with no shared state. For any accepted
//! input the palette has ten entries, lightness never increases with the
//! index, hue is held constant, and `palette[base_index]` equals the input
//! within one unit per channel. Malformed input is reported as
//! [`InvalidColorFormat`]; nothing is clamped.
//!
//! # Features
//! - `serde`: `Serialize`/`Deserialize` for the value types. [`Rgb`] uses its
//!   `#rrggbb` string form.

/// RGB/HSL color types and conversions.
pub mod color;
/// Error types.
pub mod error;
/// Palette generation pipeline.
pub mod palette;
/// Color literal parsing.
pub mod parse;
/// HSL shade ramp construction.
pub mod ramp;

pub use color::{Hsl, Rgb, to_hsl, to_rgb};
pub use error::{BaseIndexOutOfRange, FormatIssue, InvalidColorFormat, RampConfigError};
pub use palette::{
    GeneratedPalette, Palette, PaletteGenerator, PaletteGeneratorBuilder, generate_palette,
};
pub use parse::parse;
pub use ramp::{
    DEFAULT_EDGE_FALLOFF, DEFAULT_LIGHTNESS_STOPS, RampConfig, SHADE_COUNT, attenuation,
    build_ramp, select_base_index,
};
