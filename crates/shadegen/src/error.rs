//! Error types for color parsing and generator configuration.

use thiserror::Error;

/// Why a color string was rejected.
///
/// This is diagnostic detail only. Every rejection surfaces as the single
/// [`InvalidColorFormat`] error kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum FormatIssue {
    /// Input was empty or whitespace only.
    #[error("empty color string")]
    Empty,
    /// Hex body was not 3 or 6 digits long.
    #[error("hex color must have 3 or 6 digits")]
    InvalidLength,
    /// Hex body contained a non-hex character.
    #[error("invalid hex digit")]
    InvalidHex,
    /// `rgb(...)` call was malformed (arity, separators, non-integer channel).
    #[error("malformed rgb() function")]
    InvalidFunction,
    /// A functional channel was outside `0..=255`.
    #[error("rgb() channel out of range 0..=255")]
    OutOfRange,
    /// Input matched none of the accepted grammars.
    #[error("unrecognized color syntax")]
    Unrecognized,
}

/// The input string is not a hex or `rgb(...)` color literal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid color format {input:?}: {issue}")]
pub struct InvalidColorFormat {
    input: String,
    issue: FormatIssue,
}

impl InvalidColorFormat {
    pub(crate) fn new(input: &str, issue: FormatIssue) -> Self {
        Self {
            input: input.to_owned(),
            issue,
        }
    }

    /// The rejected input, exactly as supplied.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// What was wrong with it.
    #[must_use]
    pub const fn issue(&self) -> FormatIssue {
        self.issue
    }
}

/// A [`PaletteGenerator`](crate::PaletteGenerator) configuration was rejected
/// by its builder.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum RampConfigError {
    /// A stop was NaN, infinite, or outside `0..=100`.
    #[error("lightness stop {index} is {value}, expected a finite value in 0..=100")]
    StopOutOfRange {
        /// Position of the offending stop.
        index: usize,
        /// The rejected value.
        value: f64,
    },

    /// A stop was not strictly darker than the one before it.
    #[error("lightness stops must strictly decrease: stop {index} ({value}) is not below {previous}")]
    StopsNotDecreasing {
        /// Position of the offending stop.
        index: usize,
        /// The offending stop's value.
        value: f64,
        /// The stop at `index - 1`.
        previous: f64,
    },

    /// The desaturation exponent was NaN, infinite, zero, or negative.
    #[error("edge falloff must be a finite positive exponent, got {0}")]
    InvalidFalloff(f64),
}

/// A [`GeneratedPalette`](crate::GeneratedPalette) was assembled with a base
/// index that does not name one of its shades.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[error("base index {0} is outside 0..{max}", max = crate::SHADE_COUNT)]
pub struct BaseIndexOutOfRange(pub usize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_color_format_message_names_input_and_issue() {
        let err = InvalidColorFormat::new("#12", FormatIssue::InvalidLength);
        assert_eq!(err.input(), "#12");
        assert_eq!(err.issue(), FormatIssue::InvalidLength);
        assert_eq!(
            err.to_string(),
            "invalid color format \"#12\": hex color must have 3 or 6 digits"
        );
    }

    #[test]
    fn ramp_config_error_messages() {
        let err = RampConfigError::StopsNotDecreasing {
            index: 3,
            value: 70.0,
            previous: 69.0,
        };
        assert_eq!(
            err.to_string(),
            "lightness stops must strictly decrease: stop 3 (70) is not below 69"
        );
        assert_eq!(
            RampConfigError::InvalidFalloff(-1.0).to_string(),
            "edge falloff must be a finite positive exponent, got -1"
        );
    }

    #[test]
    fn base_index_error_names_the_valid_range() {
        assert_eq!(
            BaseIndexOutOfRange(10).to_string(),
            "base index 10 is outside 0..10"
        );
    }
}
