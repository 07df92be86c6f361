//! Ten-step shade ramp construction in HSL space.
//!
//! # Algorithm
//!
//! A ramp is a fixed table of target lightness stops, lightest first. Every
//! stop keeps the base hue. Saturation is the base saturation scaled by
//! [`attenuation`], which fades to zero toward pure white and pure black so
//! the extreme shades do not turn neon. The stop whose target lightness is
//! closest to the base lightness is then replaced by the base color itself
//! (the *anchor*). Ties go to the lighter stop.
//!
//! Because the anchor lies between the midpoints of its neighbouring stops,
//! lightness stays non-increasing across the whole ramp.

use crate::color::Hsl;
use crate::error::RampConfigError;

/// Number of shades in every ramp and palette.
pub const SHADE_COUNT: usize = 10;

/// Target lightness (percent) for each shade, lightest first.
pub const DEFAULT_LIGHTNESS_STOPS: [f64; SHADE_COUNT] =
    [97.0, 90.0, 80.0, 69.0, 58.0, 49.0, 40.0, 32.0, 24.0, 14.0];

/// Exponent of the edge desaturation curve. Larger values keep full
/// saturation closer to the extremes.
pub const DEFAULT_EDGE_FALLOFF: f64 = 6.0;

/// Saturation scale factor for a shade at `lightness` percent.
///
/// `1 - |2L/100 - 1|^falloff`: exactly 1 at 50%, 0 at 0% and 100%, and
/// decreasing with distance from 50%. Lightness is clamped to `[0, 100]`.
#[must_use]
pub fn attenuation(lightness: f64, falloff: f64) -> f64 {
    let distance = (2.0 * lightness.clamp(0.0, 100.0) / 100.0 - 1.0).abs();
    (1.0 - distance.powf(falloff)).clamp(0.0, 1.0)
}

/// Lightness stops and desaturation curve for a ramp.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RampConfig {
    stops: [f64; SHADE_COUNT],
    edge_falloff: f64,
}

impl Default for RampConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl RampConfig {
    pub const DEFAULT: Self = Self {
        stops: DEFAULT_LIGHTNESS_STOPS,
        edge_falloff: DEFAULT_EDGE_FALLOFF,
    };

    /// Validate and create a configuration.
    ///
    /// Stops must be finite, within `[0, 100]` and strictly decreasing. The
    /// falloff exponent must be finite and positive.
    pub fn new(stops: [f64; SHADE_COUNT], edge_falloff: f64) -> Result<Self, RampConfigError> {
        for (index, &value) in stops.iter().enumerate() {
            if !value.is_finite() || !(0.0..=100.0).contains(&value) {
                return Err(RampConfigError::StopOutOfRange { index, value });
            }
        }
        for (index, pair) in stops.windows(2).enumerate() {
            if pair[1] >= pair[0] {
                return Err(RampConfigError::StopsNotDecreasing {
                    index: index + 1,
                    value: pair[1],
                    previous: pair[0],
                });
            }
        }
        if !edge_falloff.is_finite() || edge_falloff <= 0.0 {
            return Err(RampConfigError::InvalidFalloff(edge_falloff));
        }
        Ok(Self {
            stops,
            edge_falloff,
        })
    }

    #[must_use]
    pub const fn stops(&self) -> &[f64; SHADE_COUNT] {
        &self.stops
    }

    #[must_use]
    pub const fn edge_falloff(&self) -> f64 {
        self.edge_falloff
    }

    /// Index of the stop nearest to `lightness`, lighter stop on ties.
    #[must_use]
    pub fn anchor_index(&self, lightness: f64) -> usize {
        nearest_index(self.stops.iter().copied(), lightness)
    }

    /// Build the ramp for `base`, anchored at [`anchor_index`](Self::anchor_index).
    #[must_use]
    pub fn build(&self, base: Hsl) -> [Hsl; SHADE_COUNT] {
        let mut ramp = self
            .stops
            .map(|l| Hsl::new(base.h, base.s * attenuation(l, self.edge_falloff), l));
        ramp[self.anchor_index(base.l)] = base;
        ramp
    }
}

/// Build a ramp for `base` with the default stops and curve.
///
/// ```
/// use shadegen::{build_ramp, select_base_index, Hsl};
///
/// let base = Hsl::new(208.0, 80.0, 52.0);
/// let ramp = build_ramp(base);
/// let index = select_base_index(&ramp, base);
/// assert_eq!(ramp[index], base);
/// ```
#[must_use]
pub fn build_ramp(base: Hsl) -> [Hsl; SHADE_COUNT] {
    RampConfig::DEFAULT.build(base)
}

/// Index of the ramp entry whose lightness is closest to `original`'s.
///
/// Ties resolve to the smaller (lighter) index. On a ramp built from
/// `original` this is the anchor.
#[must_use]
pub fn select_base_index(ramp: &[Hsl; SHADE_COUNT], original: Hsl) -> usize {
    nearest_index(ramp.iter().map(|hsl| hsl.l), original.l)
}

fn nearest_index(values: impl Iterator<Item = f64>, target: f64) -> usize {
    let mut best = 0;
    let mut best_distance = f64::INFINITY;
    for (index, value) in values.enumerate() {
        let distance = (value - target).abs();
        // Strict comparison keeps the earliest index on ties.
        if distance < best_distance {
            best = index;
            best_distance = distance;
        }
    }
    best
}
