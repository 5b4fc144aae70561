// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use crate::Easing;

/// Smallest stroke size the radius pass works with.
///
/// Sizes that are not finite or not above this value are replaced by it.
pub const MIN_SIZE: f64 = 1e-6;

/// How far a stroke end narrows.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Taper {
    /// No taper on this end.
    #[default]
    None,
    /// Taper over `max(size, total_length)`.
    Full,
    /// Taper over an explicit path distance.
    ///
    /// Distances that are not finite or not positive disable the taper.
    Distance(f64),
}

impl Taper {
    /// Resolves this taper to a path distance; `0` means no taper.
    #[must_use]
    pub fn resolve(self, size: f64, total_length: f64) -> f64 {
        match self {
            Self::None => 0.0,
            Self::Full => size.max(total_length),
            Self::Distance(d) if d.is_finite() && d > 0.0 => d,
            Self::Distance(_) => 0.0,
        }
    }
}

impl From<bool> for Taper {
    fn from(taper: bool) -> Self {
        if taper { Self::Full } else { Self::None }
    }
}

impl From<f64> for Taper {
    fn from(distance: f64) -> Self {
        Self::Distance(distance)
    }
}

/// Taper settings for one end of a stroke.
#[derive(Clone, Copy, Debug)]
pub struct TaperOptions {
    /// Taper extent.
    pub taper: Taper,
    /// Curve mapping the fraction of the taper distance covered to a width
    /// scale in `[0, 1]`.
    pub easing: Easing,
}

impl TaperOptions {
    /// Defaults for the start of a stroke: no taper, ease-out-quad curve.
    #[must_use]
    pub const fn start() -> Self {
        Self {
            taper: Taper::None,
            easing: Easing::EaseOutQuad,
        }
    }

    /// Defaults for the end of a stroke: no taper, ease-out-cubic curve.
    #[must_use]
    pub const fn end() -> Self {
        Self {
            taper: Taper::None,
            easing: Easing::EaseOutCubic,
        }
    }

    /// Sets the taper extent.
    #[must_use]
    pub fn with_taper(mut self, taper: impl Into<Taper>) -> Self {
        self.taper = taper.into();
        self
    }

    /// Sets the taper curve.
    #[must_use]
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }
}

/// Which end of a stroke a setting applies to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StrokeEnd {
    /// The first point.
    Start,
    /// The last point.
    End,
}

/// Width settings for one stroke.
///
/// ```rust
/// use understory_freehand::{Easing, StrokeOptions, TaperOptions};
///
/// let options = StrokeOptions::new(8.0)
///     .with_thinning(0.6)
///     .with_start(TaperOptions::start().with_taper(true))
///     .with_end(TaperOptions::end().with_taper(24.0).with_easing(Easing::EaseOutSine));
/// assert!(options.validate().is_ok());
/// ```
#[derive(Clone, Copy, Debug)]
pub struct StrokeOptions {
    /// Base stroke diameter.
    pub size: f64,
    /// How strongly pressure affects width, roughly in `[-1, 1]`.
    ///
    /// Zero gives a constant half-width of `size / 2`. Negative values make
    /// strokes thinner under pressure.
    pub thinning: f64,
    /// Derive pressure from point spacing instead of trusting the device.
    pub simulate_pressure: bool,
    /// Curve applied to the thinning-weighted pressure before scaling by
    /// `size`.
    pub easing: Easing,
    /// Taper at the first point.
    pub start: TaperOptions,
    /// Taper at the last point.
    pub end: TaperOptions,
}

impl Default for StrokeOptions {
    fn default() -> Self {
        Self {
            size: 16.0,
            thinning: 0.5,
            simulate_pressure: true,
            easing: Easing::Linear,
            start: TaperOptions::start(),
            end: TaperOptions::end(),
        }
    }
}

impl StrokeOptions {
    /// Default options with the given size.
    #[must_use]
    pub fn new(size: f64) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    /// Sets [`thinning`](Self::thinning).
    #[must_use]
    pub fn with_thinning(mut self, thinning: f64) -> Self {
        self.thinning = thinning;
        self
    }

    /// Sets [`simulate_pressure`](Self::simulate_pressure).
    #[must_use]
    pub fn with_simulate_pressure(mut self, simulate_pressure: bool) -> Self {
        self.simulate_pressure = simulate_pressure;
        self
    }

    /// Sets the pressure curve.
    #[must_use]
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Sets the start taper.
    #[must_use]
    pub fn with_start(mut self, start: TaperOptions) -> Self {
        self.start = start;
        self
    }

    /// Sets the end taper.
    #[must_use]
    pub fn with_end(mut self, end: TaperOptions) -> Self {
        self.end = end;
        self
    }

    /// The size the radius pass actually uses.
    ///
    /// Returns [`MIN_SIZE`] when `size` is not finite or not above it.
    #[must_use]
    pub fn effective_size(&self) -> f64 {
        if self.size.is_finite() && self.size > MIN_SIZE {
            self.size
        } else {
            MIN_SIZE
        }
    }

    /// The thinning the radius pass actually uses.
    ///
    /// NaN and infinite values become `0`, which draws a flat stroke.
    #[must_use]
    pub fn effective_thinning(&self) -> f64 {
        if self.thinning.is_finite() {
            self.thinning
        } else {
            0.0
        }
    }

    /// Reports the first setting the radius pass would have to correct.
    ///
    /// The pass itself never fails, so this is only needed by callers that
    /// want to reject configuration instead of drawing a degenerate stroke.
    pub fn validate(&self) -> Result<(), OptionsError> {
        if !self.size.is_finite() {
            return Err(OptionsError::NonFiniteSize);
        }
        if self.size <= 0.0 {
            return Err(OptionsError::NonPositiveSize);
        }
        if !self.thinning.is_finite() {
            return Err(OptionsError::NonFiniteThinning);
        }
        for (end, taper) in [
            (StrokeEnd::Start, self.start.taper),
            (StrokeEnd::End, self.end.taper),
        ] {
            if matches!(taper, Taper::Distance(d) if !d.is_finite() || d < 0.0) {
                return Err(OptionsError::InvalidTaperDistance { end });
            }
        }
        Ok(())
    }
}

/// A [`StrokeOptions`] setting outside the range the radius pass expects.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionsError {
    /// `size` is NaN or infinite.
    NonFiniteSize,
    /// `size` is zero or negative.
    NonPositiveSize,
    /// `thinning` is NaN or infinite.
    NonFiniteThinning,
    /// An explicit taper distance is negative, NaN or infinite.
    InvalidTaperDistance {
        /// The stroke end with the bad distance.
        end: StrokeEnd,
    },
}

impl fmt::Display for OptionsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFiniteSize => f.write_str("stroke size is not finite"),
            Self::NonPositiveSize => f.write_str("stroke size is not positive"),
            Self::NonFiniteThinning => f.write_str("thinning is not finite"),
            Self::InvalidTaperDistance { end } => {
                write!(f, "{end:?} taper distance is negative or not finite")
            }
        }
    }
}

impl core::error::Error for OptionsError {}

#[cfg(test)]
mod tests {
    use super::{MIN_SIZE, OptionsError, StrokeEnd, StrokeOptions, Taper, TaperOptions};
    use crate::Easing;

    #[test]
    fn defaults() {
        let o = StrokeOptions::default();
        assert_eq!(o.size, 16.0);
        assert_eq!(o.thinning, 0.5);
        assert!(o.simulate_pressure);
        assert!(matches!(o.easing, Easing::Linear));
        assert_eq!(o.start.taper, Taper::None);
        assert_eq!(o.end.taper, Taper::None);
        assert!(matches!(o.start.easing, Easing::EaseOutQuad));
        assert!(matches!(o.end.easing, Easing::EaseOutCubic));
    }

    #[test]
    fn taper_resolution() {
        assert_eq!(Taper::None.resolve(16.0, 100.0), 0.0);
        assert_eq!(Taper::Full.resolve(16.0, 100.0), 100.0);
        assert_eq!(Taper::Full.resolve(16.0, 4.0), 16.0);
        assert_eq!(Taper::Distance(30.0).resolve(16.0, 100.0), 30.0);
        assert_eq!(Taper::Distance(0.0).resolve(16.0, 100.0), 0.0);
        assert_eq!(Taper::Distance(-3.0).resolve(16.0, 100.0), 0.0);
        assert_eq!(Taper::Distance(f64::NAN).resolve(16.0, 100.0), 0.0);
        assert_eq!(Taper::from(true), Taper::Full);
        assert_eq!(Taper::from(false), Taper::None);
        assert_eq!(Taper::from(12.0), Taper::Distance(12.0));
    }

    #[test]
    fn effective_size_guards_degenerate_values() {
        assert_eq!(StrokeOptions::new(8.0).effective_size(), 8.0);
        assert_eq!(StrokeOptions::new(0.0).effective_size(), MIN_SIZE);
        assert_eq!(StrokeOptions::new(-4.0).effective_size(), MIN_SIZE);
        assert_eq!(StrokeOptions::new(f64::NAN).effective_size(), MIN_SIZE);
        assert_eq!(StrokeOptions::new(f64::INFINITY).effective_size(), MIN_SIZE);
        assert_eq!(
            StrokeOptions::default()
                .with_thinning(f64::NAN)
                .effective_thinning(),
            0.0
        );
        for thinning in [f64::INFINITY, f64::NEG_INFINITY] {
            assert_eq!(
                StrokeOptions::default()
                    .with_thinning(thinning)
                    .effective_thinning(),
                0.0
            );
        }
    }

    #[test]
    fn validate_reports_first_problem() {
        assert_eq!(StrokeOptions::default().validate(), Ok(()));
        assert_eq!(
            StrokeOptions::new(f64::NAN).validate(),
            Err(OptionsError::NonFiniteSize)
        );
        assert_eq!(
            StrokeOptions::new(0.0).validate(),
            Err(OptionsError::NonPositiveSize)
        );
        assert_eq!(
            StrokeOptions::default()
                .with_thinning(f64::INFINITY)
                .validate(),
            Err(OptionsError::NonFiniteThinning)
        );
        assert_eq!(
            StrokeOptions::default()
                .with_end(TaperOptions::end().with_taper(-1.0))
                .validate(),
            Err(OptionsError::InvalidTaperDistance {
                end: StrokeEnd::End
            })
        );
    }
}
