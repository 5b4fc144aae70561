// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scalar easing curves used to shape pressure and taper.

use core::f64::consts::PI;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

/// A scalar shaping curve, usually evaluated over `[0, 1]`.
///
/// Every named curve maps `0` to `0` and `1` to `1`. Values outside the unit
/// interval are passed through the same formula; callers that need a bounded
/// result should clamp the input first.
///
/// [`Easing::Custom`] accepts any plain function, which covers curves that are
/// not in the named set (for example a pressure response tuned for a
/// particular tablet).
#[derive(Clone, Copy, Debug, Default)]
pub enum Easing {
    /// `t`.
    #[default]
    Linear,
    /// Quadratic ease in.
    EaseInQuad,
    /// Quadratic ease out. The default start taper curve.
    EaseOutQuad,
    /// Quadratic ease in-out.
    EaseInOutQuad,
    /// Cubic ease in.
    EaseInCubic,
    /// Cubic ease out. The default end taper curve.
    EaseOutCubic,
    /// Cubic ease in-out.
    EaseInOutCubic,
    /// Quartic ease in.
    EaseInQuart,
    /// Quartic ease out.
    EaseOutQuart,
    /// Quartic ease in-out.
    EaseInOutQuart,
    /// Quintic ease in.
    EaseInQuint,
    /// Quintic ease out.
    EaseOutQuint,
    /// Quintic ease in-out.
    EaseInOutQuint,
    /// Sine ease in.
    EaseInSine,
    /// Sine ease out.
    EaseOutSine,
    /// Sine ease in-out.
    EaseInOutSine,
    /// Exponential ease in.
    EaseInExpo,
    /// Exponential ease out.
    EaseOutExpo,
    /// Exponential ease in-out.
    EaseInOutExpo,
    /// A caller-provided curve.
    Custom(fn(f64) -> f64),
}

impl Easing {
    /// Every named curve, in declaration order.
    pub const ALL: [Self; 19] = [
        Self::Linear,
        Self::EaseInQuad,
        Self::EaseOutQuad,
        Self::EaseInOutQuad,
        Self::EaseInCubic,
        Self::EaseOutCubic,
        Self::EaseInOutCubic,
        Self::EaseInQuart,
        Self::EaseOutQuart,
        Self::EaseInOutQuart,
        Self::EaseInQuint,
        Self::EaseOutQuint,
        Self::EaseInOutQuint,
        Self::EaseInSine,
        Self::EaseOutSine,
        Self::EaseInOutSine,
        Self::EaseInExpo,
        Self::EaseOutExpo,
        Self::EaseInOutExpo,
    ];

    /// Evaluates the curve at `t`.
    #[must_use]
    pub fn ease(self, t: f64) -> f64 {
        match self {
            Self::Linear => t,
            Self::EaseInQuad => t * t,
            Self::EaseOutQuad => t * (2.0 - t),
            Self::EaseInOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
            Self::EaseInCubic => t * t * t,
            Self::EaseOutCubic => (t - 1.0).powi(3) + 1.0,
            Self::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    (t - 1.0) * (2.0 * t - 2.0) * (2.0 * t - 2.0) + 1.0
                }
            }
            Self::EaseInQuart => t.powi(4),
            Self::EaseOutQuart => 1.0 - (t - 1.0).powi(4),
            Self::EaseInOutQuart => {
                if t < 0.5 {
                    8.0 * t.powi(4)
                } else {
                    1.0 - 8.0 * (t - 1.0).powi(4)
                }
            }
            Self::EaseInQuint => t.powi(5),
            Self::EaseOutQuint => 1.0 + (t - 1.0).powi(5),
            Self::EaseInOutQuint => {
                if t < 0.5 {
                    16.0 * t.powi(5)
                } else {
                    1.0 + 16.0 * (t - 1.0).powi(5)
                }
            }
            Self::EaseInSine => 1.0 - (t * PI / 2.0).cos(),
            Self::EaseOutSine => (t * PI / 2.0).sin(),
            Self::EaseInOutSine => -((PI * t).cos() - 1.0) / 2.0,
            Self::EaseInExpo => {
                if t <= 0.0 {
                    0.0
                } else {
                    2_f64.powf(10.0 * t - 10.0)
                }
            }
            Self::EaseOutExpo => {
                if t >= 1.0 {
                    1.0
                } else {
                    1.0 - 2_f64.powf(-10.0 * t)
                }
            }
            Self::EaseInOutExpo => {
                if t <= 0.0 {
                    0.0
                } else if t >= 1.0 {
                    1.0
                } else if t < 0.5 {
                    2_f64.powf(20.0 * t - 10.0) / 2.0
                } else {
                    (2.0 - 2_f64.powf(-20.0 * t + 10.0)) / 2.0
                }
            }
            Self::Custom(f) => f(t),
        }
    }
}
