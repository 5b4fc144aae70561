// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pressure smoothing and simulation.
//!
//! Pressure is carried between points as a single accumulator, so each helper
//! here takes the previous value and returns the next one.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::Point;

use crate::StrokePoint;

/// How quickly simulated pressure follows changes in point spacing.
pub const RATE_OF_PRESSURE_CHANGE: f64 = 0.275;

/// Calligraphy width multiplier for segments at 90 degrees to the nib.
pub const CALLIGRAPHY_MAX_WIDTH: f64 = 1.5;

/// Calligraphy width multiplier for segments along the nib.
pub const CALLIGRAPHY_MIN_WIDTH: f64 = 0.2;

/// Length of the stroke prefix, in multiples of size, used to seed pressure.
pub(crate) const PRIMING_WINDOW: f64 = 5.0;

/// Clamps to `[0, 1]`, mapping NaN to `0`.
pub(crate) fn unit(v: f64) -> f64 {
    v.max(0.0).min(1.0)
}

/// Closeness of a point to its predecessor: `0` when coincident, `1` at one
/// stroke size or more apart.
fn spacing(distance: f64, size: f64) -> f64 {
    unit(distance / size)
}

/// Pressure derived from spacing: widely spaced (fast) points press lighter.
fn simulated(prev: f64, sp: f64) -> f64 {
    let rp = unit(1.0 - sp);
    unit(prev + (rp - prev) * (sp * RATE_OF_PRESSURE_CHANGE))
}

fn blended(prev: f64, input: f64, t: f64) -> f64 {
    unit(prev + (unit(input) - prev) * t)
}

/// Runs the priming pass and returns the pressure to start the stroke with.
///
/// Strokes almost always start slowly, which would otherwise read as heavy
/// pressure and leave a blob at the first point. Points within
/// `PRIMING_WINDOW * size` of the start are folded into a damped estimate.
pub(crate) fn prime_pressure(points: &[StrokePoint], size: f64, simulate: bool) -> f64 {
    let Some(first) = points.first() else {
        return 0.0;
    };
    points
        .iter()
        .take_while(|p| p.running_length <= size * PRIMING_WINDOW)
        .fold(unit(first.pressure), |prev, p| {
            let sp = spacing(p.distance, size);
            let candidate = if simulate {
                simulated(prev, sp)
            } else {
                blended(prev, p.pressure, 0.5)
            };
            prev + (candidate - prev) * 0.5
        })
}

/// Pressure at `point`, given the pressure at its predecessor.
pub(crate) fn next_pressure(prev: f64, point: &StrokePoint, size: f64, simulate: bool) -> f64 {
    let sp = spacing(point.distance, size);
    if simulate {
        simulated(prev, sp)
    } else {
        blended(prev, point.pressure, sp * RATE_OF_PRESSURE_CHANGE)
    }
}

/// Width multiplier for a segment, approximating a pen with a fixed nib.
///
/// Segments along either axis get [`CALLIGRAPHY_MIN_WIDTH`], diagonals are
/// wider, and vertical segments reach [`CALLIGRAPHY_MAX_WIDTH`].
pub(crate) fn calligraphy_factor(from: Point, to: Point) -> f64 {
    let angle = (to - from).atan2();
    CALLIGRAPHY_MIN_WIDTH + (CALLIGRAPHY_MAX_WIDTH - CALLIGRAPHY_MIN_WIDTH) * angle.sin().abs()
}
