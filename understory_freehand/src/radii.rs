// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::pressure::{calligraphy_factor, next_pressure, prime_pressure, unit};
use crate::{Easing, StrokeOptions, StrokePoint};

/// Floor applied to every radius once a taper is active.
pub const MIN_TAPERED_RADIUS: f64 = 0.01;

/// Which branch of the radius pass produced the widths.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RadiiPath {
    /// No points; nothing was written.
    Empty,
    /// Short stroke with device pressure, drawn as a uniform dot.
    Dot,
    /// Zero thinning: every radius is `size / 2` before tapering.
    Flat,
    /// Per-point pressure, optionally with the calligraphy factor.
    Pressure,
}

/// Debug snapshot of one [`compute_radii`] call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RadiiDebugInfo {
    /// Branch taken.
    pub path: RadiiPath,
    /// Number of points processed.
    pub point_count: usize,
    /// Running length of the last point.
    pub total_length: f64,
    /// Size after [`StrokeOptions::effective_size`].
    pub size: f64,
    /// Resolved start taper distance; `0` when not tapered.
    pub taper_start: f64,
    /// Resolved end taper distance; `0` when not tapered.
    pub taper_end: f64,
    /// Radius of the first point before tapering and halving.
    pub first_radius: Option<f64>,
    /// Whether radii were halved for a stroke of two points or fewer.
    pub halved: bool,
}

impl RadiiDebugInfo {
    fn new(path: RadiiPath, point_count: usize, total_length: f64, size: f64) -> Self {
        Self {
            path,
            point_count,
            total_length,
            size,
            taper_start: 0.0,
            taper_end: 0.0,
            first_radius: None,
            halved: false,
        }
    }
}

/// Writes a radius (half-width) into every point of a stroke.
///
/// `points` must be assembled upstream, with `distance` and `running_length`
/// filled in. The pass is deterministic and never fails: degenerate settings
/// are absorbed as described on [`StrokeOptions::effective_size`],
/// [`Taper::resolve`](crate::Taper::resolve) and
/// [`StrokeOptions::effective_thinning`], and an empty slice is left alone.
///
/// The widths come from, in order:
/// 1. A dot shortcut for strokes shorter than `size` when pressure is not
///    simulated. Every point gets the heaviest pressure seen (at least `0.5`)
///    and the same radius; nothing else below applies.
/// 2. A priming pass that seeds pressure from the first `5 * size` of path.
/// 3. Per-point pressure (simulated from spacing, or smoothed device
///    pressure), shaped by `thinning`, `easing` and, for device pressure, the
///    calligraphy factor.
/// 4. Start and end tapers, floored at [`MIN_TAPERED_RADIUS`].
/// 5. Halving for strokes of two points or fewer, whose round caps would
///    otherwise double their apparent width.
pub fn compute_radii(points: &mut [StrokePoint], options: &StrokeOptions) -> RadiiDebugInfo {
    let Some(last) = points.last() else {
        return RadiiDebugInfo::new(RadiiPath::Empty, 0, 0.0, options.effective_size());
    };
    let size = options.effective_size();
    let thinning = options.effective_thinning();
    let simulate = options.simulate_pressure;
    let total_length = last.running_length.max(0.0);
    let mut info = RadiiDebugInfo::new(RadiiPath::Pressure, points.len(), total_length, size);

    if !simulate && total_length < size {
        let max_pressure = points
            .iter()
            .fold(0.5_f64, |max, p| max.max(unit(p.pressure)));
        let radius = shaped_radius(size, options.easing, thinning, max_pressure, 1.0);
        for p in points.iter_mut() {
            p.pressure = max_pressure;
            p.radius = radius;
        }
        info.path = RadiiPath::Dot;
        info.first_radius = Some(radius);
        return info;
    }

    if thinning == 0.0 {
        info.path = RadiiPath::Flat;
        for p in points.iter_mut() {
            p.radius = size / 2.0;
        }
    } else {
        let mut prev_pressure = prime_pressure(points, size, simulate);
        let mut prev_input = None;
        for p in points.iter_mut() {
            let pressure = next_pressure(prev_pressure, p, size, simulate);
            // The nib angle only applies to device pressure.
            let factor = match prev_input {
                Some(from) if !simulate => calligraphy_factor(p.input, from),
                _ => 1.0,
            };
            p.radius = shaped_radius(size, options.easing, thinning, pressure, factor);
            prev_pressure = pressure;
            prev_input = Some(p.input);
        }
    }
    info.first_radius = points.first().map(|p| p.radius);

    info.taper_start = options.start.taper.resolve(size, total_length);
    info.taper_end = options.end.taper.resolve(size, total_length);
    if info.taper_start > 0.0 || info.taper_end > 0.0 {
        for p in points.iter_mut() {
            let from_start = p.running_length;
            let from_end = total_length - p.running_length;
            let ts = taper_scale(from_start, info.taper_start, options.start.easing);
            let te = taper_scale(from_end, info.taper_end, options.end.easing);
            p.radius = (p.radius * ts.min(te)).max(MIN_TAPERED_RADIUS);
        }
    }

    if points.len() <= 2 {
        info.halved = true;
        for p in points.iter_mut() {
            p.radius /= 2.0;
        }
    }

    info
}

/// `size * easing((0.5 - thinning * (0.5 - pressure)) * factor)`, floored at 0.
fn shaped_radius(size: f64, easing: Easing, thinning: f64, pressure: f64, factor: f64) -> f64 {
    (size * easing.ease((0.5 - thinning * (0.5 - pressure)) * factor)).max(0.0)
}

/// Width scale at `distance` from a stroke end tapered over `taper`.
fn taper_scale(distance: f64, taper: f64, easing: Easing) -> f64 {
    if taper > 0.0 && distance < taper {
        easing.ease(unit(distance / taper))
    } else {
        1.0
    }
}
