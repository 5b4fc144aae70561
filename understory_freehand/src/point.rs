// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use kurbo::Point;

/// One sample of a freehand stroke.
///
/// Points are assembled upstream: `distance` and `running_length` are
/// expected to be filled in before the sequence reaches
/// [`compute_radii`](crate::compute_radii), which only writes `radius`
/// (and, for dot-like strokes, `pressure`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokePoint {
    /// Position of the sample, possibly after streamlining.
    pub point: Point,
    /// Original input position. Only used for the calligraphy angle.
    pub input: Point,
    /// Device pressure in `[0, 1]`, or a placeholder when the device has none.
    pub pressure: f64,
    /// Distance from the previous point; `0` for the first point.
    pub distance: f64,
    /// Path length from the first point up to this one.
    pub running_length: f64,
    /// Half-width of the stroke at this point.
    pub radius: f64,
}

impl StrokePoint {
    /// Creates a point whose input position equals its position.
    ///
    /// `radius` starts at zero.
    #[must_use]
    pub fn new(point: Point, pressure: f64, distance: f64, running_length: f64) -> Self {
        Self {
            point,
            input: point,
            pressure,
            distance,
            running_length,
            radius: 0.0,
        }
    }

    /// Sets the original input position used for the calligraphy angle.
    #[must_use]
    pub fn with_input(mut self, input: Point) -> Self {
        self.input = input;
        self
    }
}

/// A violation of the upstream point-assembly contract.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointsError {
    /// The sequence has no points.
    Empty,
    /// The first point has a non-zero running length.
    NonZeroStart,
    /// A point has a negative or NaN distance.
    NegativeDistance {
        /// Index of the offending point.
        index: usize,
    },
    /// A point's running length is lower than its predecessor's, or NaN.
    DecreasingRunningLength {
        /// Index of the offending point.
        index: usize,
    },
}

impl fmt::Display for PointsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("stroke has no points"),
            Self::NonZeroStart => f.write_str("first point has a non-zero running length"),
            Self::NegativeDistance { index } => {
                write!(f, "point {index} has a negative distance")
            }
            Self::DecreasingRunningLength { index } => {
                write!(f, "point {index} has a decreasing running length")
            }
        }
    }
}

impl core::error::Error for PointsError {}

/// Checks that `points` satisfies the contract [`compute_radii`](crate::compute_radii)
/// relies on.
///
/// [`compute_radii`](crate::compute_radii) never fails; it absorbs bad input
/// into degenerate widths. Call this first when you would rather reject a
/// malformed stroke.
pub fn check_points(points: &[StrokePoint]) -> Result<(), PointsError> {
    let Some(first) = points.first() else {
        return Err(PointsError::Empty);
    };
    if first.running_length != 0.0 {
        return Err(PointsError::NonZeroStart);
    }
    let mut prev_length = 0.0;
    for (index, p) in points.iter().enumerate() {
        if p.distance.is_nan() || p.distance < 0.0 {
            return Err(PointsError::NegativeDistance { index });
        }
        if p.running_length.is_nan() || p.running_length < prev_length {
            return Err(PointsError::DecreasingRunningLength { index });
        }
        prev_length = p.running_length;
    }
    Ok(())
}
