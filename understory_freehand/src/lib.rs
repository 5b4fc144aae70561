// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_freehand --heading-base-level=0

//! Understory Freehand: per-point widths for freehand strokes.
//!
//! Given the sampled points of one pen or pointer stroke, this crate computes
//! a radius (half-width) for every point. It:
//! - Simulates pressure from point spacing when the device reports none.
//! - Smooths device pressure when it does, and narrows or widens segments by
//!   direction like an angled calligraphy nib.
//! - Tapers the start and/or end of the stroke along an easing curve.
//!
//! It does **not** capture input or build outline geometry. Callers are
//! expected to:
//! - Assemble [`StrokePoint`]s upstream, filling in `distance` and
//!   `running_length` (and `input` if positions were streamlined).
//! - Call [`compute_radii`] once per stroke, or per redraw of a live stroke.
//! - Turn the resulting `(point, radius)` pairs into an outline for rendering.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use understory_freehand::{StrokeOptions, StrokePoint, TaperOptions, compute_radii};
//!
//! // A straight stroke with points 10 units apart.
//! let mut points: Vec<StrokePoint> = (0..5)
//!     .map(|i| {
//!         let x = 10.0 * f64::from(i);
//!         let distance = if i == 0 { 0.0 } else { 10.0 };
//!         StrokePoint::new(Point::new(x, 0.0), 0.5, distance, x)
//!     })
//!     .collect();
//!
//! let options = StrokeOptions::new(16.0).with_end(TaperOptions::end().with_taper(true));
//! let info = compute_radii(&mut points, &options);
//!
//! assert_eq!(info.point_count, 5);
//! // The last point is tapered all the way down to the floor.
//! assert_eq!(points[4].radius, understory_freehand::MIN_TAPERED_RADIUS);
//! assert!(points.iter().all(|p| p.radius > 0.0));
//! ```
//!
//! ## Degenerate input
//!
//! The pass is meant for a hot rendering path and never fails. Empty strokes
//! are left alone, non-positive or non-finite sizes collapse to [`MIN_SIZE`],
//! and pressure is clamped to `[0, 1]` where it is read. Callers that would
//! rather reject bad data can use [`StrokeOptions::validate`] and
//! [`check_points`] first.
//!
//! ## Diagnostics
//!
//! [`compute_radii`] returns a [`RadiiDebugInfo`] describing which branch ran,
//! the resolved taper distances and the first radius before tapering.
//!
//! This crate is `no_std`.

#![no_std]

mod easing;
mod options;
mod point;
mod pressure;
mod radii;

pub use easing::Easing;
pub use options::{MIN_SIZE, OptionsError, StrokeEnd, StrokeOptions, Taper, TaperOptions};
pub use point::{PointsError, StrokePoint, check_points};
pub use pressure::{CALLIGRAPHY_MAX_WIDTH, CALLIGRAPHY_MIN_WIDTH, RATE_OF_PRESSURE_CHANGE};
pub use radii::{MIN_TAPERED_RADIUS, RadiiDebugInfo, RadiiPath, compute_radii};
