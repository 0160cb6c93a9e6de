//! Circular interpolation: expands one G2/G3 command into line segments
//!
//! Works in the XY plane with linear Z interpolation across the sweep, so
//! helical moves come out as a spiral of straight chords. The chord count
//! scales with swept arc length so large arcs stay visually round without
//! bloating the segment list for tiny ones.

use gcodeview_core::geom::Point3D;
use std::f64::consts::TAU;
use tracing::trace;

use super::EPSILON;

/// Chords per unit of swept arc length
const CHORDS_PER_UNIT: f64 = 0.5;
/// Minimum chord count for any non-degenerate arc
const MIN_CHORDS: usize = 6;

/// Commanded rotational sense of an arc
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArcDirection {
    /// G2
    Clockwise,
    /// G3
    CounterClockwise,
}

/// Expand an arc into consecutive straight chords
///
/// `start`, `end`, and `center` are XY coordinates; Z travels linearly from
/// `start_z` to `end_z` across the sweep. Returns the chord endpoints in
/// traversal order plus the exact swept arc length. A degenerate arc
/// (radius or sweep below epsilon) yields no chords rather than failing.
pub fn tessellate(
    start: (f64, f64),
    end: (f64, f64),
    center: (f64, f64),
    direction: ArcDirection,
    start_z: f64,
    end_z: f64,
) -> (Vec<(Point3D, Point3D)>, f64) {
    let radius = ((start.0 - center.0).powi(2) + (start.1 - center.1).powi(2)).sqrt();
    if radius < EPSILON {
        trace!(radius, "skipping degenerate arc (start == center)");
        return (Vec::new(), 0.0);
    }

    let start_angle = (start.1 - center.1).atan2(start.0 - center.0);
    let mut end_angle = (end.1 - center.1).atan2(end.0 - center.0);

    // Force the sweep into the commanded rotational sense: clockwise arcs
    // must sweep to a smaller angle, counter-clockwise to a larger one.
    match direction {
        ArcDirection::Clockwise if end_angle > start_angle => end_angle -= TAU,
        ArcDirection::CounterClockwise if end_angle < start_angle => end_angle += TAU,
        _ => {}
    }

    let sweep = (end_angle - start_angle).abs();
    if sweep < EPSILON {
        trace!(sweep, "skipping degenerate arc (zero sweep)");
        return (Vec::new(), 0.0);
    }

    let length = sweep * radius;
    let chords = ((length * CHORDS_PER_UNIT) as usize).max(MIN_CHORDS);
    let angle_step = (end_angle - start_angle) / chords as f64;
    let z_step = (end_z - start_z) / chords as f64;

    let mut prev = Point3D::new(
        center.0 + radius * start_angle.cos(),
        center.1 + radius * start_angle.sin(),
        start_z,
    );
    let mut pairs = Vec::with_capacity(chords);
    for i in 1..=chords {
        let theta = start_angle + angle_step * i as f64;
        let next = Point3D::new(
            center.0 + radius * theta.cos(),
            center.1 + radius * theta.sin(),
            start_z + z_step * i as f64,
        );
        pairs.push((prev, next));
        prev = next;
    }

    (pairs, length)
}
