//! Path queries for playback scrubbing
//!
//! Resolves "where is the tool after D units of travel" against the ordered
//! segment list. The cumulative distances are monotonic, so a binary search
//! keeps repeated queries cheap while a slider is dragged.

use gcodeview_core::geom::Point3D;
use serde::{Deserialize, Serialize};

use super::segment::Segment;

/// Resolved playback state at a scrub distance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaybackPosition {
    pub position: Point3D,
    pub tool: u32,
    /// Source line to synchronize an editor cursor to; `None` for the
    /// empty-path sentinel
    pub source_line: Option<usize>,
}

impl Default for PlaybackPosition {
    fn default() -> Self {
        Self {
            position: Point3D::origin(),
            tool: 0,
            source_line: None,
        }
    }
}

/// Locate the tool at `target_distance` along the path
///
/// Picks the first segment in program order whose distance interval
/// contains the target and interpolates within it. Distances past the end
/// clamp to the final endpoint; an empty path yields the origin sentinel.
pub fn locate(segments: &[Segment], target_distance: f64) -> PlaybackPosition {
    let Some(last) = segments.last() else {
        return PlaybackPosition::default();
    };

    if target_distance >= last.dist_end {
        return PlaybackPosition {
            position: last.end,
            tool: last.tool,
            source_line: Some(last.source_line),
        };
    }

    let target = target_distance.max(0.0);
    let idx = segments.partition_point(|s| s.dist_end < target);
    let segment = &segments[idx];

    let span = segment.dist_end - segment.dist_start;
    let position = if span > 0.0 {
        let t = (target - segment.dist_start) / span;
        segment.start.lerp(&segment.end, t)
    } else {
        // Zero-length segment: the start is the position
        segment.start
    };

    PlaybackPosition {
        position,
        tool: segment.tool,
        source_line: Some(segment.source_line),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gcode::interpreter::interpret;

    #[test]
    fn test_empty_path_sentinel() {
        let pos = locate(&[], 10.0);
        assert_eq!(pos, PlaybackPosition::default());
    }

    #[test]
    fn test_start_of_path() {
        let result = interpret("T3\nG1 X10 F100\nY10");
        let pos = locate(&result.segments, 0.0);
        assert_eq!(pos.position, Point3D::origin());
        assert_eq!(pos.tool, 3);
        assert_eq!(pos.source_line, Some(1));
    }

    #[test]
    fn test_interpolation_within_segment() {
        let result = interpret("G1 X10 F100");
        let pos = locate(&result.segments, 4.0);
        assert!((pos.position.x - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_boundary_belongs_to_earlier_segment() {
        let result = interpret("G1 X10 F100\nY10");
        let pos = locate(&result.segments, 10.0);
        // Shared boundary point of both segments
        assert_eq!(pos.position, Point3D::new(10.0, 0.0, 0.0));
        assert_eq!(pos.source_line, Some(0));
    }

    #[test]
    fn test_clamp_past_end() {
        let result = interpret("G1 X10 F100\nY10");
        let pos = locate(&result.segments, 1e6);
        assert_eq!(pos.position, Point3D::new(10.0, 10.0, 0.0));
        assert_eq!(pos.source_line, Some(1));
    }

    #[test]
    fn test_negative_distance_clamps_to_start() {
        let result = interpret("G1 X10 F100");
        let pos = locate(&result.segments, -5.0);
        assert_eq!(pos.position, Point3D::origin());
    }
}
