//! Toolpath segment data model
//!
//! The interpreter flattens every motion command into straight [`Segment`]s
//! tagged with the motion kind, the modal tool, the originating source line,
//! and a cumulative distance range. Collaborators (rendering, DXF export,
//! playback) consume these without re-parsing the program.

use gcodeview_core::geom::{BoundingBox, Point3D};
use serde::{Deserialize, Serialize};

/// Motion kind of a toolpath segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SegmentKind {
    /// Rapid traverse (G0)
    Rapid,
    /// Straight cutting move (G1)
    Feed,
    /// Clockwise arc step (G2)
    ArcCw,
    /// Counter-clockwise arc step (G3)
    ArcCcw,
    /// Drill plunge of a canned cycle (G81/G83)
    Drill,
}

impl SegmentKind {
    /// Whether this kind is a rapid traverse
    pub fn is_rapid(&self) -> bool {
        matches!(self, SegmentKind::Rapid)
    }

    /// Whether this kind removes material (everything except rapids)
    pub fn is_cutting(&self) -> bool {
        !self.is_rapid()
    }
}

/// One straight drawable primitive of the toolpath
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub kind: SegmentKind,
    pub start: Point3D,
    pub end: Point3D,
    /// Modal tool active when the segment was generated
    pub tool: u32,
    /// Zero-based index into the original program text
    pub source_line: usize,
    /// Cumulative path length at the segment start
    pub dist_start: f64,
    /// Cumulative path length at the segment end
    pub dist_end: f64,
}

impl Segment {
    /// Euclidean length of the segment
    pub fn length(&self) -> f64 {
        self.start.distance_to(&self.end)
    }
}

/// Output of one full interpretation run
///
/// Recomputed wholesale on every text change; a new result fully replaces
/// the old one.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct InterpretationResult {
    /// Segments in program order, which is also traversal order
    pub segments: Vec<Segment>,
    /// Extent of every visited position, origin included
    pub bounds: BoundingBox,
    /// Final cumulative path length
    pub total_length: f64,
    /// Estimated run time in minutes
    pub estimated_time: f64,
}

impl InterpretationResult {
    /// One-line status text for presentation layers
    pub fn summary(&self) -> String {
        format!(
            "Length: {:.1} | Est. time: {:.1} min",
            self.total_length, self.estimated_time
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_classification() {
        assert!(SegmentKind::Rapid.is_rapid());
        assert!(!SegmentKind::Rapid.is_cutting());
        for kind in [
            SegmentKind::Feed,
            SegmentKind::ArcCw,
            SegmentKind::ArcCcw,
            SegmentKind::Drill,
        ] {
            assert!(kind.is_cutting());
            assert!(!kind.is_rapid());
        }
    }

    #[test]
    fn test_segment_length() {
        let seg = Segment {
            kind: SegmentKind::Feed,
            start: Point3D::new(0.0, 0.0, 0.0),
            end: Point3D::new(0.0, 3.0, 4.0),
            tool: 1,
            source_line: 0,
            dist_start: 0.0,
            dist_end: 5.0,
        };
        assert!((seg.length() - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_summary_format() {
        let result = InterpretationResult {
            total_length: 123.456,
            estimated_time: 2.04,
            ..Default::default()
        };
        assert_eq!(result.summary(), "Length: 123.5 | Est. time: 2.0 min");
    }
}
