//! Modal G-code interpreter
//!
//! Walks the program line by line, carrying modal state (position, motion
//! mode, feed, spindle, tool, drill retract plane) forward, and flattens
//! every motion into distance-indexed [`Segment`]s. Parsing is best-effort
//! by design: a visualizer must show *something* for a program a real
//! controller might still partially accept, so unrecognized or malformed
//! tokens are skipped and interpretation continues with the last valid
//! modal state.

use gcodeview_core::geom::{BoundingBox, Point3D};
use tracing::debug;

use super::arc::{tessellate, ArcDirection};
use super::segment::{InterpretationResult, Segment, SegmentKind};
use super::words::parse_words;
use super::EPSILON;

/// Feed rate assumed for rapid traverses, in machine units per minute
pub const DEFAULT_RAPID_FEED: f64 = 3000.0;

/// Sticky motion mode (modal group 1 plus the drill cycles)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MotionMode {
    Rapid,
    Linear,
    ArcCw,
    ArcCcw,
    Drill,
}

/// Modal registers carried across lines within one interpretation run
#[derive(Debug, Clone, Copy)]
struct ModalState {
    position: Point3D,
    mode: MotionMode,
    feed: f64,
    spindle: f64,
    tool: u32,
    /// Drill-cycle retract plane (modal R word)
    retract: f64,
}

impl Default for ModalState {
    fn default() -> Self {
        Self {
            position: Point3D::origin(),
            mode: MotionMode::Rapid,
            feed: 0.0,
            spindle: 0.0,
            tool: 0,
            retract: 0.0,
        }
    }
}

/// Stateless interpreter front-end
///
/// Holds only configuration; every [`interpret`](Interpreter::interpret)
/// call builds its own modal state, so one instance is safely usable from
/// multiple threads.
#[derive(Debug, Clone)]
pub struct Interpreter {
    rapid_feed: f64,
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

impl Interpreter {
    /// Create an interpreter with the default rapid feed
    pub fn new() -> Self {
        Self {
            rapid_feed: DEFAULT_RAPID_FEED,
        }
    }

    /// Override the rapid feed used for time estimates
    pub fn with_rapid_feed(mut self, rapid_feed: f64) -> Self {
        self.rapid_feed = rapid_feed;
        self
    }

    /// Interpret a full program into an ordered, distance-indexed toolpath
    ///
    /// Never fails on malformed input. The result is recomputed wholesale
    /// and fully replaces any previous one.
    pub fn interpret(&self, text: &str) -> InterpretationResult {
        let mut state = ModalState::default();
        let mut segments: Vec<Segment> = Vec::new();
        let mut bounds = BoundingBox::default();
        let mut total_length = 0.0;
        let mut estimated_time = 0.0;

        for (line_idx, line) in text.lines().enumerate() {
            let words = parse_words(line);
            if words.is_empty() {
                continue;
            }

            // Extent includes the line's start position before any motion,
            // so a never-moved axis still contributes.
            bounds.include(&state.position);

            let mut target = state.position;
            let (mut i_off, mut j_off) = (0.0, 0.0);
            let mut axis_word = false;

            for word in &words {
                match word.letter {
                    'G' => match word.value as i32 {
                        0 => state.mode = MotionMode::Rapid,
                        1 => state.mode = MotionMode::Linear,
                        2 => state.mode = MotionMode::ArcCw,
                        3 => state.mode = MotionMode::ArcCcw,
                        81 | 83 => state.mode = MotionMode::Drill,
                        _ => {}
                    },
                    'X' => {
                        target.x = word.value;
                        axis_word = true;
                    }
                    'Y' => {
                        target.y = word.value;
                        axis_word = true;
                    }
                    'Z' => {
                        target.z = word.value;
                        axis_word = true;
                    }
                    'I' => i_off = word.value,
                    'J' => j_off = word.value,
                    'R' => state.retract = word.value,
                    'F' => state.feed = word.value,
                    'S' => state.spindle = word.value,
                    'T' => {
                        if word.value >= 0.0 {
                            state.tool = word.value as u32;
                        }
                    }
                    // M words and line numbers are no-ops here
                    _ => {}
                }
            }

            // Drill cycles fire even without a fresh axis word; everything
            // else needs one.
            if !axis_word && state.mode != MotionMode::Drill {
                continue;
            }

            let first_new = segments.len();
            match state.mode {
                MotionMode::Drill => {
                    let approach = Point3D::new(target.x, target.y, state.retract);
                    segments.push(self.raw_segment(
                        SegmentKind::Rapid,
                        state.position,
                        approach,
                        &state,
                        line_idx,
                    ));
                    segments.push(self.raw_segment(
                        SegmentKind::Drill,
                        approach,
                        target,
                        &state,
                        line_idx,
                    ));
                    // The controller retracts after the plunge
                    target.z = state.retract;
                }
                MotionMode::ArcCw | MotionMode::ArcCcw => {
                    let (direction, kind) = if state.mode == MotionMode::ArcCw {
                        (ArcDirection::Clockwise, SegmentKind::ArcCw)
                    } else {
                        (ArcDirection::CounterClockwise, SegmentKind::ArcCcw)
                    };
                    // Incremental IJ: the center is offset from the start
                    let center = (state.position.x + i_off, state.position.y + j_off);
                    let (chords, _) = tessellate(
                        (state.position.x, state.position.y),
                        (target.x, target.y),
                        center,
                        direction,
                        state.position.z,
                        target.z,
                    );
                    for (chord_start, chord_end) in chords {
                        segments.push(self.raw_segment(
                            kind, chord_start, chord_end, &state, line_idx,
                        ));
                    }
                }
                MotionMode::Rapid | MotionMode::Linear => {
                    let kind = if state.mode == MotionMode::Rapid {
                        SegmentKind::Rapid
                    } else {
                        SegmentKind::Feed
                    };
                    segments.push(self.raw_segment(
                        kind,
                        state.position,
                        target,
                        &state,
                        line_idx,
                    ));
                }
            }

            // Stamp cumulative distance and accumulate time with the feed
            // in effect at emission time.
            for segment in &mut segments[first_new..] {
                let length = segment.length();
                segment.dist_start = total_length;
                total_length += length;
                segment.dist_end = total_length;

                let feed = if segment.kind.is_rapid() {
                    self.rapid_feed
                } else {
                    state.feed
                };
                if feed > EPSILON {
                    estimated_time += length / feed;
                }

                bounds.include(&segment.start);
                bounds.include(&segment.end);
            }

            state.position = target;
        }

        bounds.include(&state.position);
        debug!(
            segments = segments.len(),
            total_length,
            estimated_time,
            final_feed = state.feed,
            final_spindle = state.spindle,
            final_tool = state.tool,
            "interpreted g-code program"
        );

        InterpretationResult {
            segments,
            bounds,
            total_length,
            estimated_time,
        }
    }

    fn raw_segment(
        &self,
        kind: SegmentKind,
        start: Point3D,
        end: Point3D,
        state: &ModalState,
        source_line: usize,
    ) -> Segment {
        Segment {
            kind,
            start,
            end,
            tool: state.tool,
            source_line,
            dist_start: 0.0,
            dist_end: 0.0,
        }
    }
}

/// Interpret a program with default settings
pub fn interpret(text: &str) -> InterpretationResult {
    Interpreter::new().interpret(text)
}
