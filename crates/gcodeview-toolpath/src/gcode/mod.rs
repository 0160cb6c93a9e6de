//! G-code interpretation and toolpath geometry
//!
//! Two independent passes walk the same program text: the modal
//! [`interpreter`] builds the drawable toolpath, and the [`scanner`]
//! re-simulates it for safety findings. Both consume the shared
//! [`words`] tokenizer; the duplication of their modal state machines is
//! deliberate so the passes stay independently testable.

pub mod arc;
pub mod interpreter;
pub mod playback;
pub mod scanner;
pub mod segment;
pub mod words;

/// Threshold below which radii, sweeps, and feeds count as zero
pub(crate) const EPSILON: f64 = 1e-3;

pub use arc::{tessellate, ArcDirection};
pub use interpreter::{interpret, Interpreter, DEFAULT_RAPID_FEED};
pub use playback::{locate, PlaybackPosition};
pub use scanner::{scan, worst, Diagnostic, Severity};
pub use segment::{InterpretationResult, Segment, SegmentKind};
pub use words::{parse_words, strip_comment, Word};
