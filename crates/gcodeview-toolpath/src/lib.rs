//! # GCodeView Toolpath
//!
//! G-code interpretation and toolpath geometry for GCodeView: the modal
//! interpreter, arc tessellation, the safety scanner, and playback path
//! queries. Rendering and file I/O live with the consumers of these types.

pub mod gcode;

pub use gcode::{
    interpret, locate, parse_words, scan, strip_comment, tessellate, worst, ArcDirection,
    Diagnostic, InterpretationResult, Interpreter, PlaybackPosition, Segment, SegmentKind,
    Severity, Word, DEFAULT_RAPID_FEED,
};
