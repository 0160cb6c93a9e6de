//! Safety scanner: re-simulates a program and flags likely mistakes
//!
//! Runs its own simplified modal simulation, deliberately independent of the
//! interpreter, so a change to one pass cannot silently corrupt the other.
//! Findings are data, never errors: scanning always walks the whole program
//! and an empty list means "no issues found".

use gcodeview_core::data::{MachineLimits, ToolLibrary};
use gcodeview_core::geom::Point3D;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, trace};

use super::words::parse_words;
use super::EPSILON;

/// How serious a finding is
///
/// Ordered so reports can sort or pick the worst finding.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Severity {
    /// Suspicious but possibly intentional
    Warning,
    /// Almost certainly a programming mistake
    Error,
    /// Likely machine or stock damage
    Critical,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Warning => write!(f, "WARNING"),
            Self::Error => write!(f, "ERROR"),
            Self::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// One advisory finding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// 1-based line number, matching what an editor gutter shows
    pub line: usize,
    pub severity: Severity,
    pub message: String,
}

impl Diagnostic {
    fn new(line: usize, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            line,
            severity,
            message: message.into(),
        }
    }
}

/// The most severe finding in a scan result
pub fn worst(diagnostics: &[Diagnostic]) -> Option<Severity> {
    diagnostics.iter().map(|d| d.severity).max()
}

/// Per-line motion classification
///
/// Unlike the interpreter's sticky motion mode, the scanner classifies each
/// line on its own: crash and feed checks only apply to lines that spell
/// out their G word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineMotion {
    Rapid,
    Cutting,
}

/// Scan a program for crashes, missing feed/speed, and envelope violations
///
/// All checks use the feed/spindle/tool values already updated by the same
/// line's F/S/T words, mirroring how a controller applies modal words before
/// executing the motion.
pub fn scan(text: &str, tools: &ToolLibrary, limits: &MachineLimits) -> Vec<Diagnostic> {
    let mut issues = Vec::new();

    let mut position = Point3D::origin();
    let mut feed = 0.0_f64;
    let mut spindle = 0.0_f64;
    let mut tool = 0_u32;

    for (idx, line) in text.lines().enumerate() {
        let line_number = idx + 1;
        let words = parse_words(line);
        if words.is_empty() {
            continue;
        }

        let mut target = position;
        let mut motion: Option<LineMotion> = None;
        let mut moved = false;

        for word in &words {
            match word.letter {
                'F' => feed = word.value,
                'S' => spindle = word.value,
                'T' => {
                    if word.value >= 0.0 {
                        let number = word.value as u32;
                        if number != 0 && !tools.contains(number) {
                            issues.push(Diagnostic::new(
                                line_number,
                                Severity::Warning,
                                format!("Tool T{} not in tool library", number),
                            ));
                        }
                        tool = number;
                        trace!(line_number, tool, "tool change");
                    }
                }
                'G' => match word.value as i32 {
                    0 => motion = Some(LineMotion::Rapid),
                    1..=3 => motion = Some(LineMotion::Cutting),
                    _ => {}
                },
                'X' => {
                    target.x = word.value;
                    moved = true;
                }
                'Y' => {
                    target.y = word.value;
                    moved = true;
                }
                'Z' => {
                    target.z = word.value;
                    moved = true;
                }
                _ => {}
            }
        }

        if !moved {
            continue;
        }

        if !limits.contains(&target) {
            issues.push(Diagnostic::new(
                line_number,
                Severity::Warning,
                format!(
                    "Move exceeds machine limits ({}, {}, {})",
                    target.x, target.y, target.z
                ),
            ));
        }

        if motion == Some(LineMotion::Rapid) {
            // Rapid plunge: the target is below the stock surface
            if target.z < 0.0 {
                issues.push(Diagnostic::new(
                    line_number,
                    Severity::Critical,
                    format!("Rapid move (G0) into material (Z{})", target.z),
                ));
            }
            // Rapid lateral move while already inside material
            if position.z < 0.0 && (target.x != position.x || target.y != position.y) {
                issues.push(Diagnostic::new(
                    line_number,
                    Severity::Critical,
                    format!("Rapid lateral move inside material (Z{})", position.z),
                ));
            }
        }

        if motion == Some(LineMotion::Cutting) {
            if feed <= EPSILON {
                issues.push(Diagnostic::new(
                    line_number,
                    Severity::Error,
                    "Cutting move without feed rate (F)",
                ));
            }
            if spindle <= EPSILON {
                issues.push(Diagnostic::new(
                    line_number,
                    Severity::Warning,
                    "Cutting move with spindle speed 0 (S)",
                ));
            }
        }

        position = target;
    }

    debug!(findings = issues.len(), "safety scan complete");
    issues
}
