//! Safety-scan scenarios: crash heuristics, missing feed/speed, envelope
//! checks, and the tool-library lookup.

use gcodeview_core::data::{MachineLimits, ToolLibrary};
use gcodeview_toolpath::{scan, worst, Severity};

fn scan_default(text: &str) -> Vec<gcodeview_toolpath::Diagnostic> {
    scan(text, &ToolLibrary::new(), &MachineLimits::default())
}

#[test]
fn test_feed_move_into_material_is_not_a_crash() {
    // Z-5 is reached by a feed move with F100: only the spindle warning
    let diags = scan_default("N10 G0 X10 Y0\nN20 G1 X10 Y0 Z-5 F100");
    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].line, 2);
    assert_eq!(diags[0].severity, Severity::Warning);
    assert!(diags[0].message.contains("spindle speed 0"));
}

#[test]
fn test_missing_feed_without_f_word() {
    let diags = scan_default("N10 G0 X10 Y0\nN20 G1 X10 Y0 Z-5");
    let errors: Vec<_> = diags
        .iter()
        .filter(|d| d.severity == Severity::Error)
        .collect();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].line, 2);
    assert!(errors[0].message.contains("feed rate"));
    assert!(!diags.iter().any(|d| d.severity == Severity::Critical));
}

#[test]
fn test_rapid_plunge_is_critical() {
    let diags = scan_default("N10 G0 Z-1");
    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].line, 1);
    assert_eq!(diags[0].severity, Severity::Critical);
}

#[test]
fn test_rapid_lateral_move_inside_material() {
    let diags = scan_default("G0 Z-1\nG0 X5");
    assert_eq!(diags.len(), 2);
    // Line 1: plunge; line 2: lateral move while Z is still below zero
    assert_eq!(diags[0].line, 1);
    assert_eq!(diags[1].line, 2);
    assert!(diags[1].message.contains("lateral"));
    assert_eq!(worst(&diags), Some(Severity::Critical));
}

#[test]
fn test_diagonal_rapid_triggers_both_crash_checks() {
    // Target Z below zero AND lateral motion from below zero: the two
    // heuristics fire independently
    let diags = scan_default("G0 Z-2\nG0 X5 Y5 Z-1");
    let line2: Vec<_> = diags.iter().filter(|d| d.line == 2).collect();
    assert_eq!(line2.len(), 2);
    assert!(line2.iter().all(|d| d.severity == Severity::Critical));
}

#[test]
fn test_retract_before_lateral_move_is_clean() {
    let diags = scan_default("S1000 F100\nG1 Z-1\nG0 Z2\nG0 X5");
    assert!(diags.is_empty());
}

#[test]
fn test_unknown_tool_warning() {
    let mut tools = ToolLibrary::new();
    tools.insert(1, 10.0);
    let limits = MachineLimits::default();

    let diags = scan("T1 M6\nT9 M6", &tools, &limits);
    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].line, 2);
    assert_eq!(diags[0].severity, Severity::Warning);
    assert!(diags[0].message.contains("T9"));
}

#[test]
fn test_envelope_check_is_upper_bound_only() {
    let limits = MachineLimits::new(100.0, 100.0, 50.0);
    let tools = ToolLibrary::new();

    // Negative travel is not an envelope violation
    assert!(scan("G0 X-50 Y-50", &tools, &limits).is_empty());

    let diags = scan("G0 X150 Y10", &tools, &limits);
    assert_eq!(diags.len(), 1);
    assert!(diags[0].message.contains("150"));
}

#[test]
fn test_findings_stay_in_program_order() {
    let diags = scan_default("T9\nG0 Z-1\nG1 X5");
    let lines: Vec<usize> = diags.iter().map(|d| d.line).collect();
    let mut sorted = lines.clone();
    sorted.sort_unstable();
    assert_eq!(lines, sorted);
}

#[test]
fn test_scan_never_stops_on_findings() {
    // Every line is broken; the last one must still be reported
    let diags = scan_default("G0 Z-1\nG1 X1\nG1 X2\nG0 Z-3");
    assert!(diags.iter().any(|d| d.line == 4));
}

#[test]
fn test_words_inside_comments_are_not_scanned() {
    let diags = scan_default("G1 X5 S1000 F100 (T99 G0 Z-5)");
    assert!(diags.is_empty());
}

#[test]
fn test_diagnostic_serializes_for_report_layer() {
    let diags = scan_default("G0 Z-1");
    let json = serde_json::to_string(&diags).unwrap();
    assert!(json.contains("\"line\":1"));
    assert!(json.contains("Critical"));
}
