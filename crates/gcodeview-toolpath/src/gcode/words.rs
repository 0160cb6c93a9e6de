//! Modal word extraction shared by the interpreter and the safety scanner
//!
//! A modal word is a single letter address followed by a number ("G1",
//! "X10.5", "F-200"). Extraction is best-effort: tokens whose numeric part
//! does not parse are dropped silently, and comment text is never scanned.

use regex::Regex;
use std::sync::OnceLock;

/// One letter+number word extracted from a program line
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Word {
    /// Uppercase address letter (G, X, F, ...)
    pub letter: char,
    /// Numeric payload; integer semantics are implied by context
    pub value: f64,
}

/// Cut a line at the first comment introducer (`(` or `;`)
pub fn strip_comment(line: &str) -> &str {
    let end = line
        .find(['(', ';'])
        .unwrap_or(line.len());
    &line[..end]
}

/// Extract all valid words from one program line, in order of appearance
///
/// Comments are stripped first, letters are matched case-insensitively, and
/// unparseable tokens are skipped per-token. A line may repeat a letter; the
/// caller applies words in order so the last occurrence wins.
pub fn parse_words(line: &str) -> Vec<Word> {
    static WORD_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = WORD_REGEX.get_or_init(|| {
        Regex::new(r"([A-Z])([-+]?(?:[0-9]+\.?[0-9]*|\.[0-9]+))")
            .expect("invalid word regex")
    });

    let cleaned = strip_comment(line).to_uppercase();
    regex
        .captures_iter(&cleaned)
        .filter_map(|cap| {
            let letter = cap[1].chars().next()?;
            let value: f64 = cap[2].parse().ok()?;
            Some(Word { letter, value })
        })
        .collect()
}
