//! Legitimacy filter: line-local heuristics that suppress detector matches.
//!
//! These checks look at raw text only. Comment markers are matched by
//! substring anywhere on the line, so a `#` or `//` inside a string literal
//! suppresses too, and a smart quote in code before a trailing comment is
//! never reported. Callers may rely on exactly these triggers.

use crate::detectors::{Detector, DetectorKind};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref NON_LATIN_LETTER: Regex = Regex::new(r"[\p{L}&&\P{Latin}]").unwrap();
}

const COMMENT_MARKERS: [&str; 3] = ["//", "/*", "#"];
const CONTRACTIONS: [&str; 3] = ["'s", "'t", "'re"];

/// Return true when a match of `detector` on `line` should not be reported.
pub fn is_legitimate_use(line: &str, detector: &Detector) -> bool {
    is_legitimate_for(line, detector.kind)
}

/// Same as [`is_legitimate_use`], keyed by detector kind.
pub fn is_legitimate_for(line: &str, kind: DetectorKind) -> bool {
    match kind {
        DetectorKind::SmartQuotes => {
            COMMENT_MARKERS.iter().any(|m| line.contains(m)) || contains_international_text(line)
        }
        // Straight apostrophes, even though the detector fires on curly ones.
        DetectorKind::SmartSingleQuotes => CONTRACTIONS.iter().any(|c| line.contains(c)),
        DetectorKind::BackticksInStrings
        | DetectorKind::MixedQuotes
        | DetectorKind::UnmatchedQuotes => false,
    }
}

/// True when the line holds any letter outside the Latin script (CJK, Cyrillic, ...).
pub fn contains_international_text(line: &str) -> bool {
    NON_LATIN_LETTER.is_match(line)
}
