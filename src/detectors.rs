//! Pattern registry: the fixed catalog of quoting-issue detectors.
//!
//! Each detector pairs a regular expression with a description. Detectors
//! are matched once per line; the first match only determines the column.
//! The registry is an immutable value built by `Registry::builtin()` and
//! passed into scanning explicitly.

use crate::models::IssueKind;
use regex::Regex;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Kinds produced by registry detectors.
pub enum DetectorKind {
    SmartQuotes,
    SmartSingleQuotes,
    BackticksInStrings,
    MixedQuotes,
    UnmatchedQuotes,
}

impl DetectorKind {
    pub const ALL: [DetectorKind; 5] = [
        DetectorKind::SmartQuotes,
        DetectorKind::SmartSingleQuotes,
        DetectorKind::BackticksInStrings,
        DetectorKind::MixedQuotes,
        DetectorKind::UnmatchedQuotes,
    ];

    pub fn issue_kind(self) -> IssueKind {
        match self {
            DetectorKind::SmartQuotes => IssueKind::SmartQuotes,
            DetectorKind::SmartSingleQuotes => IssueKind::SmartSingleQuotes,
            DetectorKind::BackticksInStrings => IssueKind::BackticksInStrings,
            DetectorKind::MixedQuotes => IssueKind::MixedQuotes,
            DetectorKind::UnmatchedQuotes => IssueKind::UnmatchedQuotes,
        }
    }

    pub fn as_str(self) -> &'static str {
        self.issue_kind().as_str()
    }
}

impl fmt::Display for DetectorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DetectorKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DetectorKind::ALL
            .into_iter()
            .find(|k| k.as_str() == s.trim())
            .ok_or_else(|| format!("unknown detector '{}'", s.trim()))
    }
}

#[derive(Debug, Clone)]
/// A named rule pairing a pattern with a human-readable description.
pub struct Detector {
    pub kind: DetectorKind,
    pub description: &'static str,
    pub pattern: Regex,
    /// Declared replacement text. Nothing applies it yet.
    pub replacement: Option<&'static str>,
}

impl Detector {
    fn new(
        kind: DetectorKind,
        description: &'static str,
        pattern: &str,
        replacement: Option<&'static str>,
    ) -> Self {
        Detector {
            kind,
            description,
            // Patterns are fixed literals below; a failure here is a programming error.
            pattern: Regex::new(pattern).expect("builtin detector pattern must compile"),
            replacement,
        }
    }

    pub fn is_match(&self, line: &str) -> bool {
        self.pattern.is_match(line)
    }
}

#[derive(Debug, Clone)]
/// Ordered detector catalog.
pub struct Registry {
    detectors: Vec<Detector>,
}

impl Registry {
    /// Build the builtin catalog. Order is significant: issues on a line are
    /// reported in this order.
    pub fn builtin() -> Self {
        let detectors = vec![
            Detector::new(
                DetectorKind::SmartQuotes,
                "Smart quotes (curly quotes)",
                "[\u{201C}\u{201D}]",
                Some("\""),
            ),
            Detector::new(
                DetectorKind::SmartSingleQuotes,
                "Smart single quotes (curly apostrophes)",
                "[\u{2018}\u{2019}]",
                Some("'"),
            ),
            Detector::new(
                DetectorKind::BackticksInStrings,
                "Backticks in string literals (potential template literal)",
                r#""[^"]*`[^"]*""#,
                None,
            ),
            Detector::new(
                DetectorKind::MixedQuotes,
                "Mixed quote types in same string",
                r#""[^"]*'[^"]*"|'[^']*"[^']*'"#,
                None,
            ),
            // Exactly one quote of a type on the whole line.
            Detector::new(
                DetectorKind::UnmatchedQuotes,
                "Unmatched quotes",
                r#"^[^"]*"[^"]*$|^[^']*'[^']*$"#,
                None,
            ),
        ];
        Registry { detectors }
    }

    /// Copy of this registry without the given kinds, order preserved.
    pub fn without(&self, disabled: &[DetectorKind]) -> Self {
        Registry {
            detectors: self
                .detectors
                .iter()
                .filter(|d| !disabled.contains(&d.kind))
                .cloned()
                .collect(),
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Detector> {
        self.detectors.iter()
    }

    pub fn get(&self, kind: DetectorKind) -> Option<&Detector> {
        self.detectors.iter().find(|d| d.kind == kind)
    }

    pub fn len(&self) -> usize {
        self.detectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.detectors.is_empty()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Registry::builtin()
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a Detector;
    type IntoIter = std::slice::Iter<'a, Detector>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
