//! Shared data models for scan results and the printers that consume them.

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
/// Issue severity. Only these two values are ever produced.
pub enum Severity {
    Warning,
    Error,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
/// What an issue reports: one of the registry detectors or a structural finding.
pub enum IssueKind {
    SmartQuotes,
    SmartSingleQuotes,
    BackticksInStrings,
    MixedQuotes,
    UnmatchedQuotes,
    UnbalancedQuotes,
    LineLength,
    FileError,
    ScanError,
}

impl IssueKind {
    pub fn as_str(self) -> &'static str {
        match self {
            IssueKind::SmartQuotes => "smart_quotes",
            IssueKind::SmartSingleQuotes => "smart_single_quotes",
            IssueKind::BackticksInStrings => "backticks_in_strings",
            IssueKind::MixedQuotes => "mixed_quotes",
            IssueKind::UnmatchedQuotes => "unmatched_quotes",
            IssueKind::UnbalancedQuotes => "unbalanced_quotes",
            IssueKind::LineLength => "line_length",
            IssueKind::FileError => "file_error",
            IssueKind::ScanError => "scan_error",
        }
    }
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// A single finding with location and severity.
///
/// `line` and `column` are 1-based; both are 0 for file-level failures.
pub struct Issue {
    pub line: usize,
    pub column: usize,
    pub kind: IssueKind,
    pub message: String,
    pub context: String,
    pub severity: Severity,
}

impl Issue {
    /// File-level failure (open or read), reported at line 0 without context.
    pub fn file_level(kind: IssueKind, message: String) -> Self {
        Issue {
            line: 0,
            column: 0,
            kind,
            message,
            context: String::new(),
            severity: Severity::Error,
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

#[derive(Debug, Clone, Serialize)]
/// All issues found in one file, in detection order.
pub struct ScanResult {
    pub path: String,
    pub issues: Vec<Issue>,
}

impl ScanResult {
    pub fn new(path: impl Into<String>) -> Self {
        ScanResult {
            path: path.into(),
            issues: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        self.issues.iter().any(Issue::is_error)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
/// Aggregated counts used by printers.
pub struct Summary {
    pub errors: usize,
    pub warnings: usize,
    pub files: usize,
    pub files_with_issues: usize,
}

impl Summary {
    /// Tally `results` against the number of files that were scanned.
    pub fn from_results(results: &[ScanResult], files: usize) -> Self {
        let mut summary = Summary {
            files,
            ..Summary::default()
        };
        for res in results {
            if !res.issues.is_empty() {
                summary.files_with_issues += 1;
            }
            for is in &res.issues {
                match is.severity {
                    Severity::Error => summary.errors += 1,
                    Severity::Warning => summary.warnings += 1,
                }
            }
        }
        summary
    }

    pub fn total(&self) -> usize {
        self.errors + self.warnings
    }
}
