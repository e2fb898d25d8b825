//! Scan runner: applies the per-line checks to files and collects issues.
//!
//! Per line the order is fixed: length check, registry detectors (each
//! filtered through the legitimacy heuristics), then the balance check.
//! Failures never abort a scan; they become `file_error`/`scan_error` issues
//! on the affected file.

use crate::balance::has_balanced_quotes;
use crate::config::Config;
use crate::legitimacy::is_legitimate_use;
use crate::models::{Issue, IssueKind, ScanResult, Severity};
use log::debug;
use rayon::prelude::*;
use regex::Regex;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

const CONTEXT_LEN: usize = 80;
const LENGTH_CONTEXT_LEN: usize = 50;

/// Scan files in parallel. Results keep the order of `paths`.
pub fn scan_files(paths: &[PathBuf], config: &Config) -> Vec<ScanResult> {
    paths.par_iter().map(|p| scan_file(p, config)).collect()
}

/// Scan one file. An open failure yields a single `file_error` issue.
pub fn scan_file(path: &Path, config: &Config) -> ScanResult {
    let display = path.to_string_lossy().to_string();
    debug!("scanning {}", display);
    match File::open(path) {
        Ok(f) => scan_reader(&display, BufReader::new(f), config),
        Err(e) => {
            let mut res = ScanResult::new(display);
            res.issues.push(Issue::file_level(
                IssueKind::FileError,
                format!("Could not open file: {}", e),
            ));
            res
        }
    }
}

/// Scan line by line from any buffered reader.
///
/// `\n` and `\r\n` endings are both accepted. A read or UTF-8 decode error
/// stops the scan and appends a `scan_error` after the issues found so far.
pub fn scan_reader<R: BufRead>(path: &str, reader: R, config: &Config) -> ScanResult {
    let mut res = ScanResult::new(path);
    for (idx, line) in reader.lines().enumerate() {
        match line {
            Ok(line) => res.issues.extend(check_line(idx + 1, &line, config)),
            Err(e) => {
                res.issues.push(Issue::file_level(
                    IssueKind::ScanError,
                    format!("Error scanning file: {}", e),
                ));
                break;
            }
        }
    }
    res
}

/// All issues for a single line, in detection order.
pub fn check_line(line_no: usize, line: &str, config: &Config) -> Vec<Issue> {
    let mut issues = Vec::new();
    if let Some(is) = check_line_length(line_no, line, config.max_line_length) {
        issues.push(is);
    }
    for det in &config.registry {
        if det.is_match(line) && !is_legitimate_use(line, det) {
            issues.push(Issue {
                line: line_no,
                column: find_first_match(line, &det.pattern),
                kind: det.kind.issue_kind(),
                message: det.description.to_string(),
                context: truncate(line, CONTEXT_LEN),
                severity: Severity::Warning,
            });
        }
    }
    if !has_balanced_quotes(line) {
        issues.push(Issue {
            line: line_no,
            column: 1,
            kind: IssueKind::UnbalancedQuotes,
            message: "Unbalanced quotes detected".to_string(),
            context: truncate(line, CONTEXT_LEN),
            severity: Severity::Error,
        });
    }
    issues
}

/// Flag a line longer than `max` characters.
pub fn check_line_length(line_no: usize, line: &str, max: usize) -> Option<Issue> {
    let len = line.chars().count();
    if len <= max {
        return None;
    }
    Some(Issue {
        line: line_no,
        column: max + 1,
        kind: IssueKind::LineLength,
        message: format!("Line exceeds maximum length ({} > {})", len, max),
        context: truncate(line, LENGTH_CONTEXT_LEN),
        severity: Severity::Warning,
    })
}

/// 1-based character column of the first match, or 1 when nothing matches.
pub fn find_first_match(line: &str, pattern: &Regex) -> usize {
    match pattern.find(line) {
        Some(m) => line[..m.start()].chars().count() + 1,
        None => 1,
    }
}

/// Cut `s` to at most `max` characters, ending in `...` when shortened.
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    if max <= 3 {
        return "...".to_string();
    }
    let mut out: String = s.chars().take(max - 3).collect();
    out.push_str("...");
    out
}
