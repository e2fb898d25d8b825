//! quotescan core library.
//!
//! This crate exposes programmatic APIs for scanning text files for
//! quotation-mark issues: curly quotes, mixed or unmatched quotes, backticks
//! inside string literals, unbalanced quotes, and overlong lines.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `config`: Config file loading and effective configuration resolution.
//! - `detectors`: The fixed pattern registry.
//! - `legitimacy`: Heuristics that suppress acceptable matches.
//! - `balance`: Per-line quote parity check.
//! - `scan`: Per-line pipeline and per-file aggregation.
//! - `discover`: Include/exclude glob expansion.
//! - `models`: Issue, result and summary structs.
//! - `output`: Human/JSON printers.
//! - `utils`: Supporting helpers.
//!
//! Detection works on raw lines with regular expressions, not on a token
//! stream, so comment and string boundaries are only approximated.
pub mod balance;
pub mod cli;
pub mod config;
pub mod detectors;
pub mod discover;
pub mod legitimacy;
pub mod models;
pub mod output;
pub mod scan;
pub mod utils;

use models::ScanResult;

/// Process exit code for a finished scan.
///
/// 0 when nothing was found, 1 when an error-severity issue exists and
/// `exit_on_error` is set, 2 otherwise.
pub fn exit_code(results: &[ScanResult], exit_on_error: bool) -> i32 {
    let total: usize = results.iter().map(|r| r.issues.len()).sum();
    if exit_on_error && results.iter().any(ScanResult::has_errors) {
        1
    } else if total > 0 {
        2
    } else {
        0
    }
}
