//! Output rendering for scan results.
//!
//! Supports `human` (default) and `json` outputs. The JSON form includes
//! per-file results and a top-level summary.

use crate::config::{Config, OutputMode};
use crate::models::{ScanResult, Severity, Summary};
use crate::utils::use_colors;
use owo_colors::OwoColorize;
use serde_json::json;
use serde_json::Value as JsonVal;
use std::path::Path;

/// Print the report for `results` (files with at least one issue).
pub fn print_report(results: &[ScanResult], config: &Config, files_scanned: usize) {
    match config.output {
        OutputMode::Json => {
            let summary = Summary::from_results(results, files_scanned);
            println!("{:#}", compose_report_json(results, &summary));
        }
        OutputMode::Human => {
            let color = use_colors(config.output);
            print!(
                "{}",
                render_human(results, &config.root, config.verbose, color)
            );
        }
    }
}

fn display_path(root: &Path, path: &str) -> String {
    if root == Path::new(".") {
        return path.to_string();
    }
    pathdiff::diff_paths(path, root)
        .map(|p| p.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string())
}

/// Render the human report. Paths are shown relative to `root`.
pub fn render_human(results: &[ScanResult], root: &Path, verbose: bool, color: bool) -> String {
    let mut out = String::new();
    if results.is_empty() {
        let ok = "✓ No quotation mark issues found!";
        if color {
            out.push_str(&format!("{}\n", ok.green().bold()));
        } else {
            out.push_str(&format!("{}\n", ok));
        }
    } else {
        let header = format!(
            "🔍 Found quotation mark issues in {} files:",
            results.len()
        );
        if color {
            out.push_str(&format!("{}\n\n", header.bold()));
        } else {
            out.push_str(&format!("{}\n\n", header));
        }
        for res in results {
            let path = display_path(root, &res.path);
            if color {
                out.push_str(&format!("📁 {}\n", path.bold()));
            } else {
                out.push_str(&format!("📁 {}\n", path));
            }
            for is in &res.issues {
                let icon = match (is.severity, color) {
                    (Severity::Error, true) => "✗".red().bold().to_string(),
                    (Severity::Error, false) => "✗".to_string(),
                    (Severity::Warning, true) => "⚠️".yellow().to_string(),
                    (Severity::Warning, false) => "⚠️".to_string(),
                };
                out.push_str(&format!(
                    "  {} Line {}:{} - {}: {}\n",
                    icon, is.line, is.column, is.kind, is.message
                ));
                if !is.context.is_empty() {
                    if color {
                        out.push_str(&format!(
                            "     {} {}\n",
                            "Context:".bright_black(),
                            is.context
                        ));
                    } else {
                        out.push_str(&format!("     Context: {}\n", is.context));
                    }
                }
            }
            out.push('\n');
        }
    }
    if verbose {
        let total: usize = results.iter().map(|r| r.issues.len()).sum();
        out.push_str(&format!("\nTotal issues found: {}\n", total));
    }
    out
}

/// Compose the JSON report (pure) for testing/snapshot purposes.
pub fn compose_report_json(results: &[ScanResult], summary: &Summary) -> JsonVal {
    json!({"results": results, "summary": summary})
}
