//! quotescan CLI binary entry point.
//! Resolves configuration, discovers files, scans them and prints results.

use clap::Parser;
use log::{info, warn};
use quotescan::cli::Cli;
use quotescan::config::{self, OutputMode};
use quotescan::models::ScanResult;
use quotescan::utils::{error_prefix, init_logging, note_prefix};
use quotescan::{discover, exit_code, output, scan};

fn main() {
    let cli = Cli::parse();
    let cfg = match config::resolve_effective(&cli.overrides()) {
        Ok(c) => c,
        Err(e) => {
            init_logging(cli.verbose.unwrap_or(false));
            eprintln!("{} Error loading config: {}", error_prefix(), e);
            std::process::exit(1);
        }
    };
    init_logging(cfg.verbose);
    if let Some(src) = cfg.source.as_ref() {
        info!("loaded configuration from {}", src.display());
    }
    if cfg.fix {
        warn!("fix mode requested; automatic fixes are not implemented, files are left unchanged");
    }

    let files = match discover::files_to_scan(&cfg.root, &cfg.include, &cfg.exclude) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("{} Error getting files to scan: {}", error_prefix(), e);
            std::process::exit(1);
        }
    };
    info!("discovered {} files under {}", files.len(), cfg.root.display());
    if cfg.verbose && cfg.output == OutputMode::Human {
        println!("Found {} files to scan", files.len());
    }
    if files.is_empty() && cfg.output == OutputMode::Human {
        eprintln!(
            "{} no files matched include patterns [{}]",
            note_prefix(),
            cfg.include.join(", ")
        );
    }

    let results: Vec<ScanResult> = scan::scan_files(&files, &cfg)
        .into_iter()
        .filter(|r| !r.issues.is_empty())
        .collect();
    output::print_report(&results, &cfg, files.len());

    let code = exit_code(&results, cfg.exit_on_error);
    if code != 0 {
        std::process::exit(code);
    }
}
