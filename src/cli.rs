//! CLI argument parsing via `clap`.

use crate::config::CliOverrides;
use crate::config::OutputMode;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "quotescan",
    version,
    about = "Scan source files for quotation-mark issues",
    long_about = "quotescan flags smart (curly) quotes, mixed or unmatched quotes, backticks inside string literals, unbalanced quotes and overlong lines.\n\nConfiguration precedence: CLI > quotescan.toml > defaults.",
    after_help = "Exit codes:\n  0  no issues\n  1  error-severity issues (with --exit-on-error) or a fatal startup failure\n  2  issues found otherwise\n\nExamples:\n  quotescan\n  quotescan --include 'src/**/*.{rs,md}' --max-line-length 100\n  quotescan --exit-on-error=false --output json"
)]
/// Command-line flags. Unset options fall back to the config file, then defaults.
pub struct Cli {
    #[arg(long, help = "Path to configuration file (default: quotescan.toml|yaml in --root)")]
    pub config: Option<String>,
    #[arg(long, help = "Directory patterns are resolved against (default: .)")]
    pub root: Option<String>,
    #[arg(
        long,
        help = "Comma-separated globs to include (default: **/*.{go,js,ts,jsx,tsx,py,java,cpp,c,h,md,txt})"
    )]
    pub include: Option<String>,
    #[arg(
        long,
        help = "Comma-separated globs to exclude (default: **/vendor/**,**/node_modules/**,**/.git/**)"
    )]
    pub exclude: Option<String>,
    #[arg(
        long,
        num_args = 0..=1,
        default_missing_value = "true",
        help = "Enable verbose output (default: false)"
    )]
    pub verbose: Option<bool>,
    #[arg(
        long,
        num_args = 0..=1,
        default_missing_value = "true",
        help = "Accepted for compatibility; no fixes are applied"
    )]
    pub fix: Option<bool>,
    #[arg(
        long,
        num_args = 0..=1,
        default_missing_value = "true",
        help = "Exit 1 when error-severity issues are found (default: true)"
    )]
    pub exit_on_error: Option<bool>,
    #[arg(long, help = "Maximum line length before warning (default: 120)")]
    pub max_line_length: Option<usize>,
    #[arg(long, value_enum, help = "Output mode (default: human)")]
    pub output: Option<OutputMode>,
}

impl Cli {
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            root: self.root.clone(),
            config: self.config.clone(),
            include: self.include.clone(),
            exclude: self.exclude.clone(),
            max_line_length: self.max_line_length,
            verbose: self.verbose,
            fix: self.fix,
            exit_on_error: self.exit_on_error,
            output: self.output,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_on_error_forms() {
        let cli = Cli::parse_from(["quotescan"]);
        assert_eq!(cli.exit_on_error, None);
        let cli = Cli::parse_from(["quotescan", "--exit-on-error"]);
        assert_eq!(cli.exit_on_error, Some(true));
        let cli = Cli::parse_from(["quotescan", "--exit-on-error=false"]);
        assert_eq!(cli.exit_on_error, Some(false));
        let cli = Cli::parse_from(["quotescan", "--exit-on-error", "false", "--verbose"]);
        assert_eq!(cli.exit_on_error, Some(false));
        assert_eq!(cli.verbose, Some(true));
    }

    #[test]
    fn test_switches_accept_explicit_false() {
        let cli = Cli::parse_from(["quotescan"]);
        assert_eq!((cli.verbose, cli.fix), (None, None));
        let cli = Cli::parse_from(["quotescan", "--verbose=false", "--fix", "false"]);
        assert_eq!((cli.verbose, cli.fix), (Some(false), Some(false)));
        let cli = Cli::parse_from(["quotescan", "--fix", "--verbose"]);
        assert_eq!((cli.verbose, cli.fix), (Some(true), Some(true)));
    }

    #[test]
    fn test_output_mode_checked_at_parse_time() {
        let cli = Cli::parse_from(["quotescan", "--output", "json"]);
        assert_eq!(cli.output, Some(OutputMode::Json));
        let err = Cli::try_parse_from(["quotescan", "--output", "xml"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::InvalidValue);
    }

    #[test]
    fn test_overrides_carry_flags() {
        let cli = Cli::parse_from([
            "quotescan",
            "--include",
            "*.{go,md},docs/*.txt",
            "--max-line-length",
            "90",
            "--fix",
        ]);
        let ov = cli.overrides();
        assert_eq!(ov.include.as_deref(), Some("*.{go,md},docs/*.txt"));
        assert_eq!(ov.max_line_length, Some(90));
        assert_eq!(ov.fix, Some(true));
        assert_eq!(ov.verbose, None);
    }
}
