//! Supporting helpers: colored message prefixes and logger setup.

use crate::config::OutputMode;
use log::LevelFilter;
use owo_colors::OwoColorize;
use std::io::Write;

/// Colors are off for JSON output and whenever `NO_COLOR` is set.
pub fn use_colors(output: OutputMode) -> bool {
    output != OutputMode::Json && std::env::var_os("NO_COLOR").is_none()
}

fn prefix(label: &str, paint: fn(&str) -> String) -> String {
    if std::env::var_os("NO_COLOR").is_some() {
        format!("{}:", label)
    } else {
        paint(&format!("{}:", label))
    }
}

pub fn error_prefix() -> String {
    prefix("error", |s| s.red().bold().to_string())
}

pub fn note_prefix() -> String {
    prefix("note", |s| s.cyan().bold().to_string())
}

/// Install the `env_logger` backend on stderr.
///
/// Default level is `warn`, or `info` when verbose; `RUST_LOG` wins over both.
pub fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Info
    } else {
        LevelFilter::Warn
    };
    let mut builder = env_logger::Builder::new();
    builder.filter_level(level);
    builder.parse_default_env();
    builder.format(|buf, record| {
        writeln!(
            buf,
            "{} - {} - {}",
            record.level(),
            record.target(),
            record.args()
        )
    });
    // A second init (tests, embedding) keeps the first logger.
    let _ = builder.try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_output_never_colored() {
        assert!(!use_colors(OutputMode::Json));
    }

    #[test]
    fn test_prefixes_carry_label() {
        assert!(error_prefix().contains("error:"));
        assert!(note_prefix().contains("note:"));
    }

    #[test]
    fn test_init_logging_twice_is_harmless() {
        init_logging(false);
        init_logging(true);
        log::warn!("logger installed");
    }
}
