//! Configuration discovery and effective settings resolution.
//!
//! quotescan reads `quotescan.toml|yaml|yml` from the scan root, or the file
//! given with `--config`, and merges it with CLI flags to produce a `Config`.
//! Defaults:
//! - `include`: `**/*.{go,js,ts,jsx,tsx,py,java,cpp,c,h,md,txt}`
//! - `exclude`: `**/vendor/**,**/node_modules/**,**/.git/**`
//! - `max_line_length`: 120
//! - `exit_on_error`: true
//! - `verbose|fix`: false
//! - `output`: `human`
//!
//! Overrides precedence: CLI > config file > defaults. Boolean switches take
//! an optional value, so `--verbose=false` turns off `verbose = true` from a
//! file.

use crate::detectors::{DetectorKind, Registry};
use crate::discover::split_patterns;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

pub const DEFAULT_INCLUDE: &str = "**/*.{go,js,ts,jsx,tsx,py,java,cpp,c,h,md,txt}";
pub const DEFAULT_EXCLUDE: &str = "**/vendor/**,**/node_modules/**,**/.git/**";
pub const DEFAULT_MAX_LINE_LENGTH: usize = 120;
pub const CONFIG_FILE_NAMES: [&str; 3] = ["quotescan.toml", "quotescan.yaml", "quotescan.yml"];

#[derive(Debug, thiserror::Error)]
/// Failures while loading or validating configuration. All are fatal.
pub enum ConfigError {
    #[error("could not read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid TOML in {}: {source}", path.display())]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid YAML in {}: {source}", path.display())]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("{0} in [detectors].disabled")]
    UnknownDetector(String),
    #[error("unsupported output mode '{0}' (expected human or json)")]
    Output(String),
}

#[derive(Debug, Default, Deserialize, Clone)]
#[serde(deny_unknown_fields)]
/// Detector selection under `[detectors]`.
pub struct DetectorsCfg {
    #[serde(default)]
    pub disabled: Vec<String>,
}

#[derive(Debug, Default, Deserialize, Clone)]
#[serde(deny_unknown_fields)]
/// Root configuration loaded from `quotescan.toml|yaml`.
pub struct FileConfig {
    pub include: Option<Vec<String>>,
    pub exclude: Option<Vec<String>>,
    pub max_line_length: Option<usize>,
    pub verbose: Option<bool>,
    pub fix: Option<bool>,
    pub exit_on_error: Option<bool>,
    pub output: Option<String>,
    pub detectors: Option<DetectorsCfg>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
/// Report format. The CLI parses it through `ValueEnum`; config files through `FromStr`.
pub enum OutputMode {
    #[default]
    /// Colored report grouped by file
    Human,
    /// `{results, summary}` document
    Json,
}

impl FromStr for OutputMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "human" => Ok(OutputMode::Human),
            "json" => Ok(OutputMode::Json),
            other => Err(ConfigError::Output(other.to_string())),
        }
    }
}

/// Values taken from the command line. `None` means "not given".
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub root: Option<String>,
    pub config: Option<String>,
    pub include: Option<String>,
    pub exclude: Option<String>,
    pub max_line_length: Option<usize>,
    pub verbose: Option<bool>,
    pub fix: Option<bool>,
    pub exit_on_error: Option<bool>,
    pub output: Option<OutputMode>,
}

#[derive(Debug, Clone)]
/// Fully-resolved configuration shared read-only by every file scan.
pub struct Config {
    pub root: PathBuf,
    /// Config file the settings came from, if any.
    pub source: Option<PathBuf>,
    pub include: Vec<String>,
    pub exclude: Vec<String>,
    pub max_line_length: usize,
    pub verbose: bool,
    /// Accepted for compatibility; no fixes are applied.
    pub fix: bool,
    pub exit_on_error: bool,
    pub output: OutputMode,
    pub registry: Registry,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            root: PathBuf::from("."),
            source: None,
            include: split_patterns(DEFAULT_INCLUDE),
            exclude: split_patterns(DEFAULT_EXCLUDE),
            max_line_length: DEFAULT_MAX_LINE_LENGTH,
            verbose: false,
            fix: false,
            exit_on_error: true,
            output: OutputMode::Human,
            registry: Registry::builtin(),
        }
    }
}

/// Find `quotescan.toml|yaml|yml` directly under `root`.
pub fn discover_config(root: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| root.join(name))
        .find(|p| p.is_file())
}

/// Parse a config file; YAML for `.yaml|.yml`, TOML otherwise.
pub fn load_config_file(path: &Path) -> Result<FileConfig, ConfigError> {
    let s = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let is_yaml = matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    );
    if is_yaml {
        serde_yaml::from_str(&s).map_err(|source| ConfigError::Yaml {
            path: path.to_path_buf(),
            source,
        })
    } else {
        toml::from_str(&s).map_err(|source| ConfigError::Toml {
            path: path.to_path_buf(),
            source,
        })
    }
}

fn parse_disabled(names: &[String]) -> Result<Vec<DetectorKind>, ConfigError> {
    names
        .iter()
        .map(|n| n.parse::<DetectorKind>().map_err(ConfigError::UnknownDetector))
        .collect()
}

/// Resolve `Config` by merging CLI flags, the config file, and defaults.
///
/// An explicit `--config` path must load. A discovered file must parse too;
/// its absence is fine.
pub fn resolve_effective(cli: &CliOverrides) -> Result<Config, ConfigError> {
    let root = PathBuf::from(cli.root.as_deref().unwrap_or("."));
    let source = match cli.config.as_deref() {
        Some(p) => Some(PathBuf::from(p)),
        None => discover_config(&root),
    };
    let cfg = match source.as_deref() {
        Some(p) => load_config_file(p)?,
        None => FileConfig::default(),
    };

    let include = cli
        .include
        .as_deref()
        .map(split_patterns)
        .or(cfg.include)
        .unwrap_or_else(|| split_patterns(DEFAULT_INCLUDE));
    let exclude = cli
        .exclude
        .as_deref()
        .map(split_patterns)
        .or(cfg.exclude)
        .unwrap_or_else(|| split_patterns(DEFAULT_EXCLUDE));
    let max_line_length = cli
        .max_line_length
        .or(cfg.max_line_length)
        .unwrap_or(DEFAULT_MAX_LINE_LENGTH);
    let exit_on_error = cli.exit_on_error.or(cfg.exit_on_error).unwrap_or(true);
    let verbose = cli.verbose.or(cfg.verbose).unwrap_or(false);
    let fix = cli.fix.or(cfg.fix).unwrap_or(false);
    let output = match (cli.output, cfg.output.as_deref()) {
        (Some(mode), _) => mode,
        (None, Some(s)) => s.parse()?,
        (None, None) => OutputMode::Human,
    };

    let disabled = parse_disabled(
        cfg.detectors
            .as_ref()
            .map(|d| d.disabled.as_slice())
            .unwrap_or(&[]),
    )?;
    let registry = Registry::builtin().without(&disabled);

    Ok(Config {
        root,
        source,
        include,
        exclude,
        max_line_length,
        verbose,
        fix,
        exit_on_error,
        output,
        registry,
    })
}
