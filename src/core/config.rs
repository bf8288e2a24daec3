//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! The config file is optional and only ever read. It lives at
//! `~/.student-card/config.toml` unless `--config` names another path.

use log::{debug, info, warn};
use serde::Deserialize;
use simplelog::LevelFilter;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use chrono::Datelike;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct StudentCardConfig {
    #[serde(default)]
    pub general: GeneralConfig,
}

#[derive(Debug, Default, Deserialize)]
pub struct GeneralConfig {
    /// Year shown as "Creation year" on every summary.
    pub school_year: Option<i32>,
    pub log_file: Option<String>,
    pub log_level: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

pub const ENV_SCHOOL_YEAR: &str = "STUDENT_CARD_SCHOOL_YEAR";
pub const ENV_LOG_FILE: &str = "STUDENT_CARD_LOG_FILE";
pub const ENV_LOG_LEVEL: &str = "STUDENT_CARD_LOG_LEVEL";

/// The calendar year right now, in local time.
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub school_year: i32,
    /// No logger is installed when this is `None`.
    pub log_file: Option<PathBuf>,
    pub log_level: LevelFilter,
}

/// Values given on the command line. `None` means "not specified".
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub school_year: Option<i32>,
    pub log_file: Option<String>,
    pub log_level: Option<String>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.student-card/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".student-card").join("config.toml"))
}

/// Load the config file.
///
/// An explicit path must exist and parse. Without one, the default path is
/// used if present; otherwise `StudentCardConfig::default()` is returned.
pub fn load_config(explicit: Option<&Path>) -> Result<StudentCardConfig, ConfigError> {
    let path = match explicit {
        Some(p) => p.to_path_buf(),
        None => match config_path() {
            Some(p) if p.exists() => p,
            _ => return Ok(StudentCardConfig::default()),
        },
    };

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config = parse_config(&contents)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

pub fn parse_config(contents: &str) -> Result<StudentCardConfig, ConfigError> {
    toml::from_str(contents).map_err(ConfigError::Parse)
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &StudentCardConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

/// Same as `resolve()`, reading environment variables through `env`.
pub fn resolve_with_env(
    config: &StudentCardConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // School year: CLI → env → config → this year
    let school_year = cli
        .school_year
        .or_else(|| {
            env(ENV_SCHOOL_YEAR).and_then(|raw| match raw.trim().parse() {
                Ok(year) => Some(year),
                Err(_) => {
                    warn!("Ignoring {}={:?}: not a year", ENV_SCHOOL_YEAR, raw);
                    None
                }
            })
        })
        .or(config.general.school_year)
        .unwrap_or_else(current_year);

    // Log file: CLI → env → config → none
    let log_file = cli
        .log_file
        .clone()
        .or_else(|| env(ENV_LOG_FILE))
        .or_else(|| config.general.log_file.clone())
        .filter(|p| !p.trim().is_empty())
        .map(PathBuf::from);

    // Log level: CLI → env → config → info
    let log_level = cli
        .log_level
        .clone()
        .or_else(|| env(ENV_LOG_LEVEL))
        .or_else(|| config.general.log_level.clone())
        .and_then(|raw| match LevelFilter::from_str(raw.trim()) {
            Ok(level) => Some(level),
            Err(_) => {
                warn!("Unknown log level {:?}, using {}", raw, DEFAULT_LOG_LEVEL);
                None
            }
        })
        .unwrap_or(DEFAULT_LOG_LEVEL);

    ResolvedConfig {
        school_year,
        log_file,
        log_level,
    }
}
