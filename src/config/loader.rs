//! Configuration file loading with precedence handling.
//!
//! Precedence chain: Defaults → Config File → Env Vars → CLI Args.

use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (permissions, I/O).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are
/// used. Corresponds to `~/.config/bookfind/config.toml`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Catalog search endpoint URL.
    #[serde(default)]
    pub search_url: Option<String>,

    /// Cover-image endpoint prefix.
    #[serde(default)]
    pub covers_url: Option<String>,

    /// Number of card columns in the results grid.
    #[serde(default)]
    pub columns: Option<u16>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Catalog search endpoint URL.
    pub search_url: String,
    /// Cover-image endpoint prefix.
    pub covers_url: String,
    /// Number of card columns in the results grid (at least 1).
    pub columns: u16,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            search_url: "https://openlibrary.org/search.json".to_string(),
            covers_url: "https://covers.openlibrary.org/b/id".to_string(),
            columns: 2,
            log_file_path: default_log_path(),
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/bookfind/bookfind.log` on Unix-like
/// systems, or the platform's state directory elsewhere. Falls back to
/// the current directory if no state directory can be determined.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("bookfind").join("bookfind.log")
    } else {
        PathBuf::from("bookfind.log")
    }
}

/// Resolve default config file path.
///
/// Returns `~/.config/bookfind/config.toml` on Unix, the platform's
/// config directory elsewhere. `None` if no config directory exists.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("bookfind").join("config.toml"))
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if the file doesn't exist (not an error - use
/// defaults).
///
/// # Errors
///
/// Returns an error only if the file exists but cannot be read or
/// parsed.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    // Missing file is not an error - use defaults
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Load configuration with precedence handling.
///
/// Path precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `BOOKFIND_CONFIG` environment variable
/// 3. Default path `~/.config/bookfind/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns an error only if a config file exists but cannot be read or
/// parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var("BOOKFIND_CONFIG") {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create a resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise
/// use the default. A configured column count of 0 is clamped to 1.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        search_url: config.search_url.unwrap_or(defaults.search_url),
        covers_url: config.covers_url.unwrap_or(defaults.covers_url),
        columns: config.columns.unwrap_or(defaults.columns).max(1),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `BOOKFIND_SEARCH_URL`: override the search endpoint
/// - `BOOKFIND_COVERS_URL`: override the covers endpoint
/// - `BOOKFIND_COLUMNS`: override the grid column count (ignored when
///   not a positive integer)
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(url) = std::env::var("BOOKFIND_SEARCH_URL") {
        config.search_url = url;
    }
    if let Ok(url) = std::env::var("BOOKFIND_COVERS_URL") {
        config.covers_url = url;
    }
    if let Ok(columns) = std::env::var("BOOKFIND_COLUMNS") {
        if let Ok(n) = columns.parse::<u16>() {
            if n > 0 {
                config.columns = n;
            }
        }
    }
    config
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other
/// sources. Only applies overrides for flags explicitly set by the
/// user.
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    endpoint_override: Option<String>,
    columns_override: Option<u16>,
) -> ResolvedConfig {
    if let Some(url) = endpoint_override {
        config.search_url = url;
    }
    if let Some(columns) = columns_override {
        config.columns = columns.max(1);
    }
    config
}
