//! Configuration file loading with precedence handling.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable pointing at an alternative config file.
pub const CONFIG_ENV: &str = "DEVLOG_CAPTURE_CONFIG";

/// Environment variable overriding the log directory.
pub const LOG_DIR_ENV: &str = "DEVLOG_CAPTURE_LOG_DIR";

/// Environment variable naming the home directory the log dir lives under.
pub const HOME_ENV: &str = "HOME";

/// Default tracing filter for diagnostics.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (permission issues, not a file, ...).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax or unknown keys.
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
/// All fields are optional. Corresponds to
/// `~/.config/devlog-capture/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Log directory holding the marker and the JSONL files.
    #[serde(default)]
    pub log_dir: Option<PathBuf>,

    /// Send diagnostics to this file instead of stderr.
    #[serde(default)]
    pub diagnostics_file: Option<PathBuf>,

    /// Diagnostics filter used when `RUST_LOG` is unset.
    #[serde(default)]
    pub log_level: Option<String>,
}

/// Resolved configuration after applying precedence rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Log directory; `None` when no home directory could be found and
    /// nothing overrides it.
    pub log_dir: Option<PathBuf>,
    /// Diagnostics file; `None` means stderr.
    pub diagnostics_file: Option<PathBuf>,
    /// Diagnostics filter directive.
    pub log_level: String,
}

impl ResolvedConfig {
    /// Defaults for a given home directory.
    pub fn for_home(home: Option<&Path>) -> Self {
        Self {
            log_dir: home.map(log_dir_under),
            diagnostics_file: None,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self::for_home(home_from_env().as_deref())
    }
}

/// Home directory from `HOME`; unset or empty means there is none.
///
/// No passwd fallback: a handler run without `HOME` captures nothing.
pub fn home_from_env() -> Option<PathBuf> {
    std::env::var_os(HOME_ENV)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

/// Log directory for a home directory: `<home>/.claude/denoland-dev-logs`.
pub fn log_dir_under(home: &Path) -> PathBuf {
    home.join(".claude").join("denoland-dev-logs")
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

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

/// Resolve default config file path.
///
/// Returns `~/.config/devlog-capture/config.toml` on Linux, the platform
/// equivalent elsewhere, or `None` if no config directory is known.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("devlog-capture").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `DEVLOG_CAPTURE_CONFIG` environment variable
/// 3. Default path `~/.config/devlog-capture/config.toml`
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Some(env_path) = std::env::var_os(CONFIG_ENV) {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults.
pub fn merge_config(defaults: ResolvedConfig, config_file: Option<ConfigFile>) -> ResolvedConfig {
    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        log_dir: config.log_dir.or(defaults.log_dir),
        diagnostics_file: config.diagnostics_file.or(defaults.diagnostics_file),
        log_level: config.log_level.unwrap_or(defaults.log_level),
    }
}

/// Apply environment variable overrides.
///
/// Checks for:
/// - `DEVLOG_CAPTURE_LOG_DIR`: override log directory (ignored when empty)
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Some(dir) = std::env::var_os(LOG_DIR_ENV).filter(|v| !v.is_empty()) {
        config.log_dir = Some(PathBuf::from(dir));
    }

    config
}

/// Apply CLI argument overrides (highest precedence).
pub fn apply_cli_overrides(mut config: ResolvedConfig, log_dir: Option<PathBuf>) -> ResolvedConfig {
    if let Some(dir) = log_dir {
        config.log_dir = Some(dir);
    }

    config
}

/// Run the whole precedence chain without ever failing.
///
/// Defaults → Config File → Env Vars → CLI Args. A broken config file is
/// skipped; its error is handed back so the caller can report it once
/// diagnostics are up.
pub fn resolve_config(
    config_path: Option<PathBuf>,
    log_dir: Option<PathBuf>,
) -> (ResolvedConfig, Option<ConfigError>) {
    let (config_file, error) = match load_config_with_precedence(config_path) {
        Ok(file) => (file, None),
        Err(e) => (None, Some(e)),
    };

    let merged = merge_config(ResolvedConfig::default(), config_file);
    let with_env = apply_env_overrides(merged);
    (apply_cli_overrides(with_env, log_dir), error)
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
