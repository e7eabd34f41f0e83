//! Configuration file loading with precedence handling.

use crate::query::SuggestConfig;
use crate::workflow::RetryPolicy;
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Config file path contains invalid UTF-8 or cannot be resolved.
    #[error("Invalid config path: {0}")]
    InvalidPath(String),

    /// Failed to read config file (file may not exist or have permission issues).
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
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/marketdesk/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Records shown per page in list views.
    #[serde(default)]
    pub page_size: Option<usize>,

    /// Maximum autocomplete suggestions per keystroke.
    #[serde(default)]
    pub suggestion_limit: Option<usize>,

    /// Minimum typed characters before suggestions appear.
    #[serde(default)]
    pub suggestion_min_chars: Option<usize>,

    /// Maximum status-update attempts against the directory service.
    #[serde(default)]
    pub retry_max_attempts: Option<u32>,

    /// Delay between retry attempts, in milliseconds.
    #[serde(default)]
    pub retry_backoff_ms: Option<u64>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, and env vars.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Records per page.
    pub page_size: usize,
    /// Suggestion cap per keystroke.
    pub suggestion_limit: usize,
    /// Minimum characters before suggesting.
    pub suggestion_min_chars: usize,
    /// Status-update retry budget.
    pub retry_max_attempts: u32,
    /// Delay between retries, in milliseconds.
    pub retry_backoff_ms: u64,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            page_size: 10,
            suggestion_limit: 6,
            suggestion_min_chars: 2,
            retry_max_attempts: 3,
            retry_backoff_ms: 200,
            log_file_path: default_log_path(),
        }
    }
}

impl ResolvedConfig {
    /// Suggestion settings in the form the query layer consumes.
    pub fn suggest_config(&self) -> SuggestConfig {
        SuggestConfig {
            min_chars: self.suggestion_min_chars,
            limit: self.suggestion_limit,
        }
    }

    /// Retry settings in the form the workflow layer consumes.
    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy {
            max_attempts: self.retry_max_attempts,
            backoff: Duration::from_millis(self.retry_backoff_ms),
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/marketdesk/marketdesk.log` on Unix-like systems,
/// or the platform-appropriate state path elsewhere.
///
/// If the state directory cannot be determined, falls back to the current
/// directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("marketdesk").join("marketdesk.log")
    } else {
        PathBuf::from("marketdesk.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
/// Returns `Err` if file exists but cannot be read or parsed.
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
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

/// Resolve default config file path.
///
/// Returns `~/.config/marketdesk/config.toml` on Unix, appropriate path on
/// other platforms. Returns `None` if home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("marketdesk").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument
/// 2. `MARKETDESK_CONFIG` environment variable
/// 3. Default path `~/.config/marketdesk/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
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

    if let Ok(env_path) = std::env::var("MARKETDESK_CONFIG") {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use
/// the default.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        page_size: config.page_size.unwrap_or(defaults.page_size),
        suggestion_limit: config.suggestion_limit.unwrap_or(defaults.suggestion_limit),
        suggestion_min_chars: config
            .suggestion_min_chars
            .unwrap_or(defaults.suggestion_min_chars),
        retry_max_attempts: config
            .retry_max_attempts
            .unwrap_or(defaults.retry_max_attempts),
        retry_backoff_ms: config.retry_backoff_ms.unwrap_or(defaults.retry_backoff_ms),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `MARKETDESK_PAGE_SIZE`: Override records per page
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(raw) = std::env::var("MARKETDESK_PAGE_SIZE") {
        if let Ok(page_size) = raw.parse::<usize>() {
            config.page_size = page_size;
        }
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
