//! Configuration file loading with precedence handling.

use crate::state::{SortField, SortOrder};
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;
use tracing::warn;

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
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
/// Corresponds to `~/.config/pplv/config.toml`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Path to a JSON dataset replacing the embedded one.
    #[serde(default)]
    pub dataset: Option<PathBuf>,

    /// Initial sort field ("name", "sex", "born"). Unrecognized values
    /// degrade to no sorting.
    #[serde(default)]
    pub sort_field: Option<String>,

    /// Initial sort order ("asc", "desc"). Unrecognized values degrade
    /// to ascending.
    #[serde(default)]
    pub sort_order: Option<String>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,

    /// Custom key bindings (future use).
    #[serde(default)]
    pub keybindings: Option<toml::Value>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Dataset path; `None` means the embedded default dataset.
    pub dataset: Option<PathBuf>,
    /// Initial sort field.
    pub sort_field: SortField,
    /// Initial sort order.
    pub sort_order: SortOrder,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            dataset: None,
            sort_field: SortField::None,
            sort_order: SortOrder::Asc,
            log_file_path: default_log_path(),
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/pplv/pplv.log` on Unix-like systems, or the
/// platform equivalent elsewhere. Falls back to the current directory if
/// the state directory cannot be determined.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("pplv").join("pplv.log")
    } else {
        PathBuf::from("pplv.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if the file exists but has read or parse errors.
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
/// Returns `~/.config/pplv/config.toml` on Unix, the platform equivalent
/// elsewhere, or `None` if the home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("pplv").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (like CLI `--config`)
/// 2. `PPLV_CONFIG` environment variable
/// 3. Default path `~/.config/pplv/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    // 1. Explicit path (like CLI --config)
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    // 2. PPLV_CONFIG environment variable
    if let Ok(env_path) = std::env::var("PPLV_CONFIG") {
        return load_config_file(PathBuf::from(env_path));
    }

    // 3. Default path
    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    // No config path available
    Ok(None)
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use
/// the default. Sort field/order strings parse lossily: unrecognized values
/// degrade to the defaults with a warning rather than failing.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    let sort_field = match config.sort_field {
        Some(raw) => {
            let parsed = SortField::parse_lossy(&raw);
            if parsed == SortField::None && raw != "none" && !raw.is_empty() {
                warn!(value = %raw, "Unrecognized sort_field in config; using no sorting");
            }
            parsed
        }
        None => defaults.sort_field,
    };

    let sort_order = match config.sort_order {
        Some(raw) => SortOrder::parse_lossy(&raw),
        None => defaults.sort_order,
    };

    ResolvedConfig {
        dataset: config.dataset.or(defaults.dataset),
        sort_field,
        sort_order,
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `PPLV_DATASET`: Override dataset path
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(dataset) = std::env::var("PPLV_DATASET") {
        config.dataset = Some(PathBuf::from(dataset));
    }

    config
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    dataset_override: Option<PathBuf>,
    sort_field_override: Option<SortField>,
) -> ResolvedConfig {
    if let Some(dataset) = dataset_override {
        config.dataset = Some(dataset);
    }

    if let Some(sort_field) = sort_field_override {
        config.sort_field = sort_field;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
