//! Configuration management for Tally.
//!
//! Parses `tally.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `counter.endpoint`

mod expand;

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override counter endpoint URL.
    pub endpoint: Option<String>,
    /// Override HTTP timeout in seconds.
    pub timeout_secs: Option<u64>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "tally.toml";

/// Default HTTP timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Counter endpoint configuration.
    pub counter: CounterConfig,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Counter endpoint configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct CounterConfig {
    /// View-counter endpoint URL.
    pub endpoint: Option<String>,
    /// HTTP timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl CounterConfig {
    /// HTTP timeout as a [`Duration`].
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`counter.endpoint`").
        field: String,
        /// Error message (e.g., "${`VIEWS_ENDPOINT`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL field to use http:// or https:// scheme.
fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `tally.toml` in current directory and parents,
    /// falling back to defaults when no file exists.
    ///
    /// CLI settings are applied after loading, allowing CLI arguments to take
    /// precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist or parsing fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(endpoint) = &settings.endpoint {
            self.counter.endpoint = Some(endpoint.clone());
        }
        if let Some(timeout_secs) = settings.timeout_secs {
            self.counter.timeout_secs = timeout_secs;
        }
    }

    /// Get the validated counter endpoint.
    ///
    /// Returns the endpoint if `counter.endpoint` is set and valid. Use this
    /// instead of accessing the field directly when an endpoint is required.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if the endpoint is missing or invalid.
    pub fn require_endpoint(&self) -> Result<&str, ConfigError> {
        let endpoint = self.counter.endpoint.as_deref().ok_or_else(|| {
            ConfigError::Validation(
                "endpoint required (via --endpoint or [counter] config)".to_owned(),
            )
        })?;
        require_non_empty(endpoint, "counter.endpoint")?;
        require_http_url(endpoint, "counter.endpoint")?;
        Ok(endpoint)
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        // Expand environment variables before validation
        config.expand_env_vars()?;

        config.config_path = Some(path.to_path_buf());

        // Validate configuration after loading
        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically after loading from file. An absent endpoint is
    /// valid here; commands that need one call [`Config::require_endpoint`].
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(endpoint) = &self.counter.endpoint {
            require_non_empty(endpoint, "counter.endpoint")?;
            require_http_url(endpoint, "counter.endpoint")?;
        }

        if self.counter.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "counter.timeout_secs must be greater than 0".to_owned(),
            ));
        }

        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        if let Some(endpoint) = &self.counter.endpoint {
            self.counter.endpoint = Some(expand::expand_env(endpoint, "counter.endpoint")?);
        }

        Ok(())
    }
}
