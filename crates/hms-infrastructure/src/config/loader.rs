//! Configuration loader
//!
//! Handles loading configuration from TOML files, environment variables, and
//! default values.

use super::AppConfig;
use crate::constants::{
    CONFIG_ENV_NESTING_SEPARATOR, CONFIG_ENV_PREFIX, DEFAULT_CONFIG_DIR, DEFAULT_CONFIG_FILENAME,
};
use crate::error_ext::ErrorContext;
use crate::logging::parse_log_level;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use hms_domain::error::{Error, Result};
use hms_domain::value_objects::SamplingConfig;
use std::env;
use std::path::{Path, PathBuf};

/// Configuration loader service
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,

    /// Environment prefix
    env_prefix: String,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
        }
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the environment variable prefix
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Load configuration from all sources
    ///
    /// Configuration sources are merged in this order (later sources override earlier):
    /// 1. Default values from `AppConfig::default()`
    /// 2. TOML configuration file (if exists)
    /// 3. Environment variables with prefix (e.g., `HMS_SAMPLING__EMA_ALPHA`)
    pub fn load(&self) -> Result<AppConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        if let Some((path, true)) = self.config_source() {
            figment = figment.merge(Toml::file(path));
        }

        // Double underscore separates nested keys, since field names use single ones
        figment = figment.merge(
            Env::prefixed(&format!("{}_", self.env_prefix)).split(CONFIG_ENV_NESTING_SEPARATOR),
        );

        let app_config: AppConfig = figment
            .extract()
            .config_context("Failed to extract configuration")?;

        validate_app_config(&app_config)?;

        Ok(app_config)
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, config: &AppConfig, path: P) -> Result<()> {
        let toml_string =
            toml::to_string_pretty(config).context("Failed to serialize config to TOML")?;

        std::fs::write(path.as_ref(), toml_string).io_context(format!(
            "Failed to write config file {}",
            path.as_ref().display()
        ))?;

        Ok(())
    }

    /// Get the current configuration file path
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// The file [`load`](Self::load) reads and whether it exists
    ///
    /// An explicit path is returned even when missing. Without one, the first
    /// existing default location is returned, or `None` if there is none.
    pub fn config_source(&self) -> Option<(PathBuf, bool)> {
        match &self.config_path {
            Some(path) => Some((path.clone(), path.exists())),
            None => Self::find_default_config_path().map(|path| (path, true)),
        }
    }

    /// First existing file among the default locations
    fn find_default_config_path() -> Option<PathBuf> {
        let current_dir = env::current_dir().ok()?;

        let candidates = [
            Some(current_dir.join(DEFAULT_CONFIG_FILENAME)),
            Some(
                current_dir
                    .join(DEFAULT_CONFIG_DIR)
                    .join(DEFAULT_CONFIG_FILENAME),
            ),
            dirs::config_dir().map(|d| d.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME)),
            dirs::home_dir().map(|d| {
                d.join(format!(".{DEFAULT_CONFIG_DIR}"))
                    .join(DEFAULT_CONFIG_FILENAME)
            }),
        ];

        candidates.into_iter().flatten().find(|path| path.exists())
    }
}

/// Validate application configuration
pub fn validate_app_config(config: &AppConfig) -> Result<()> {
    validate_sampling_config(&config.sampling)?;
    parse_log_level(&config.logging.level)?;
    Ok(())
}

/// Reject sampling settings the pipeline cannot run with
pub fn validate_sampling_config(sampling: &SamplingConfig) -> Result<()> {
    if sampling.history_capacity == 0 {
        return Err(Error::config("History capacity cannot be 0"));
    }

    let intervals = [
        ("collect_interval_ms", sampling.collect_interval_ms),
        ("network_interval_ms", sampling.network_interval_ms),
        ("disk_interval_ms", sampling.disk_interval_ms),
        ("instant_delay_ms", sampling.instant_delay_ms),
    ];
    if let Some((name, _)) = intervals.iter().find(|(_, value)| *value == 0) {
        return Err(Error::config(format!("{name} cannot be 0")));
    }

    // Written as a negation so NaN is rejected too
    if !(sampling.ema_alpha > 0.0 && sampling.ema_alpha <= 1.0) {
        return Err(Error::config(format!(
            "ema_alpha must be in (0, 1], got {}",
            sampling.ema_alpha
        )));
    }

    if sampling.startup_seed && sampling.seed_attempts == 0 {
        return Err(Error::config(
            "seed_attempts cannot be 0 when startup_seed is enabled",
        ));
    }

    Ok(())
}
