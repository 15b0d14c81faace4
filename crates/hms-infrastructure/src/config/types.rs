//! Configuration types

use crate::constants::DEFAULT_LOG_LEVEL;
use hms_domain::value_objects::SamplingConfig;
use hms_providers::constants::{DEFAULT_PROCFS_ROOT, DEFAULT_SYSFS_ROOT};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Root configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Cadences, history capacity and smoothing
    pub sampling: SamplingConfig,
    /// Which probe implementation reads the OS
    pub probe: ProbeConfig,
    /// Log output
    pub logging: LoggingConfig,
}

/// Probe implementation to bootstrap
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProbeProvider {
    /// Cross-platform, via the sysinfo crate
    #[default]
    Sysinfo,
    /// Linux `/proc` and `/sys` parsers
    Procfs,
    /// Reports an idle host; for dry runs
    Null,
}

impl fmt::Display for ProbeProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Sysinfo => "sysinfo",
            Self::Procfs => "procfs",
            Self::Null => "null",
        })
    }
}

/// Probe configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProbeConfig {
    pub provider: ProbeProvider,

    /// procfs mount point (procfs provider and interface resolution)
    pub procfs_root: PathBuf,

    /// sysfs mount point (link speed lookup)
    pub sysfs_root: PathBuf,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            provider: ProbeProvider::default(),
            procfs_root: PathBuf::from(DEFAULT_PROCFS_ROOT),
            sysfs_root: PathBuf::from(DEFAULT_SYSFS_ROOT),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Enable JSON output format
    pub json_format: bool,

    /// Log to a daily-rolling file in addition to stdout
    pub file_output: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            json_format: false,
            file_output: None,
        }
    }
}
