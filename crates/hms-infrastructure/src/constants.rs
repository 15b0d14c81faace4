//! Infrastructure constants

use std::time::Duration;

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Environment variable prefix (`HMS_SAMPLING__EMA_ALPHA`)
pub const CONFIG_ENV_PREFIX: &str = "HMS";

/// Separator between nested keys in environment variable names
pub const CONFIG_ENV_NESTING_SEPARATOR: &str = "__";

/// Configuration file searched for when `--config` is not given
pub const DEFAULT_CONFIG_FILENAME: &str = "hms.toml";

/// Directory name used under the working, user config and home directories
pub const DEFAULT_CONFIG_DIR: &str = "hms";

// ============================================================================
// LOGGING
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the log filter
pub const LOG_FILTER_ENV: &str = "HMS_LOG";

/// File name prefix of rolled log files
pub const DEFAULT_LOG_FILE_STEM: &str = "hms";

// ============================================================================
// LIFECYCLE
// ============================================================================

/// How long `MetricsRuntime::shutdown` waits for tasks to finish
pub const SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(10);
