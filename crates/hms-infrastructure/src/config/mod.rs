//! Application configuration
//!
//! Sources are layered with figment: built-in defaults, then a TOML file,
//! then `HMS_`-prefixed environment variables.

pub mod loader;
pub mod types;

pub use loader::{ConfigLoader, validate_app_config, validate_sampling_config};
pub use types::{AppConfig, LoggingConfig, ProbeConfig, ProbeProvider};
