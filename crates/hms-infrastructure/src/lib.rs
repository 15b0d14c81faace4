//! # Infrastructure Layer
//!
//! Cross-cutting concerns for the host metrics sampler: configuration,
//! logging, provider selection and the lifecycle of the background tasks.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | `AppConfig` and the figment-based loader |
//! | [`logging`] | tracing subscriber setup |
//! | [`bootstrap`] | Builds probe implementations from `ProbeConfig` |
//! | [`runtime`] | `MetricsRuntime`: starts and stops the sampling pipeline |
//! | [`error_ext`] | Context helpers for foreign errors |

pub mod bootstrap;
pub mod config;
pub mod constants;
pub mod error_ext;
pub mod logging;
pub mod runtime;

pub use bootstrap::Providers;
pub use config::{AppConfig, ConfigLoader, LoggingConfig, ProbeConfig, ProbeProvider};
pub use runtime::MetricsRuntime;
