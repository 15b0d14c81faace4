//! # Domain Layer
//!
//! Core types for the host metrics sampler. Nothing in this crate performs I/O;
//! it defines what a sample is, which counters the OS hands us, and the ports
//! the application layer uses to reach the outside world.
//!
//! ## Module Categories
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`value_objects`] | Samples, cumulative counters, rates, snapshot and percentile results |
//! | [`ports`] | Probe, interface resolver and clock traits |
//! | [`error`] | Domain error type and `Result` alias |
//! | [`constants`] | Sampling defaults shared by every layer |

pub mod constants;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use error::{Error, Result};
pub use value_objects::*;
