//! Linux procfs/sysfs probes
//!
//! Reads kernel counters straight from `/proc` and `/sys`. Every file goes
//! through a typed parser in [`parsers`] that returns a validated value or
//! `Error::Parse`; nothing untyped leaves this module.
//!
//! Both roots are configurable so tests can point the probe at a fake tree.

pub mod parsers;
mod probe;
mod resolver;

pub use probe::ProcfsProbe;
pub use resolver::ProcfsInterfaceResolver;
