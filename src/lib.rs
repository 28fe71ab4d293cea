//! GasWatch firmware library.
//!
//! Exposes the pure-logic modules for integration testing and external
//! inspection. All ESP-IDF-specific code is guarded by
//! `#[cfg(target_os = "espidf")]` within each module.

#![deny(unused_must_use)]

pub mod alert;
pub mod app;
pub mod config;
pub mod console;
pub mod pins;
pub mod report;
pub mod sensors;

// Hardware-facing modules; the actual peripheral access inside them is
// guarded by cfg attributes, so the crate still compiles on the host.
pub mod adapters;
pub mod drivers;
