//! dass-cli library root.
//!
//! Exposes the survey runner, output formatting and configuration so that
//! integration tests can drive them without spawning the binary.

pub mod config;
pub mod output;
pub mod runner;
