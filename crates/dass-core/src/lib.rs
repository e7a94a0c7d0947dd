//! dass-core
//!
//! Pure domain types for the DASS-21 self-report questionnaire: answers,
//! response sets, survey sessions and scored results. No I/O; this is the
//! shared vocabulary of the other dass crates.

pub mod error;
pub mod models;
