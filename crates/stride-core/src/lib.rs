//! stride-core
//!
//! Pure domain types for the Stride recovery scoring engine: assessment
//! snapshots, score breakdowns, the immutable scoring configuration, and the
//! fixed disability-index registry. No I/O and no calculator logic — this is
//! the shared vocabulary of the Stride system.

pub mod config;
pub mod error;
pub mod models;
pub mod validation;
