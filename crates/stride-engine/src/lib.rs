//! stride-engine
//!
//! The Stride recovery scoring engine: deterministic transformations from
//! raw clinical-assessment snapshots into the Signature Recovery Score
//! (0–11 clinical or 0–100 continuous), a recovery phase, and a risk band.
//!
//! Every entry point is a pure, synchronous function over immutable inputs;
//! there is no shared state and no I/O, so scoring is safe to run
//! concurrently for any number of patients. Causal ordering of baseline and
//! follow-up snapshots is the caller's responsibility.

pub mod baseline;
pub mod continuous;
pub mod domains;
pub mod error;
pub mod followup;
pub mod phase;

pub use baseline::compute_baseline;
pub use continuous::{compute_continuous, compute_risk_index};
pub use domains::domain_scores;
pub use error::ScoreError;
pub use followup::compute_follow_up;
pub use phase::classify_phase;

/// Ceiling when only patient-reported factors are available.
pub const PATIENT_MAX_POINTS: u8 = 9;
/// Ceiling when clinician-verified factors are included.
pub const FULL_MAX_POINTS: u8 = 11;
