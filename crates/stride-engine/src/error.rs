use stride_core::error::CoreError;
use stride_core::models::snapshot::FormKind;
use stride_core::validation::ValidationError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScoreError {
    /// One or more present fields were outside their declared range. The
    /// whole snapshot is rejected; no partial breakdown is produced.
    #[error("snapshot failed validation: {} field(s) out of range", .0.len())]
    OutOfRange(Vec<ValidationError>),

    #[error("follow-up scoring requires a baseline snapshot")]
    MissingBaseline,

    #[error("expected a {expected:?} snapshot, got {found:?}")]
    WrongFormKind { expected: FormKind, found: FormKind },

    #[error("score {score} exceeds ceiling {ceiling}")]
    ScoreAboveCeiling { score: u8, ceiling: u8 },

    #[error("phase classification requires a non-zero ceiling")]
    ZeroCeiling,

    #[error(transparent)]
    Core(#[from] CoreError),
}
