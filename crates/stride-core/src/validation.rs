use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

/// Inclusive bounds for a numeric snapshot field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FieldRange {
    pub min: i64,
    pub max: i64,
}

impl FieldRange {
    pub const fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: i64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// A present field whose value falls outside its declared range. Any single
/// violation makes the whole snapshot unscoreable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct ValidationError {
    pub field: String,
    pub value: i64,
    pub expected_range: FieldRange,
    pub message: String,
}

impl ValidationError {
    pub fn out_of_range(field: impl Into<String>, value: i64, expected_range: FieldRange) -> Self {
        let field = field.into();
        let message = format!(
            "{field}: value {value} is outside range [{}, {}]",
            expected_range.min, expected_range.max,
        );
        Self {
            field,
            value,
            expected_range,
            message,
        }
    }
}
