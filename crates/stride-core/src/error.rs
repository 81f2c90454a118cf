use thiserror::Error;

use crate::models::snapshot::PainRegion;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("no disability index registered for region {0:?}")]
    UnknownDisabilityIndex(PainRegion),
}
