pub mod breakdown;
pub mod snapshot;
