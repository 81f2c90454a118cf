use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Coarse clinical stage derived from an SRS score. Strictly ordered — a
/// higher score never maps to an earlier phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Phase {
    Reset,
    Educate,
    Rebuild,
}

/// Risk stratification band on the continuous path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RiskBand {
    Low,
    Medium,
    High,
}

/// One factor's contribution to a clinical score. The breakdown keeps these
/// in evaluation order; the UI breakdown modal renders them verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FactorResult {
    pub factor: String,
    pub points: u8,
    pub rationale: String,
}

/// Output of a baseline or follow-up SRS calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreBreakdown {
    pub points: u8,
    /// Declared ceiling of the mode used: 9 patient-only, 11 with clinician
    /// factors.
    pub max_points: u8,
    pub factors: Vec<FactorResult>,
    pub phase: Phase,
}

/// The four 0–100 domain scores feeding the continuous path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DomainScores {
    pub pain: f64,
    pub function: f64,
    pub psych_load: f64,
    pub fear_avoidance: f64,
}

/// Longitudinal 0–100 composite, independent of the 0–11 clinical score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ContinuousScore {
    pub composite: f64,
    pub domains: DomainScores,
}

/// Weighted psychological risk index and its band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RiskIndex {
    pub risk_index: f64,
    pub band: RiskBand,
}
