use stride_core::config::ScoringConfig;
use stride_core::models::breakdown::{ContinuousScore, RiskBand, RiskIndex};
use stride_core::models::snapshot::AssessmentSnapshot;

use crate::domains::domain_scores;
use crate::error::ScoreError;

/// Equally-weighted composite of the four domain scores, rounded to one
/// decimal. Independent of the 0–11 clinical score.
pub fn compute_continuous(
    snapshot: &AssessmentSnapshot,
    config: &ScoringConfig,
) -> Result<ContinuousScore, ScoreError> {
    let violations = snapshot.validate(&config.disability_indices);
    if !violations.is_empty() {
        return Err(ScoreError::OutOfRange(violations));
    }

    let domains = domain_scores(snapshot);
    let composite = round_one(
        (domains.pain + domains.function + domains.psych_load + domains.fear_avoidance) / 4.0,
    );

    Ok(ContinuousScore { composite, domains })
}

/// Weighted psychological risk index. Each input is clamped to 0–100 before
/// weighting, so a caller passing raw domain output can never push the
/// index out of band.
pub fn compute_risk_index(
    psych_load: f64,
    catastrophizing: f64,
    fear_avoidance: f64,
    config: &ScoringConfig,
) -> RiskIndex {
    let w = &config.risk;
    let psych_load = psych_load.clamp(0.0, 100.0);
    let catastrophizing = catastrophizing.clamp(0.0, 100.0);
    let fear_avoidance = fear_avoidance.clamp(0.0, 100.0);

    let risk_index = round_one(
        w.psych_load * psych_load
            + w.catastrophizing * catastrophizing
            + w.fear_avoidance * fear_avoidance,
    );

    let band = if risk_index < w.medium_cutoff {
        RiskBand::Low
    } else if risk_index < w.high_cutoff {
        RiskBand::Medium
    } else {
        RiskBand::High
    };

    RiskIndex { risk_index, band }
}

fn round_one(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
