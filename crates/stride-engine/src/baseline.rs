use stride_core::config::ScoringConfig;
use stride_core::models::breakdown::{FactorResult, ScoreBreakdown};
use stride_core::models::snapshot::AssessmentSnapshot;
use stride_instruments::disability;
use stride_instruments::questionnaires::{pcs::Pcs4, tsk::Tsk11};

use crate::domains::{function_average, log_incomplete, pcs_raw, tsk_percent};
use crate::error::ScoreError;
use crate::phase::classify_phase;
use crate::{FULL_MAX_POINTS, PATIENT_MAX_POINTS};

/// Score a single intake snapshot against the baseline factor list.
///
/// Factors are evaluated in a fixed order, each awarding discrete points
/// independently when its threshold is met — no partial credit and no
/// cross-factor normalization. The returned breakdown preserves that order.
pub fn compute_baseline(
    snapshot: &AssessmentSnapshot,
    config: &ScoringConfig,
) -> Result<ScoreBreakdown, ScoreError> {
    let violations = snapshot.validate(&config.disability_indices);
    if !violations.is_empty() {
        return Err(ScoreError::OutOfRange(violations));
    }

    let t = &config.baseline;
    let mut factors = Vec::new();

    // 1. Pain
    factors.push(match snapshot.pain_vas {
        Some(vas) if vas <= t.pain_vas_max => factor(
            "pain",
            1,
            format!("VAS {vas} is at or below {}", t.pain_vas_max),
        ),
        Some(vas) => factor("pain", 0, format!("VAS {vas} exceeds {}", t.pain_vas_max)),
        None => factor("pain", 0, "pain rating not provided"),
    });

    // 2. Disability
    factors.push(match &snapshot.disability {
        Some(input) => {
            let kind = config.disability_indices.get(input.region)?;
            let pct = disability::percentage(kind, input.raw_score);
            if pct <= t.disability_pct_max {
                factor(
                    "disability",
                    1,
                    format!(
                        "{} {pct}% is at or below {}%",
                        kind.abbreviation, t.disability_pct_max
                    ),
                )
            } else {
                factor(
                    "disability",
                    0,
                    format!(
                        "{} {pct}% exceeds {}%",
                        kind.abbreviation, t.disability_pct_max
                    ),
                )
            }
        }
        None => factor("disability", 0, "disability index not completed"),
    });

    // 3. Function
    factors.push(match function_average(snapshot) {
        Some(avg) if avg >= t.function_high => factor(
            "function",
            2,
            format!("PSFS average {avg:.1} is at or above {:.0}", t.function_high),
        ),
        Some(avg) if avg >= t.function_mid => factor(
            "function",
            1,
            format!("PSFS average {avg:.1} is at or above {:.0}", t.function_mid),
        ),
        Some(avg) => factor(
            "function",
            0,
            format!("PSFS average {avg:.1} is below {:.0}", t.function_mid),
        ),
        None => factor("function", 0, "functional activities not rated"),
    });

    // 4. Confidence
    factors.push(match snapshot.confidence {
        Some(c) if c >= t.confidence_high => factor(
            "confidence",
            2,
            format!("confidence {c} is at or above {}", t.confidence_high),
        ),
        Some(c) if c >= t.confidence_mid => factor(
            "confidence",
            1,
            format!("confidence {c} is at or above {}", t.confidence_mid),
        ),
        Some(c) => factor(
            "confidence",
            0,
            format!("confidence {c} is below {}", t.confidence_mid),
        ),
        None => factor("confidence", 0, "confidence rating not provided"),
    });

    // 5. Fear-avoidance (normalized TSK-11)
    factors.push(match tsk_percent(snapshot) {
        Some(pct) if pct <= t.fear_avoidance_pct_max => factor(
            "fear_avoidance",
            1,
            format!(
                "TSK-11 normalized {pct} is at or below {}",
                t.fear_avoidance_pct_max
            ),
        ),
        Some(pct) => factor(
            "fear_avoidance",
            0,
            format!(
                "TSK-11 normalized {pct} exceeds {}",
                t.fear_avoidance_pct_max
            ),
        ),
        None => {
            log_incomplete(&Tsk11, snapshot, "fear_avoidance");
            factor("fear_avoidance", 0, "TSK-11 incomplete; no points awarded")
        }
    });

    // 6. Pain beliefs (PCS-4 raw total)
    factors.push(match pcs_raw(snapshot) {
        Some(raw) if raw <= t.catastrophizing_raw_max => factor(
            "pain_beliefs",
            1,
            format!(
                "PCS-4 total {raw} is at or below {}",
                t.catastrophizing_raw_max
            ),
        ),
        Some(raw) => factor(
            "pain_beliefs",
            0,
            format!("PCS-4 total {raw} exceeds {}", t.catastrophizing_raw_max),
        ),
        None => {
            log_incomplete(&Pcs4, snapshot, "pain_beliefs");
            factor("pain_beliefs", 0, "PCS-4 incomplete; no points awarded")
        }
    });

    // 7. Negative beliefs
    factors.push(match &snapshot.negative_belief_flags {
        Some(flags) if flags.is_empty() => {
            factor("negative_beliefs", 1, "no negative beliefs endorsed")
        }
        Some(flags) => factor(
            "negative_beliefs",
            0,
            format!("{} negative belief flag(s) endorsed", flags.len()),
        ),
        None => factor("negative_beliefs", 0, "belief checklist not administered"),
    });

    // Clinician-verified factors, only when a clinician reviewed the intake.
    let max_points = match &snapshot.clinician {
        Some(clinician) => {
            factors.push(if clinician.milestone_met {
                factor("milestone_met", 1, "clinician confirmed milestone")
            } else {
                factor("milestone_met", 0, "milestone not yet met")
            });
            factors.push(if clinician.objective_progress_verified {
                factor(
                    "objective_progress",
                    1,
                    "clinician verified objective progress",
                )
            } else {
                factor("objective_progress", 0, "objective progress not verified")
            });
            FULL_MAX_POINTS
        }
        None => PATIENT_MAX_POINTS,
    };

    let points: u8 = factors.iter().map(|f| f.points).sum::<u8>().min(max_points);
    let phase = classify_phase(points, max_points, config)?;

    Ok(ScoreBreakdown {
        points,
        max_points,
        factors,
        phase,
    })
}

pub(crate) fn factor(name: &str, points: u8, rationale: impl Into<String>) -> FactorResult {
    FactorResult {
        factor: name.to_string(),
        points,
        rationale: rationale.into(),
    }
}
