use stride_core::config::ScoringConfig;
use stride_core::models::breakdown::ScoreBreakdown;
use stride_core::models::snapshot::{AssessmentSnapshot, FormKind};
use stride_core::validation::ValidationError;
use stride_instruments::disability;
use stride_instruments::questionnaires::tsk::Tsk11;

use crate::baseline::factor;
use crate::domains::{function_average, log_incomplete, tsk_raw};
use crate::error::ScoreError;
use crate::phase::classify_phase;
use crate::{FULL_MAX_POINTS, PATIENT_MAX_POINTS};

/// Score a follow-up snapshot against its stored baseline.
///
/// Each factor compares the change between the two snapshots against an
/// improvement threshold. A factor whose inputs are missing on either
/// snapshot scores zero; only out-of-range values abort the computation.
pub fn compute_follow_up(
    baseline: Option<&AssessmentSnapshot>,
    current: &AssessmentSnapshot,
    config: &ScoringConfig,
) -> Result<ScoreBreakdown, ScoreError> {
    let baseline = baseline.ok_or(ScoreError::MissingBaseline)?;
    if current.form_kind != FormKind::FollowUp {
        return Err(ScoreError::WrongFormKind {
            expected: FormKind::FollowUp,
            found: current.form_kind,
        });
    }

    let mut violations = scoped("baseline", baseline.validate(&config.disability_indices));
    violations.extend(scoped(
        "current",
        current.validate(&config.disability_indices),
    ));
    if !violations.is_empty() {
        return Err(ScoreError::OutOfRange(violations));
    }

    let t = &config.follow_up;
    let mut factors = Vec::new();

    // 1. Pain improvement
    factors.push(match (baseline.pain_vas, current.pain_vas) {
        (Some(before), Some(after)) => {
            let drop = i16::from(before) - i16::from(after);
            if drop >= i16::from(t.pain_drop_min) {
                factor(
                    "pain",
                    1,
                    format!("VAS improved by {drop} (threshold {})", t.pain_drop_min),
                )
            } else {
                factor(
                    "pain",
                    0,
                    format!("VAS changed by {drop} (threshold {})", t.pain_drop_min),
                )
            }
        }
        _ => factor("pain", 0, "pain not rated on both snapshots"),
    });

    // 2. Disability improvement
    factors.push(match (&baseline.disability, &current.disability) {
        (Some(before), Some(after)) => {
            let before_pct = {
                let kind = config.disability_indices.get(before.region)?;
                disability::percentage(kind, before.raw_score)
            };
            let after_pct = {
                let kind = config.disability_indices.get(after.region)?;
                disability::percentage(kind, after.raw_score)
            };
            let drop = i16::from(before_pct) - i16::from(after_pct);
            if drop >= i16::from(t.disability_pct_drop_min) {
                factor(
                    "disability",
                    1,
                    format!(
                        "disability improved by {drop} points (threshold {})",
                        t.disability_pct_drop_min
                    ),
                )
            } else {
                factor(
                    "disability",
                    0,
                    format!(
                        "disability changed by {drop} points (threshold {})",
                        t.disability_pct_drop_min
                    ),
                )
            }
        }
        _ => factor("disability", 0, "disability index not completed on both snapshots"),
    });

    // 3. Function improvement
    factors.push(
        match (function_average(baseline), function_average(current)) {
            (Some(before), Some(after)) => {
                let gain = after - before;
                if gain >= t.function_gain_high {
                    factor(
                        "function",
                        2,
                        format!(
                            "PSFS average improved by {gain:.1} (threshold {:.0})",
                            t.function_gain_high
                        ),
                    )
                } else if gain >= t.function_gain_mid {
                    factor(
                        "function",
                        1,
                        format!(
                            "PSFS average improved by {gain:.1} (threshold {:.0})",
                            t.function_gain_mid
                        ),
                    )
                } else {
                    factor(
                        "function",
                        0,
                        format!(
                            "PSFS average changed by {gain:.1} (threshold {:.0})",
                            t.function_gain_mid
                        ),
                    )
                }
            }
            _ => factor("function", 0, "functional activities not rated on both snapshots"),
        },
    );

    // 4. Confidence improvement
    factors.push(match (baseline.confidence, current.confidence) {
        (Some(before), Some(after)) => {
            let gain = i16::from(after) - i16::from(before);
            if gain >= i16::from(t.confidence_gain_high) {
                factor(
                    "confidence",
                    2,
                    format!(
                        "confidence improved by {gain} (threshold {})",
                        t.confidence_gain_high
                    ),
                )
            } else if gain >= i16::from(t.confidence_gain_mid) {
                factor(
                    "confidence",
                    1,
                    format!(
                        "confidence improved by {gain} (threshold {})",
                        t.confidence_gain_mid
                    ),
                )
            } else {
                factor(
                    "confidence",
                    0,
                    format!(
                        "confidence changed by {gain} (threshold {})",
                        t.confidence_gain_mid
                    ),
                )
            }
        }
        _ => factor("confidence", 0, "confidence not rated on both snapshots"),
    });

    // 5. Fear-avoidance improvement (TSK-11 raw totals)
    factors.push(match (tsk_raw(baseline), tsk_raw(current)) {
        (Some(before), Some(after)) => {
            let drop = i32::from(before) - i32::from(after);
            if drop >= i32::from(t.fear_avoidance_raw_drop_min) {
                factor(
                    "fear_avoidance",
                    1,
                    format!(
                        "TSK-11 raw improved by {drop} (threshold {})",
                        t.fear_avoidance_raw_drop_min
                    ),
                )
            } else {
                factor(
                    "fear_avoidance",
                    0,
                    format!(
                        "TSK-11 raw changed by {drop} (threshold {})",
                        t.fear_avoidance_raw_drop_min
                    ),
                )
            }
        }
        _ => {
            log_incomplete(&Tsk11, current, "fear_avoidance");
            factor(
                "fear_avoidance",
                0,
                "TSK-11 incomplete on one or both snapshots",
            )
        }
    });

    // 6. Negative beliefs cleared
    factors.push(match &current.negative_belief_flags {
        Some(flags) if flags.is_empty() => {
            let had_flags = baseline
                .negative_belief_flags
                .as_ref()
                .is_some_and(|f| !f.is_empty());
            if had_flags {
                factor("negative_beliefs", 1, "all negative beliefs cleared")
            } else {
                factor("negative_beliefs", 1, "no negative beliefs endorsed")
            }
        }
        Some(flags) => factor(
            "negative_beliefs",
            0,
            format!("{} negative belief flag(s) still endorsed", flags.len()),
        ),
        None => factor("negative_beliefs", 0, "belief checklist not administered"),
    });

    // 7. Global rating of change
    factors.push(match current.global_rating_of_change {
        Some(groc) if groc >= t.groc_min => factor(
            "global_rating_of_change",
            1,
            format!("GROC {groc:+} is at or above {:+}", t.groc_min),
        ),
        Some(groc) => factor(
            "global_rating_of_change",
            0,
            format!("GROC {groc:+} is below {:+}", t.groc_min),
        ),
        None => factor("global_rating_of_change", 0, "GROC not provided"),
    });

    // Clinician-verified factors from the current submission.
    let max_points = match &current.clinician {
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

/// Prefix violations with the snapshot they came from, so a caller can tell
/// a bad baseline apart from a bad follow-up.
fn scoped(scope: &str, violations: Vec<ValidationError>) -> Vec<ValidationError> {
    violations
        .into_iter()
        .map(|mut violation| {
            violation.field = format!("{scope}.{}", violation.field);
            violation.message = format!("{scope}.{}", violation.message);
            violation
        })
        .collect()
}
