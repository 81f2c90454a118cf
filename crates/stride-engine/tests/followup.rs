mod common;

use stride_core::config::ScoringConfig;
use stride_core::models::breakdown::Phase;
use stride_core::models::snapshot::{
    AssessmentSnapshot, ClinicianInput, DisabilityInput, FormKind, PainRegion,
};
use stride_engine::{ScoreError, compute_follow_up};

use common::{psfs, snapshot, tsk11_uniform};

fn poor_baseline() -> AssessmentSnapshot {
    let mut s = snapshot(FormKind::Intake);
    s.pain_vas = Some(7);
    s.disability = Some(DisabilityInput {
        region: PainRegion::LowBack,
        raw_score: 23, // ODI 46%
    });
    s.function_items = Some(psfs(&[3, 3, 3]));
    s.confidence = Some(3);
    s.fear_avoidance_responses = tsk11_uniform(3); // raw 33
    s.negative_belief_flags = Some(["hurt_means_harm".to_string()].into());
    s
}

fn improved_follow_up() -> AssessmentSnapshot {
    let mut s = snapshot(FormKind::FollowUp);
    s.pain_vas = Some(3); // drop 4
    s.disability = Some(DisabilityInput {
        region: PainRegion::LowBack,
        raw_score: 10, // ODI 20%, drop 26 points
    });
    s.function_items = Some(psfs(&[8, 8, 8])); // gain 5
    s.confidence = Some(7); // gain 4
    s.fear_avoidance_responses = tsk11_uniform(2); // raw 22, drop 11
    s.negative_belief_flags = Some(Default::default()); // all cleared
    s.global_rating_of_change = Some(5);
    s
}

#[test]
fn full_improvement_scores_nine_patient_only() {
    let config = ScoringConfig::default();
    let baseline = poor_baseline();
    let current = improved_follow_up();

    let breakdown = compute_follow_up(Some(&baseline), &current, &config).unwrap();
    assert_eq!(breakdown.points, 9);
    assert_eq!(breakdown.max_points, 9);
    assert_eq!(breakdown.phase, Phase::Rebuild);
}

#[test]
fn clinician_factors_raise_the_ceiling_to_eleven() {
    let config = ScoringConfig::default();
    let baseline = poor_baseline();
    let mut current = improved_follow_up();
    current.clinician = Some(ClinicianInput {
        milestone_met: true,
        objective_progress_verified: true,
    });

    let breakdown = compute_follow_up(Some(&baseline), &current, &config).unwrap();
    assert_eq!(breakdown.points, 11);
    assert_eq!(breakdown.max_points, 11);
}

#[test]
fn missing_baseline_is_fatal() {
    let config = ScoringConfig::default();
    let current = improved_follow_up();

    let err = compute_follow_up(None, &current, &config).unwrap_err();
    assert!(matches!(err, ScoreError::MissingBaseline));
}

#[test]
fn intake_snapshot_cannot_be_scored_as_follow_up() {
    let config = ScoringConfig::default();
    let baseline = poor_baseline();
    let current = snapshot(FormKind::Intake);

    let err = compute_follow_up(Some(&baseline), &current, &config).unwrap_err();
    assert!(matches!(
        err,
        ScoreError::WrongFormKind {
            expected: FormKind::FollowUp,
            found: FormKind::Intake,
        },
    ));
}

#[test]
fn sub_threshold_changes_score_zero() {
    let config = ScoringConfig::default();
    let baseline = poor_baseline();
    let mut current = snapshot(FormKind::FollowUp);
    current.pain_vas = Some(6); // drop 1 < 2
    current.function_items = Some(psfs(&[4, 4, 4])); // gain 1 < 2
    current.confidence = Some(3); // no change
    current.global_rating_of_change = Some(2); // below +5

    let breakdown = compute_follow_up(Some(&baseline), &current, &config).unwrap();
    assert_eq!(breakdown.points, 0);
    assert_eq!(breakdown.phase, Phase::Reset);
}

#[test]
fn mid_tier_improvements_earn_single_points() {
    let config = ScoringConfig::default();
    let mut baseline = snapshot(FormKind::Intake);
    baseline.function_items = Some(psfs(&[4, 4, 4]));
    baseline.confidence = Some(5);

    let mut current = snapshot(FormKind::FollowUp);
    current.function_items = Some(psfs(&[6, 6, 6])); // gain 2 → +1
    current.confidence = Some(6); // gain 1 → +1

    let breakdown = compute_follow_up(Some(&baseline), &current, &config).unwrap();
    let function = breakdown
        .factors
        .iter()
        .find(|f| f.factor == "function")
        .unwrap();
    let confidence = breakdown
        .factors
        .iter()
        .find(|f| f.factor == "confidence")
        .unwrap();
    assert_eq!(function.points, 1);
    assert_eq!(confidence.points, 1);
    assert_eq!(breakdown.points, 2);
}

#[test]
fn worsening_pain_earns_nothing() {
    let config = ScoringConfig::default();
    let mut baseline = snapshot(FormKind::Intake);
    baseline.pain_vas = Some(3);
    let mut current = snapshot(FormKind::FollowUp);
    current.pain_vas = Some(7);

    let breakdown = compute_follow_up(Some(&baseline), &current, &config).unwrap();
    assert_eq!(breakdown.points, 0);
}

#[test]
fn factor_order_is_fixed() {
    let config = ScoringConfig::default();
    let baseline = poor_baseline();
    let current = improved_follow_up();

    let breakdown = compute_follow_up(Some(&baseline), &current, &config).unwrap();
    let names: Vec<&str> = breakdown.factors.iter().map(|f| f.factor.as_str()).collect();
    assert_eq!(
        names,
        [
            "pain",
            "disability",
            "function",
            "confidence",
            "fear_avoidance",
            "negative_beliefs",
            "global_rating_of_change",
        ],
    );
}

#[test]
fn violations_name_the_offending_snapshot() {
    let config = ScoringConfig::default();
    let mut baseline = poor_baseline();
    baseline.pain_vas = Some(12);
    let current = improved_follow_up();

    let err = compute_follow_up(Some(&baseline), &current, &config).unwrap_err();
    match err {
        ScoreError::OutOfRange(violations) => {
            assert_eq!(violations.len(), 1);
            assert_eq!(violations[0].field, "baseline.pain_vas");
        }
        other => panic!("expected OutOfRange, got {other:?}"),
    }
}
