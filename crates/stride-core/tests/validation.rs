use std::collections::BTreeMap;

use stride_core::config::DisabilityIndexRegistry;
use stride_core::models::snapshot::{
    AssessmentSnapshot, DisabilityInput, FormKind, FunctionItem, PainRegion,
};
use uuid::Uuid;

fn snapshot() -> AssessmentSnapshot {
    AssessmentSnapshot::new(
        Uuid::new_v4(),
        jiff::Timestamp::UNIX_EPOCH,
        FormKind::Intake,
    )
}

#[test]
fn empty_snapshot_is_valid() {
    let registry = DisabilityIndexRegistry::standard();
    assert!(snapshot().validate(&registry).is_empty());
}

#[test]
fn pain_vas_above_ten_is_a_violation() {
    let registry = DisabilityIndexRegistry::standard();
    let mut s = snapshot();
    s.pain_vas = Some(11);

    let errors = s.validate(&registry);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "pain_vas");
    assert_eq!(errors[0].value, 11);
}

#[test]
fn empty_function_items_are_invalid_when_present() {
    let registry = DisabilityIndexRegistry::standard();
    let mut s = snapshot();
    s.function_items = Some(Vec::new());

    let errors = s.validate(&registry);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "function_items");
}

#[test]
fn function_item_scores_are_range_checked() {
    let registry = DisabilityIndexRegistry::standard();
    let mut s = snapshot();
    s.function_items = Some(vec![
        FunctionItem {
            activity: "walking".to_string(),
            score: 8,
        },
        FunctionItem {
            activity: "lifting".to_string(),
            score: 11,
        },
    ]);

    let errors = s.validate(&registry);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "function_items[1].score");
}

#[test]
fn questionnaire_responses_are_range_checked() {
    let registry = DisabilityIndexRegistry::standard();
    let mut s = snapshot();
    s.fear_avoidance_responses = BTreeMap::from([(3, 5)]); // response above 4
    s.catastrophizing_responses = BTreeMap::from([(9, 2)]); // item above 4

    let errors = s.validate(&registry);
    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0].field, "fear_avoidance_responses[3]");
    assert_eq!(errors[1].field, "catastrophizing_responses[9]");
}

#[test]
fn incomplete_questionnaires_are_not_violations() {
    let registry = DisabilityIndexRegistry::standard();
    let mut s = snapshot();
    s.fear_avoidance_responses = BTreeMap::from([(1, 2), (2, 3)]);

    assert!(s.validate(&registry).is_empty());
}

#[test]
fn disability_raw_score_is_checked_against_the_index_maximum() {
    let registry = DisabilityIndexRegistry::standard();
    let mut s = snapshot();
    s.disability = Some(DisabilityInput {
        region: PainRegion::LowBack,
        raw_score: 51, // ODI maximum is 50
    });

    let errors = s.validate(&registry);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "disability.raw_score");
    assert_eq!(errors[0].expected_range.max, 50);
}

#[test]
fn global_rating_of_change_is_bounded() {
    let registry = DisabilityIndexRegistry::standard();
    let mut s = snapshot();
    s.global_rating_of_change = Some(-6);

    let errors = s.validate(&registry);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "global_rating_of_change");
}

#[test]
fn multiple_violations_are_all_reported() {
    let registry = DisabilityIndexRegistry::standard();
    let mut s = snapshot();
    s.pain_vas = Some(12);
    s.confidence = Some(11);

    assert_eq!(s.validate(&registry).len(), 2);
}
