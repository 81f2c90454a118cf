use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::config::DisabilityIndexRegistry;
use crate::validation::{FieldRange, ValidationError};

/// Which form produced a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum FormKind {
    Intake,
    FollowUp,
}

/// Body region driving the choice of disability index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum PainRegion {
    Neck,
    Thoracic,
    LowBack,
    UpperLimb,
    LowerLimb,
}

/// One patient-chosen activity on the PSFS, rated 0–10.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FunctionItem {
    pub activity: String,
    pub score: u8,
}

/// Raw disability questionnaire result; the maximum score is resolved
/// through the [`DisabilityIndexRegistry`], never supplied by the patient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DisabilityInput {
    pub region: PainRegion,
    pub raw_score: u16,
}

/// Clinician-verified factors. Only present when a clinician reviewed the
/// submission; self-submitted intakes never carry this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ClinicianInput {
    pub milestone_met: bool,
    pub objective_progress_verified: bool,
}

/// One patient's responses at one point in time. Immutable once scored.
///
/// Every numeric field is optional: an absent field is a valid state that
/// scores zero for its factor, while a present field outside its range makes
/// the whole snapshot invalid (see [`AssessmentSnapshot::validate`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentSnapshot {
    pub id: Uuid,
    pub captured_at: jiff::Timestamp,
    pub form_kind: FormKind,
    /// Pain rating on the 0–10 visual analog scale.
    pub pain_vas: Option<u8>,
    /// Pre-computed 0–100 function score; overrides `function_items`.
    pub function_score: Option<u8>,
    /// PSFS activities; length ≥ 1 when present.
    pub function_items: Option<Vec<FunctionItem>>,
    /// Confidence to return to normal activity, 0–10.
    pub confidence: Option<u8>,
    /// TSK-11 responses keyed by item number 1–11, each 1–4.
    #[serde(default)]
    pub fear_avoidance_responses: BTreeMap<u8, u8>,
    /// PCS-4 responses keyed by item number 1–4, each 0–4.
    #[serde(default)]
    pub catastrophizing_responses: BTreeMap<u8, u8>,
    pub disability: Option<DisabilityInput>,
    /// `None` when the belief checklist was not administered; `Some` with an
    /// empty set means administered and clear.
    pub negative_belief_flags: Option<BTreeSet<String>>,
    /// Global rating of change, −5..+5. Read only on follow-up snapshots.
    pub global_rating_of_change: Option<i8>,
    pub clinician: Option<ClinicianInput>,
}

const VAS_RANGE: FieldRange = FieldRange::new(0, 10);
const FUNCTION_SCORE_RANGE: FieldRange = FieldRange::new(0, 100);
const FUNCTION_ITEM_RANGE: FieldRange = FieldRange::new(0, 10);
const CONFIDENCE_RANGE: FieldRange = FieldRange::new(0, 10);
const TSK_ITEM_RANGE: FieldRange = FieldRange::new(1, 11);
const TSK_RESPONSE_RANGE: FieldRange = FieldRange::new(1, 4);
const PCS_ITEM_RANGE: FieldRange = FieldRange::new(1, 4);
const PCS_RESPONSE_RANGE: FieldRange = FieldRange::new(0, 4);
const GROC_RANGE: FieldRange = FieldRange::new(-5, 5);

impl AssessmentSnapshot {
    /// Empty snapshot shell; callers fill in whichever sections the form
    /// actually collected.
    pub fn new(id: Uuid, captured_at: jiff::Timestamp, form_kind: FormKind) -> Self {
        Self {
            id,
            captured_at,
            form_kind,
            pain_vas: None,
            function_score: None,
            function_items: None,
            confidence: None,
            fear_avoidance_responses: BTreeMap::new(),
            catastrophizing_responses: BTreeMap::new(),
            disability: None,
            negative_belief_flags: None,
            global_rating_of_change: None,
            clinician: None,
        }
    }

    /// Range-check every present field. An empty result means the snapshot
    /// is scoreable; any entry means the whole snapshot must be rejected.
    ///
    /// Missing items in a questionnaire map are not violations — an
    /// incomplete instrument is a valid state that scores zero. Only values
    /// (or item numbers) outside their declared domain are reported here.
    pub fn validate(&self, registry: &DisabilityIndexRegistry) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if let Some(vas) = self.pain_vas
            && !VAS_RANGE.contains(i64::from(vas))
        {
            errors.push(ValidationError::out_of_range(
                "pain_vas",
                i64::from(vas),
                VAS_RANGE,
            ));
        }

        if let Some(score) = self.function_score
            && !FUNCTION_SCORE_RANGE.contains(i64::from(score))
        {
            errors.push(ValidationError::out_of_range(
                "function_score",
                i64::from(score),
                FUNCTION_SCORE_RANGE,
            ));
        }

        if let Some(items) = &self.function_items {
            if items.is_empty() {
                errors.push(ValidationError {
                    field: "function_items".to_string(),
                    value: 0,
                    expected_range: FieldRange::new(1, i64::MAX),
                    message: "function_items: must list at least one activity when present"
                        .to_string(),
                });
            }
            for (index, item) in items.iter().enumerate() {
                if !FUNCTION_ITEM_RANGE.contains(i64::from(item.score)) {
                    errors.push(ValidationError::out_of_range(
                        format!("function_items[{index}].score"),
                        i64::from(item.score),
                        FUNCTION_ITEM_RANGE,
                    ));
                }
            }
        }

        if let Some(confidence) = self.confidence
            && !CONFIDENCE_RANGE.contains(i64::from(confidence))
        {
            errors.push(ValidationError::out_of_range(
                "confidence",
                i64::from(confidence),
                CONFIDENCE_RANGE,
            ));
        }

        validate_responses(
            &mut errors,
            "fear_avoidance_responses",
            &self.fear_avoidance_responses,
            TSK_ITEM_RANGE,
            TSK_RESPONSE_RANGE,
        );
        validate_responses(
            &mut errors,
            "catastrophizing_responses",
            &self.catastrophizing_responses,
            PCS_ITEM_RANGE,
            PCS_RESPONSE_RANGE,
        );

        if let Some(disability) = &self.disability
            && let Ok(kind) = registry.get(disability.region)
        {
            let range = FieldRange::new(0, i64::from(kind.max_score));
            if !range.contains(i64::from(disability.raw_score)) {
                errors.push(ValidationError::out_of_range(
                    "disability.raw_score",
                    i64::from(disability.raw_score),
                    range,
                ));
            }
        }

        if let Some(groc) = self.global_rating_of_change
            && !GROC_RANGE.contains(i64::from(groc))
        {
            errors.push(ValidationError::out_of_range(
                "global_rating_of_change",
                i64::from(groc),
                GROC_RANGE,
            ));
        }

        errors
    }
}

fn validate_responses(
    errors: &mut Vec<ValidationError>,
    field: &str,
    responses: &BTreeMap<u8, u8>,
    item_range: FieldRange,
    response_range: FieldRange,
) {
    for (&item, &response) in responses {
        if !item_range.contains(i64::from(item)) {
            errors.push(ValidationError::out_of_range(
                format!("{field}[{item}]"),
                i64::from(item),
                item_range,
            ));
        }
        if !response_range.contains(i64::from(response)) {
            errors.push(ValidationError::out_of_range(
                format!("{field}[{item}]"),
                i64::from(response),
                response_range,
            ));
        }
    }
}
