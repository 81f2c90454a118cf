use stride_core::models::breakdown::DomainScores;
use stride_core::models::snapshot::AssessmentSnapshot;
use stride_instruments::Questionnaire;
use stride_instruments::questionnaires::{pcs::Pcs4, tsk::Tsk11};

/// Compute the four 0–100 domain scores used by the continuous path.
///
/// Incomplete questionnaires contribute zero (audit-logged, never an
/// error). Every domain is clamped to 0–100 even though the formulas are
/// already bounded for valid inputs.
pub fn domain_scores(snapshot: &AssessmentSnapshot) -> DomainScores {
    let pain = snapshot.pain_vas.map_or(0.0, scale_ten);

    let function = if let Some(score) = snapshot.function_score {
        f64::from(score)
    } else if let Some(avg) = function_average(snapshot) {
        avg * 10.0
    } else {
        0.0
    };

    let catastrophizing = match pcs_percent(snapshot) {
        Some(pct) => f64::from(pct),
        None => {
            log_incomplete(&Pcs4, snapshot, "psych_load");
            0.0
        }
    };
    let psych_load = (pain + catastrophizing) / 2.0;

    let fear_avoidance = match tsk_percent(snapshot) {
        Some(pct) => f64::from(pct),
        None => {
            log_incomplete(&Tsk11, snapshot, "fear_avoidance");
            0.0
        }
    };

    DomainScores {
        pain: clamp_domain(pain),
        function: clamp_domain(function),
        psych_load: clamp_domain(psych_load),
        fear_avoidance: clamp_domain(fear_avoidance),
    }
}

/// Mean PSFS activity score, when any activities were rated.
pub(crate) fn function_average(snapshot: &AssessmentSnapshot) -> Option<f64> {
    let items = snapshot.function_items.as_deref()?;
    if items.is_empty() {
        return None;
    }
    let total: u32 = items.iter().map(|item| u32::from(item.score)).sum();
    Some(f64::from(total) / items.len() as f64)
}

pub(crate) fn tsk_raw(snapshot: &AssessmentSnapshot) -> Option<u16> {
    Tsk11.raw_score(&snapshot.fear_avoidance_responses)
}

pub(crate) fn tsk_percent(snapshot: &AssessmentSnapshot) -> Option<u8> {
    tsk_raw(snapshot).map(|raw| Tsk11.normalize(raw))
}

pub(crate) fn pcs_raw(snapshot: &AssessmentSnapshot) -> Option<u16> {
    Pcs4.raw_score(&snapshot.catastrophizing_responses)
}

pub(crate) fn pcs_percent(snapshot: &AssessmentSnapshot) -> Option<u8> {
    pcs_raw(snapshot).map(|raw| Pcs4.normalize(raw))
}

pub(crate) fn scale_ten(value: u8) -> f64 {
    f64::from(value) * 10.0
}

fn clamp_domain(value: f64) -> f64 {
    value.clamp(0.0, 100.0)
}

/// Audit trail for graceful degradation: an incomplete instrument is a
/// valid state that scores zero for its factor.
pub(crate) fn log_incomplete(
    questionnaire: &dyn Questionnaire,
    snapshot: &AssessmentSnapshot,
    factor: &str,
) {
    tracing::debug!(
        snapshot_id = %snapshot.id,
        instrument = questionnaire.id(),
        factor,
        "instrument incomplete; factor scored 0",
    );
}
