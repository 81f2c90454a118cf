use stride_core::config::ScoringConfig;
use stride_core::models::breakdown::Phase;

use crate::error::ScoreError;

/// Map a clinical score onto a recovery phase via cutoffs proportional to
/// the ceiling in use (9 patient-only, 11 with clinician factors).
///
/// Monotone by construction: for scores a ≤ b under the same ceiling,
/// `classify_phase(a) ≤ classify_phase(b)`.
pub fn classify_phase(score: u8, ceiling: u8, config: &ScoringConfig) -> Result<Phase, ScoreError> {
    if ceiling == 0 {
        return Err(ScoreError::ZeroCeiling);
    }
    if score > ceiling {
        return Err(ScoreError::ScoreAboveCeiling { score, ceiling });
    }

    let ratio = f64::from(score) / f64::from(ceiling);
    let cutoffs = &config.phase;
    Ok(if ratio < cutoffs.educate_ratio {
        Phase::Reset
    } else if ratio < cutoffs.rebuild_ratio {
        Phase::Educate
    } else {
        Phase::Rebuild
    })
}
