use stride_core::config::DisabilityIndexKind;

/// Convert a raw disability questionnaire score into a 0–100 percentage
/// using the index's fixed maximum. Exact at the boundaries: 0 maps to 0,
/// `max_score` maps to 100.
pub fn percentage(kind: &DisabilityIndexKind, raw_score: u16) -> u8 {
    let raw = raw_score.min(kind.max_score);
    (f64::from(raw) / f64::from(kind.max_score) * 100.0).round() as u8
}
