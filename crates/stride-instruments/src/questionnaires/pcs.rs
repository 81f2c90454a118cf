use std::collections::BTreeMap;

use crate::Questionnaire;

/// PCS-4: short-form Pain Catastrophizing Scale.
/// Four items rated 0–4, no reversed items. Raw range 0–16.
pub struct Pcs4;

const PCS4_RAW_MAX: u16 = 16;

impl Questionnaire for Pcs4 {
    fn id(&self) -> &str {
        "pcs4"
    }

    fn name(&self) -> &str {
        "PCS-4"
    }

    fn item_count(&self) -> u8 {
        4
    }

    fn response_range(&self) -> (u8, u8) {
        (0, 4)
    }

    fn raw_score(&self, responses: &BTreeMap<u8, u8>) -> Option<u16> {
        if responses.len() != 4 {
            return None;
        }
        let mut raw = 0u16;
        for item in 1..=4u8 {
            let &response = responses.get(&item)?;
            if response > 4 {
                return None;
            }
            raw += u16::from(response);
        }
        Some(raw)
    }

    fn normalize(&self, raw: u16) -> u8 {
        let raw = raw.min(PCS4_RAW_MAX);
        (f64::from(raw) / f64::from(PCS4_RAW_MAX) * 100.0).round() as u8
    }
}
