use std::collections::BTreeMap;

use crate::Questionnaire;

/// TSK-11: Tampa Scale of Kinesiophobia, 11-item short form.
/// Items rated 1–4; items 4, 8, and 9 are reverse-scored (`5 − response`).
/// Raw range 11–44, higher = more fear of movement.
pub struct Tsk11;

/// TSK-7: the 7-item Tampa Scale variant some legacy intake forms collect.
/// Items rated 1–4; items 2, 6, and 7 are reverse-scored. Raw range 7–28.
/// Not numerically interchangeable with [`Tsk11`].
pub struct Tsk7;

const TSK11_REVERSED: [u8; 3] = [4, 8, 9];
const TSK7_REVERSED: [u8; 3] = [2, 6, 7];

const TSK11_RAW_MIN: u16 = 11;
const TSK11_RAW_MAX: u16 = 44;
const TSK7_RAW_MIN: u16 = 7;
const TSK7_RAW_MAX: u16 = 28;

impl Questionnaire for Tsk11 {
    fn id(&self) -> &str {
        "tsk11"
    }

    fn name(&self) -> &str {
        "TSK-11"
    }

    fn item_count(&self) -> u8 {
        11
    }

    fn response_range(&self) -> (u8, u8) {
        (1, 4)
    }

    fn raw_score(&self, responses: &BTreeMap<u8, u8>) -> Option<u16> {
        sum_items(responses, 11, &TSK11_REVERSED)
    }

    fn normalize(&self, raw: u16) -> u8 {
        normalize_span(raw, TSK11_RAW_MIN, TSK11_RAW_MAX)
    }
}

impl Tsk11 {
    /// Inverse of [`Questionnaire::normalize`]: recover the raw score for a
    /// 0–100 value. Round-trips within ±1 of the original raw score.
    pub fn denormalize(&self, percent: u8) -> u16 {
        let percent = u16::from(percent.min(100));
        let span = f64::from(TSK11_RAW_MAX - TSK11_RAW_MIN);
        TSK11_RAW_MIN + (f64::from(percent) / 100.0 * span).round() as u16
    }
}

impl Questionnaire for Tsk7 {
    fn id(&self) -> &str {
        "tsk7"
    }

    fn name(&self) -> &str {
        "TSK-7"
    }

    fn item_count(&self) -> u8 {
        7
    }

    fn response_range(&self) -> (u8, u8) {
        (1, 4)
    }

    fn raw_score(&self, responses: &BTreeMap<u8, u8>) -> Option<u16> {
        sum_items(responses, 7, &TSK7_REVERSED)
    }

    fn normalize(&self, raw: u16) -> u8 {
        normalize_span(raw, TSK7_RAW_MIN, TSK7_RAW_MAX)
    }
}

/// All-or-nothing sum: every item 1..=`item_count` answered once, each
/// response 1–4, reversed items scored as `5 − response`.
fn sum_items(responses: &BTreeMap<u8, u8>, item_count: u8, reversed: &[u8]) -> Option<u16> {
    if responses.len() != usize::from(item_count) {
        return None;
    }
    let mut raw = 0u16;
    for item in 1..=item_count {
        let &response = responses.get(&item)?;
        if !(1..=4).contains(&response) {
            return None;
        }
        let scored = if reversed.contains(&item) {
            5 - response
        } else {
            response
        };
        raw += u16::from(scored);
    }
    Some(raw)
}

fn normalize_span(raw: u16, min: u16, max: u16) -> u8 {
    let raw = raw.clamp(min, max);
    let span = f64::from(max - min);
    (f64::from(raw - min) / span * 100.0).round() as u8
}
