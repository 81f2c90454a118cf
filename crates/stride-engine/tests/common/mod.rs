#![allow(dead_code)]

use std::collections::BTreeMap;

use stride_core::models::snapshot::{AssessmentSnapshot, FormKind, FunctionItem};
use uuid::Uuid;

pub fn snapshot(form_kind: FormKind) -> AssessmentSnapshot {
    AssessmentSnapshot::new(Uuid::new_v4(), jiff::Timestamp::UNIX_EPOCH, form_kind)
}

/// TSK-11 responses where every item contributes `scored` after reversal
/// (reversed items 4, 8, 9 are entered as `5 − scored`). Raw total is
/// `11 × scored`.
pub fn tsk11_uniform(scored: u8) -> BTreeMap<u8, u8> {
    (1..=11)
        .map(|item| {
            let response = if [4, 8, 9].contains(&item) {
                5 - scored
            } else {
                scored
            };
            (item, response)
        })
        .collect()
}

/// PCS-4 responses with the same value on every item.
pub fn pcs4_uniform(value: u8) -> BTreeMap<u8, u8> {
    (1..=4).map(|item| (item, value)).collect()
}

pub fn psfs(scores: &[u8]) -> Vec<FunctionItem> {
    scores
        .iter()
        .enumerate()
        .map(|(index, &score)| FunctionItem {
            activity: format!("activity {index}"),
            score,
        })
        .collect()
}
