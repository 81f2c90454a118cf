//! stride-instruments
//!
//! Standardized questionnaire definitions and normalizers for the Stride
//! scoring engine. Pure data and arithmetic. Every scorer is strictly
//! all-or-nothing: a complete, in-range response set yields a raw score and
//! anything else yields `None` — never a partial or prorated value.

pub mod disability;
pub mod questionnaires;

use std::collections::BTreeMap;

/// Trait implemented by each standardized questionnaire.
pub trait Questionnaire: Send + Sync {
    /// Unique identifier (e.g. "tsk11", "pcs4").
    fn id(&self) -> &str;

    /// Human-readable name (e.g. "TSK-11", "PCS-4").
    fn name(&self) -> &str;

    /// Number of items that must all be answered.
    fn item_count(&self) -> u8;

    /// Inclusive per-item response bounds.
    fn response_range(&self) -> (u8, u8);

    /// Sum the responses, applying any reverse-scored items. Returns `None`
    /// unless every item 1..=`item_count` is answered exactly once with an
    /// in-range value.
    fn raw_score(&self, responses: &BTreeMap<u8, u8>) -> Option<u16>;

    /// Map a raw score onto 0–100.
    fn normalize(&self, raw: u16) -> u8;
}

/// Return all registered questionnaires.
pub fn all_questionnaires() -> Vec<Box<dyn Questionnaire>> {
    vec![
        Box::new(questionnaires::tsk::Tsk11),
        Box::new(questionnaires::tsk::Tsk7),
        Box::new(questionnaires::pcs::Pcs4),
    ]
}

/// Look up a questionnaire by ID.
pub fn get_questionnaire(id: &str) -> Option<Box<dyn Questionnaire>> {
    all_questionnaires().into_iter().find(|q| q.id() == id)
}
