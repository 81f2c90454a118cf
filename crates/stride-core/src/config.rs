use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;
use crate::models::snapshot::PainRegion;

/// Immutable lookup record for one region-specific disability index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DisabilityIndexKind {
    pub region: PainRegion,
    pub mapped_category: String,
    pub abbreviation: String,
    pub max_score: u16,
}

/// Fixed table of supported disability indices. Built once at startup and
/// never mutated; calculators receive it by reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisabilityIndexRegistry {
    kinds: BTreeMap<PainRegion, DisabilityIndexKind>,
}

impl DisabilityIndexRegistry {
    /// The standard five-index table.
    pub fn standard() -> Self {
        let entries = [
            (PainRegion::Neck, "spine", "NDI", 50),
            (PainRegion::Thoracic, "spine", "TDI", 40),
            (PainRegion::LowBack, "spine", "ODI", 50),
            (PainRegion::UpperLimb, "upper_extremity", "ULFI", 100),
            (PainRegion::LowerLimb, "lower_extremity", "LEFS", 80),
        ];
        let kinds = entries
            .into_iter()
            .map(|(region, category, abbreviation, max_score)| {
                (
                    region,
                    DisabilityIndexKind {
                        region,
                        mapped_category: category.to_string(),
                        abbreviation: abbreviation.to_string(),
                        max_score,
                    },
                )
            })
            .collect();
        Self { kinds }
    }

    pub fn get(&self, region: PainRegion) -> Result<&DisabilityIndexKind, CoreError> {
        self.kinds
            .get(&region)
            .ok_or(CoreError::UnknownDisabilityIndex(region))
    }

    pub fn kinds(&self) -> impl Iterator<Item = &DisabilityIndexKind> {
        self.kinds.values()
    }
}

/// Thresholds for the baseline (intake) factor list. Points are awarded all
/// or nothing; there is no partial credit between tiers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaselineThresholds {
    /// VAS at or below this earns the pain point.
    pub pain_vas_max: u8,
    /// Disability percentage at or below this earns the disability point.
    pub disability_pct_max: u8,
    /// PSFS mean at or above this earns 2 function points.
    pub function_high: f64,
    /// PSFS mean at or above this earns 1 function point.
    pub function_mid: f64,
    /// Confidence at or above this earns 2 points.
    pub confidence_high: u8,
    /// Confidence at or above this earns 1 point.
    pub confidence_mid: u8,
    /// Normalized TSK-11 score (0–100) at or below this earns the
    /// fear-avoidance point.
    pub fear_avoidance_pct_max: u8,
    /// PCS-4 raw total at or below this earns the pain-belief point.
    pub catastrophizing_raw_max: u16,
}

impl Default for BaselineThresholds {
    fn default() -> Self {
        Self {
            pain_vas_max: 2,
            disability_pct_max: 20,
            function_high: 7.0,
            function_mid: 4.0,
            confidence_high: 8,
            confidence_mid: 5,
            fear_avoidance_pct_max: 22,
            catastrophizing_raw_max: 6,
        }
    }
}

/// Improvement thresholds for the follow-up factor list, each comparing the
/// current snapshot against the stored baseline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FollowUpThresholds {
    /// VAS reduction at or above this earns the pain point.
    pub pain_drop_min: u8,
    /// Disability percentage-point reduction earning the disability point.
    pub disability_pct_drop_min: u8,
    /// PSFS mean improvement at or above this earns 2 function points.
    pub function_gain_high: f64,
    /// PSFS mean improvement at or above this earns 1 function point.
    pub function_gain_mid: f64,
    /// Confidence improvement at or above this earns 2 points.
    pub confidence_gain_high: u8,
    /// Confidence improvement at or above this earns 1 point.
    pub confidence_gain_mid: u8,
    /// TSK-11 raw reduction at or above this earns the fear-avoidance point.
    pub fear_avoidance_raw_drop_min: u16,
    /// Global rating of change at or above this earns the GROC point.
    pub groc_min: i8,
}

impl Default for FollowUpThresholds {
    fn default() -> Self {
        Self {
            pain_drop_min: 2,
            disability_pct_drop_min: 10,
            function_gain_high: 4.0,
            function_gain_mid: 2.0,
            confidence_gain_high: 3,
            confidence_gain_mid: 1,
            fear_avoidance_raw_drop_min: 4,
            groc_min: 5,
        }
    }
}

/// Phase cutoffs as fractions of the ceiling in use. Reset below the first
/// cutoff, Educate below the second, Rebuild at or above it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhaseCutoffs {
    pub educate_ratio: f64,
    pub rebuild_ratio: f64,
}

impl Default for PhaseCutoffs {
    fn default() -> Self {
        Self {
            educate_ratio: 1.0 / 3.0,
            rebuild_ratio: 2.0 / 3.0,
        }
    }
}

/// Weights and band cutoffs for the psychological risk index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskWeights {
    pub psych_load: f64,
    pub catastrophizing: f64,
    pub fear_avoidance: f64,
    /// Indices below this are Low risk.
    pub medium_cutoff: f64,
    /// Indices below this (and at or above `medium_cutoff`) are Medium risk.
    pub high_cutoff: f64,
}

impl Default for RiskWeights {
    fn default() -> Self {
        Self {
            psych_load: 0.3,
            catastrophizing: 0.4,
            fear_avoidance: 0.3,
            medium_cutoff: 40.0,
            high_cutoff: 65.0,
        }
    }
}

/// Clinic-tunable scoring configuration. Constructed once at startup and
/// passed by reference into every calculator; nothing in here is mutated
/// after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    #[serde(default)]
    pub baseline: BaselineThresholds,
    #[serde(default)]
    pub follow_up: FollowUpThresholds,
    #[serde(default)]
    pub phase: PhaseCutoffs,
    #[serde(default)]
    pub risk: RiskWeights,
    #[serde(default = "DisabilityIndexRegistry::standard")]
    pub disability_indices: DisabilityIndexRegistry,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            baseline: BaselineThresholds::default(),
            follow_up: FollowUpThresholds::default(),
            phase: PhaseCutoffs::default(),
            risk: RiskWeights::default(),
            disability_indices: DisabilityIndexRegistry::standard(),
        }
    }
}
