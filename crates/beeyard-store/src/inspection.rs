//! Inspection entries: point-in-time observations of one hive.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id::{HiveId, InspectionId};

/// Mite counts above this value are flagged for treatment.
pub const MITE_ALERT_THRESHOLD: u32 = 3;

keyword_enum! {
    /// Capped-brood pattern quality.
    #[derive(Default)]
    pub enum BroodPattern {
        Excellent => "excellent",
        #[default]
        Good => "good",
        Spotty => "spotty",
        DroneLaying => "drone-laying",
        Empty => "empty",
    }
}

keyword_enum! {
    /// Colony temperament during the inspection.
    #[derive(Default)]
    pub enum BeeMood {
        #[default]
        Calm => "calm",
        Nervous => "nervous",
        Defensive => "defensive",
        Aggressive => "aggressive",
    }
}

keyword_enum! {
    /// Overall health assessment.
    #[derive(Default)]
    pub enum HiveHealth {
        Excellent => "excellent",
        #[default]
        Good => "good",
        Fair => "fair",
        Poor => "poor",
        Critical => "critical",
    }
}

impl HiveHealth {
    /// Whether this assessment counts toward the healthy-hive percentage.
    pub fn is_healthy(&self) -> bool {
        matches!(self, HiveHealth::Excellent | HiveHealth::Good)
    }
}

fn default_store_level() -> u8 {
    3
}

/// One inspection of one hive.
///
/// `honey_stores` and `pollen_stores` are intended to be 1..=5 but the
/// store accepts any value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InspectionEntry {
    pub id: InspectionId,
    pub hive_id: HiveId,
    pub date: DateTime<Utc>,

    // ── Checklist ──
    #[serde(default)]
    pub queen_seen: bool,
    #[serde(default)]
    pub eggs_present: bool,
    #[serde(default)]
    pub larvae_present: bool,
    #[serde(default)]
    pub queen_cells_seen: bool,

    // ── Assessments ──
    #[serde(default)]
    pub brood_pattern: BroodPattern,
    #[serde(default = "default_store_level")]
    pub honey_stores: u8,
    #[serde(default = "default_store_level")]
    pub pollen_stores: u8,
    #[serde(default)]
    pub mood: BeeMood,
    #[serde(default)]
    pub mite_count: u32,
    #[serde(default)]
    pub health: HiveHealth,

    #[serde(default)]
    pub notes: String,
}

impl InspectionEntry {
    /// A blank checklist for `hive_id` dated `date`, with the usual defaults.
    pub fn new(hive_id: HiveId, date: DateTime<Utc>) -> Self {
        Self {
            id: InspectionId::new(),
            hive_id,
            date,
            queen_seen: false,
            eggs_present: false,
            larvae_present: false,
            queen_cells_seen: false,
            brood_pattern: BroodPattern::default(),
            honey_stores: default_store_level(),
            pollen_stores: default_store_level(),
            mood: BeeMood::default(),
            mite_count: 0,
            health: HiveHealth::default(),
            notes: String::new(),
        }
    }

    pub fn mite_alert(&self) -> bool {
        self.mite_count > MITE_ALERT_THRESHOLD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_excellent_and_good_are_healthy() {
        let healthy: Vec<HiveHealth> = HiveHealth::ALL
            .iter()
            .copied()
            .filter(HiveHealth::is_healthy)
            .collect();
        assert_eq!(healthy, vec![HiveHealth::Excellent, HiveHealth::Good]);
    }

    #[test]
    fn sparse_record_fills_defaults() {
        let raw = r#"{
            "id":"0b3c7a52-8f57-4d43-a3c3-2c4f0fd1a001",
            "hive_id":"0b3c7a52-8f57-4d43-a3c3-2c4f0fd1a002",
            "date":"2025-06-01T09:30:00Z"
        }"#;
        let entry: InspectionEntry = serde_json::from_str(raw).expect("sparse entry should parse");
        assert_eq!(entry.honey_stores, 3);
        assert_eq!(entry.pollen_stores, 3);
        assert_eq!(entry.brood_pattern, BroodPattern::Good);
        assert_eq!(entry.health, HiveHealth::Good);
        assert!(!entry.queen_seen);
    }

    #[test]
    fn mite_alert_trips_above_threshold() {
        let mut entry = InspectionEntry::new(HiveId::new(), Utc::now());
        entry.mite_count = 3;
        assert!(!entry.mite_alert());
        entry.mite_count = 4;
        assert!(entry.mite_alert());
    }

    #[test]
    fn drone_laying_round_trips_as_kebab_keyword() {
        let encoded = serde_json::to_string(&BroodPattern::DroneLaying).expect("serialize");
        assert_eq!(encoded, "\"drone-laying\"");
        assert_eq!(
            "drone laying".parse::<BroodPattern>(),
            Ok(BroodPattern::DroneLaying)
        );
    }
}
