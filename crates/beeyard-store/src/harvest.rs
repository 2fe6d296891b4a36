//! Harvest entries: honey extracted from a hive, with quality ratings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id::{HarvestId, HiveId};

keyword_enum! {
    /// Predominant floral source of the honey.
    #[derive(Default)]
    pub enum HoneyType {
        #[default]
        Wildflower => "wildflower",
        Clover => "clover",
        Acacia => "acacia",
        Linden => "linden",
        Buckwheat => "buckwheat",
        Manuka => "manuka",
        Mixed => "mixed",
    }
}

fn default_rating() -> u8 {
    3
}

/// One harvest from one hive. Weight is always stored in kilograms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HarvestEntry {
    pub id: HarvestId,
    pub hive_id: HiveId,
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub weight_kg: f64,
    #[serde(default)]
    pub honey_type: HoneyType,

    // ── Ratings (1..=5) ──
    #[serde(default = "default_rating")]
    pub taste_rating: u8,
    #[serde(default = "default_rating")]
    pub clarity_rating: u8,
    #[serde(default = "default_rating")]
    pub aroma_rating: u8,

    #[serde(default)]
    pub notes: String,
}

impl HarvestEntry {
    pub fn new(hive_id: HiveId, date: DateTime<Utc>) -> Self {
        Self {
            id: HarvestId::new(),
            hive_id,
            date,
            weight_kg: 0.0,
            honey_type: HoneyType::default(),
            taste_rating: default_rating(),
            clarity_rating: default_rating(),
            aroma_rating: default_rating(),
            notes: String::new(),
        }
    }

    /// Mean of taste, clarity, and aroma.
    pub fn overall_rating(&self) -> f64 {
        let sum = u32::from(self.taste_rating)
            + u32::from(self.clarity_rating)
            + u32::from(self.aroma_rating);
        f64::from(sum) / 3.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overall_rating_is_mean_of_three() {
        let mut entry = HarvestEntry::new(HiveId::new(), Utc::now());
        entry.taste_rating = 5;
        entry.clarity_rating = 4;
        entry.aroma_rating = 5;
        assert!((entry.overall_rating() - 14.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn default_ratings_average_to_three() {
        let entry = HarvestEntry::new(HiveId::new(), Utc::now());
        assert_eq!(entry.overall_rating(), 3.0);
    }
}
