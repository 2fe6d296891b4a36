//! Illustrative records written into a fresh apiary.

use chrono::{DateTime, Months, Utc};

use crate::harvest::{HarvestEntry, HoneyType};
use crate::hive::{Hive, HiveType, QueenMarkerColor, QueenStatus};
use crate::id::HiveId;
use crate::inspection::{BeeMood, BroodPattern, HiveHealth, InspectionEntry};

/// When [`Apiary::open_with`](crate::Apiary::open_with) fills a collection
/// with sample records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeedPolicy {
    /// Seed any collection that is empty after loading.
    #[default]
    WhenEmpty,
    /// Seed only collections that were never saved (or could not be read).
    /// A collection the user emptied stays empty.
    WhenAbsent,
    Never,
}

fn months_before(now: DateTime<Utc>, months: u32) -> DateTime<Utc> {
    now.checked_sub_months(Months::new(months)).unwrap_or(now)
}

pub fn sample_hives(now: DateTime<Utc>) -> Vec<Hive> {
    let mut sunflower = Hive::new("Sunflower", HiveType::Langstroth, now);
    sunflower.location = "South Garden".to_string();
    sunflower.queen_status = QueenStatus::Laying;
    sunflower.queen_marker_color = QueenMarkerColor::Blue;
    sunflower.queen_installed_at = months_before(now, 8);
    sunflower.notes = "Strong colony, good honey producer".to_string();

    let mut meadow = Hive::new("Meadow", HiveType::Flow, now);
    meadow.location = "East Field".to_string();
    meadow.queen_status = QueenStatus::Present;
    meadow.queen_marker_color = QueenMarkerColor::Yellow;
    meadow.queen_installed_at = months_before(now, 3);
    meadow.notes = "New queen installed in fall, building up well".to_string();

    vec![sunflower, meadow]
}

pub fn sample_inspections(hive_id: HiveId, now: DateTime<Utc>) -> Vec<InspectionEntry> {
    let mut entry = InspectionEntry::new(hive_id, now);
    entry.queen_seen = true;
    entry.eggs_present = true;
    entry.larvae_present = true;
    entry.brood_pattern = BroodPattern::Excellent;
    entry.honey_stores = 4;
    entry.pollen_stores = 3;
    entry.mood = BeeMood::Calm;
    entry.mite_count = 2;
    entry.health = HiveHealth::Excellent;
    entry.notes = "Very strong colony, 8 frames of brood".to_string();
    vec![entry]
}

pub fn sample_harvests(hive_id: HiveId, now: DateTime<Utc>) -> Vec<HarvestEntry> {
    let mut entry = HarvestEntry::new(hive_id, now);
    entry.weight_kg = 12.5;
    entry.honey_type = HoneyType::Wildflower;
    entry.taste_rating = 5;
    entry.clarity_rating = 4;
    entry.aroma_rating = 5;
    entry.notes = "Beautiful golden honey, floral aroma".to_string();
    vec![entry]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn sample_queens_are_installed_months_back() {
        let now = Utc
            .with_ymd_and_hms(2025, 10, 15, 8, 0, 0)
            .single()
            .expect("valid fixture date");
        let hives = sample_hives(now);
        assert_eq!(hives[0].queen_installed_at.to_rfc3339(), "2025-02-15T08:00:00+00:00");
        assert_eq!(hives[1].queen_installed_at.to_rfc3339(), "2025-07-15T08:00:00+00:00");
    }

    #[test]
    fn month_arithmetic_clamps_to_month_end() {
        let now = Utc
            .with_ymd_and_hms(2025, 5, 31, 0, 0, 0)
            .single()
            .expect("valid fixture date");
        let hives = sample_hives(now);
        // 2024-09-31 does not exist.
        assert_eq!(hives[0].queen_installed_at.to_rfc3339(), "2024-09-30T00:00:00+00:00");
    }
}
