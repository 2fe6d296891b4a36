//! Canonical in-memory apiary state over a key-value backend.
//!
//! This is the memory boundary for `beeyard-store`:
//! - load/seed from the backend on open
//! - newest-first record collections with cascade delete
//! - derived statistics, recomputed on every call
//! - explicit `persist()` of whatever changed

use crate::error::StoreError;
use crate::harvest::HarvestEntry;
use crate::hive::{Hive, HiveType};
use crate::id::{HarvestId, HiveId, InspectionId};
use crate::inspection::InspectionEntry;
use crate::kv::{self, KvStore, StoreKey};
use crate::seed::{self, SeedPolicy};
use crate::settings::{Settings, WeightUnit};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeSet;

/// Returned by [`Apiary::hive_name_for`] when no hive has the id.
pub const UNKNOWN_HIVE_NAME: &str = "Unknown";

/// What a hive deletion removed.
#[derive(Debug, Clone, PartialEq)]
pub struct HiveRemoval {
    pub hive: Hive,
    pub inspections_removed: usize,
    pub harvests_removed: usize,
}

/// Aggregate statistics over the whole apiary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ApiarySummary {
    pub total_hives: usize,
    pub total_inspections: usize,
    pub total_harvests: usize,
    pub total_harvest_kg: f64,
    pub average_harvest_rating: f64,
    pub healthy_hive_percent: f64,
}

/// The apiary data store.
///
/// Owns the four record sets and the backend they persist to. Mutations
/// only touch memory and mark their key dirty; nothing is written until
/// [`persist`](Self::persist) is called.
#[derive(Debug)]
pub struct Apiary<K: KvStore> {
    kv: K,
    hives: Vec<Hive>,
    inspections: Vec<InspectionEntry>,
    harvests: Vec<HarvestEntry>,
    settings: Settings,
    dirty: BTreeSet<StoreKey>,
}

impl<K: KvStore> Apiary<K> {
    /// Load state from `kv`, seeding every empty collection with samples.
    pub fn open(kv: K, now: DateTime<Utc>) -> Self {
        Self::open_with(kv, now, SeedPolicy::WhenEmpty)
    }

    /// Load state from `kv`, seeding according to `policy`.
    ///
    /// Seeded collections are marked dirty, so the next `persist()` saves
    /// them through the normal path.
    pub fn open_with(kv: K, now: DateTime<Utc>, policy: SeedPolicy) -> Self {
        let hives: Option<Vec<Hive>> = kv::load(&kv, StoreKey::Hives);
        let inspections: Option<Vec<InspectionEntry>> = kv::load(&kv, StoreKey::Inspections);
        let harvests: Option<Vec<HarvestEntry>> = kv::load(&kv, StoreKey::Harvests);
        let settings = kv::load_or(&kv, StoreKey::Settings, Settings::default());

        let wants_seed = |slot_present: bool, empty: bool| match policy {
            SeedPolicy::WhenEmpty => empty,
            SeedPolicy::WhenAbsent => !slot_present,
            SeedPolicy::Never => false,
        };

        let mut dirty = BTreeSet::new();

        let hives_present = hives.is_some();
        let mut hives = hives.unwrap_or_default();
        if wants_seed(hives_present, hives.is_empty()) {
            hives = seed::sample_hives(now);
            dirty.insert(StoreKey::Hives);
        }
        let first_hive = hives.first().map(|h| h.id).unwrap_or_default();

        let inspections_present = inspections.is_some();
        let mut inspections = inspections.unwrap_or_default();
        if wants_seed(inspections_present, inspections.is_empty()) {
            inspections = seed::sample_inspections(first_hive, now);
            dirty.insert(StoreKey::Inspections);
        }

        let harvests_present = harvests.is_some();
        let mut harvests = harvests.unwrap_or_default();
        if wants_seed(harvests_present, harvests.is_empty()) {
            harvests = seed::sample_harvests(first_hive, now);
            dirty.insert(StoreKey::Harvests);
        }

        if !dirty.is_empty() {
            tracing::info!(
                seeded = ?dirty.iter().map(StoreKey::as_str).collect::<Vec<_>>(),
                "seeded empty collections"
            );
        }

        Self {
            kv,
            hives,
            inspections,
            harvests,
            settings,
            dirty,
        }
    }

    /// Save every dirty key to the backend, then clear the dirty set.
    ///
    /// Keys that saved successfully stay clean even if a later key fails.
    pub fn persist(&mut self) -> Result<(), StoreError> {
        while let Some(key) = self.dirty.first().copied() {
            match key {
                StoreKey::Hives => kv::save(&mut self.kv, key, &self.hives)?,
                StoreKey::Inspections => kv::save(&mut self.kv, key, &self.inspections)?,
                StoreKey::Harvests => kv::save(&mut self.kv, key, &self.harvests)?,
                StoreKey::Settings => kv::save(&mut self.kv, key, &self.settings)?,
            }
            self.dirty.remove(&key);
        }
        Ok(())
    }

    /// Keys changed since the last successful persist.
    pub fn dirty_keys(&self) -> impl Iterator<Item = StoreKey> + '_ {
        self.dirty.iter().copied()
    }

    pub fn is_dirty(&self) -> bool {
        !self.dirty.is_empty()
    }

    pub fn backend(&self) -> &K {
        &self.kv
    }

    pub fn into_backend(self) -> K {
        self.kv
    }

    // ── Collections ──────────────────────────────────────────────────

    /// All hives, most recently added first.
    pub fn hives(&self) -> &[Hive] {
        &self.hives
    }

    pub fn inspections(&self) -> &[InspectionEntry] {
        &self.inspections
    }

    pub fn harvests(&self) -> &[HarvestEntry] {
        &self.harvests
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn hive(&self, id: HiveId) -> Option<&Hive> {
        self.hives.iter().find(|h| h.id == id)
    }

    pub fn inspection(&self, id: InspectionId) -> Option<&InspectionEntry> {
        self.inspections.iter().find(|e| e.id == id)
    }

    pub fn harvest(&self, id: HarvestId) -> Option<&HarvestEntry> {
        self.harvests.iter().find(|e| e.id == id)
    }

    // ── Hives ────────────────────────────────────────────────────────

    /// Insert at the front. No validation; callers check names.
    pub fn add_hive(&mut self, hive: Hive) {
        tracing::debug!(hive = %hive.id, name = %hive.name, "add hive");
        self.hives.insert(0, hive);
        self.dirty.insert(StoreKey::Hives);
    }

    /// Remove a hive and every inspection and harvest that references it.
    ///
    /// Returns `None` (and changes nothing) if no hive has `id`.
    pub fn delete_hive(&mut self, id: HiveId) -> Option<HiveRemoval> {
        let index = self.hives.iter().position(|h| h.id == id)?;
        let hive = self.hives.remove(index);
        self.dirty.insert(StoreKey::Hives);

        let before = self.inspections.len();
        self.inspections.retain(|e| e.hive_id != id);
        let inspections_removed = before - self.inspections.len();
        if inspections_removed > 0 {
            self.dirty.insert(StoreKey::Inspections);
        }

        let before = self.harvests.len();
        self.harvests.retain(|e| e.hive_id != id);
        let harvests_removed = before - self.harvests.len();
        if harvests_removed > 0 {
            self.dirty.insert(StoreKey::Harvests);
        }

        tracing::debug!(
            hive = %id,
            inspections_removed,
            harvests_removed,
            "delete hive"
        );
        Some(HiveRemoval {
            hive,
            inspections_removed,
            harvests_removed,
        })
    }

    // ── Inspections ──────────────────────────────────────────────────

    pub fn add_inspection(&mut self, entry: InspectionEntry) {
        tracing::debug!(inspection = %entry.id, hive = %entry.hive_id, "add inspection");
        self.inspections.insert(0, entry);
        self.dirty.insert(StoreKey::Inspections);
    }

    pub fn delete_inspection(&mut self, id: InspectionId) -> Option<InspectionEntry> {
        let index = self.inspections.iter().position(|e| e.id == id)?;
        self.dirty.insert(StoreKey::Inspections);
        tracing::debug!(inspection = %id, "delete inspection");
        Some(self.inspections.remove(index))
    }

    /// Inspections of one hive, most recently added first.
    pub fn inspections_for(&self, hive_id: HiveId) -> impl Iterator<Item = &InspectionEntry> {
        self.inspections.iter().filter(move |e| e.hive_id == hive_id)
    }

    /// The most recently *added* inspection of a hive.
    ///
    /// Insertion order, not the `date` field: a backdated entry added later
    /// still counts as the last one.
    pub fn last_inspection_for(&self, hive_id: HiveId) -> Option<&InspectionEntry> {
        self.inspections_for(hive_id).next()
    }

    // ── Harvests ─────────────────────────────────────────────────────

    pub fn add_harvest(&mut self, entry: HarvestEntry) {
        tracing::debug!(harvest = %entry.id, hive = %entry.hive_id, "add harvest");
        self.harvests.insert(0, entry);
        self.dirty.insert(StoreKey::Harvests);
    }

    pub fn delete_harvest(&mut self, id: HarvestId) -> Option<HarvestEntry> {
        let index = self.harvests.iter().position(|e| e.id == id)?;
        self.dirty.insert(StoreKey::Harvests);
        tracing::debug!(harvest = %id, "delete harvest");
        Some(self.harvests.remove(index))
    }

    pub fn harvests_for(&self, hive_id: HiveId) -> impl Iterator<Item = &HarvestEntry> {
        self.harvests.iter().filter(move |e| e.hive_id == hive_id)
    }

    pub fn harvested_kg_for(&self, hive_id: HiveId) -> f64 {
        self.harvests_for(hive_id).map(|e| e.weight_kg).sum()
    }

    // ── Settings ─────────────────────────────────────────────────────

    pub fn set_onboarding_completed(&mut self, completed: bool) {
        self.settings.has_completed_onboarding = completed;
        self.dirty.insert(StoreKey::Settings);
    }

    pub fn set_default_hive_type(&mut self, hive_type: HiveType) {
        self.settings.default_hive_type = hive_type;
        self.dirty.insert(StoreKey::Settings);
    }

    pub fn set_weight_unit(&mut self, unit: WeightUnit) {
        self.settings.weight_unit = unit;
        self.dirty.insert(StoreKey::Settings);
    }

    // ── Statistics ───────────────────────────────────────────────────

    pub fn total_hives(&self) -> usize {
        self.hives.len()
    }

    pub fn total_inspections(&self) -> usize {
        self.inspections.len()
    }

    pub fn total_harvest_kg(&self) -> f64 {
        self.harvests.iter().map(|e| e.weight_kg).sum()
    }

    /// Mean overall rating across all harvests; 0 when there are none.
    pub fn average_harvest_rating(&self) -> f64 {
        if self.harvests.is_empty() {
            return 0.0;
        }
        let total: f64 = self.harvests.iter().map(HarvestEntry::overall_rating).sum();
        total / self.harvests.len() as f64
    }

    /// Share of hives whose last inspection was excellent or good, 0..=100.
    ///
    /// Hives never inspected count as not healthy; 0 when there are no hives.
    pub fn healthy_hive_percent(&self) -> f64 {
        if self.hives.is_empty() {
            return 0.0;
        }
        let healthy = self
            .hives
            .iter()
            .filter(|h| {
                self.last_inspection_for(h.id)
                    .is_some_and(|e| e.health.is_healthy())
            })
            .count();
        healthy as f64 / self.hives.len() as f64 * 100.0
    }

    /// Name of the hive with `id`, or [`UNKNOWN_HIVE_NAME`].
    pub fn hive_name_for(&self, id: HiveId) -> &str {
        self.hive(id)
            .map_or(UNKNOWN_HIVE_NAME, |hive| hive.name.as_str())
    }

    pub fn summary(&self) -> ApiarySummary {
        ApiarySummary {
            total_hives: self.total_hives(),
            total_inspections: self.total_inspections(),
            total_harvests: self.harvests.len(),
            total_harvest_kg: self.total_harvest_kg(),
            average_harvest_rating: self.average_harvest_rating(),
            healthy_hive_percent: self.healthy_hive_percent(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::harvest::HoneyType;
    use crate::hive::{QueenMarkerColor, QueenStatus};
    use crate::inspection::{BeeMood, BroodPattern, HiveHealth};
    use crate::kv::MemoryKv;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 15, 10, 0, 0)
            .single()
            .expect("valid fixture date")
    }

    fn empty() -> Apiary<MemoryKv> {
        Apiary::open_with(MemoryKv::new(), now(), SeedPolicy::Never)
    }

    fn hive(name: &str) -> Hive {
        Hive::new(name, HiveType::Langstroth, now())
    }

    fn inspection(hive_id: HiveId, health: HiveHealth) -> InspectionEntry {
        let mut entry = InspectionEntry::new(hive_id, now());
        entry.health = health;
        entry
    }

    fn harvest(hive_id: HiveId, kg: f64, ratings: (u8, u8, u8)) -> HarvestEntry {
        let mut entry = HarvestEntry::new(hive_id, now());
        entry.weight_kg = kg;
        (entry.taste_rating, entry.clarity_rating, entry.aroma_rating) = ratings;
        entry
    }

    #[test]
    fn hives_are_newest_first() {
        let mut apiary = empty();
        for name in ["a", "b", "c"] {
            apiary.add_hive(hive(name));
        }
        let names: Vec<&str> = apiary.hives().iter().map(|h| h.name.as_str()).collect();
        assert_eq!(names, vec!["c", "b", "a"]);
    }

    #[test]
    fn delete_hive_cascades_to_exactly_its_records() {
        let mut apiary = empty();
        let doomed = hive("doomed");
        let kept = hive("kept");
        let (doomed_id, kept_id) = (doomed.id, kept.id);
        apiary.add_hive(doomed);
        apiary.add_hive(kept);

        apiary.add_inspection(inspection(doomed_id, HiveHealth::Good));
        apiary.add_inspection(inspection(kept_id, HiveHealth::Fair));
        apiary.add_inspection(inspection(doomed_id, HiveHealth::Poor));
        apiary.add_harvest(harvest(kept_id, 3.0, (3, 3, 3)));
        apiary.add_harvest(harvest(doomed_id, 5.0, (4, 4, 4)));

        let kept_inspections: Vec<InspectionEntry> =
            apiary.inspections_for(kept_id).cloned().collect();
        let kept_harvests: Vec<HarvestEntry> = apiary.harvests_for(kept_id).cloned().collect();

        let removal = apiary.delete_hive(doomed_id).expect("hive should exist");
        assert_eq!(removal.hive.name, "doomed");
        assert_eq!(removal.inspections_removed, 2);
        assert_eq!(removal.harvests_removed, 1);

        assert_eq!(apiary.hives().len(), 1);
        assert_eq!(apiary.inspections(), kept_inspections.as_slice());
        assert_eq!(apiary.harvests(), kept_harvests.as_slice());
    }

    #[test]
    fn delete_unknown_hive_is_a_no_op() {
        let mut apiary = empty();
        apiary.add_hive(hive("only"));
        apiary.persist().expect("memory persist");

        assert!(apiary.delete_hive(HiveId::new()).is_none());
        assert!(!apiary.is_dirty());
        assert_eq!(apiary.total_hives(), 1);
    }

    #[test]
    fn delete_inspection_and_harvest_do_not_cascade() {
        let mut apiary = empty();
        let h = hive("h");
        let id = h.id;
        apiary.add_hive(h);
        let entry = inspection(id, HiveHealth::Good);
        let entry_id = entry.id;
        apiary.add_inspection(entry);
        let crop = harvest(id, 2.0, (3, 3, 3));
        let crop_id = crop.id;
        apiary.add_harvest(crop);

        assert!(apiary.delete_inspection(entry_id).is_some());
        assert!(apiary.delete_inspection(entry_id).is_none());
        assert!(apiary.delete_harvest(crop_id).is_some());
        assert_eq!(apiary.total_hives(), 1);
        assert_eq!(apiary.total_inspections(), 0);
        assert!(apiary.harvests().is_empty());
    }

    #[test]
    fn last_inspection_follows_insertion_not_date() {
        let mut apiary = empty();
        let h = hive("h");
        let id = h.id;
        apiary.add_hive(h);

        apiary.add_inspection(inspection(id, HiveHealth::Good));
        let mut backdated = inspection(id, HiveHealth::Critical);
        backdated.date = now() - Duration::days(30);
        apiary.add_inspection(backdated);

        let last = apiary.last_inspection_for(id).expect("has inspections");
        assert_eq!(last.health, HiveHealth::Critical);
        assert!(last.date < apiary.inspections()[1].date);
        assert_eq!(apiary.healthy_hive_percent(), 0.0);
    }

    #[test]
    fn average_rating_is_zero_without_harvests() {
        assert_eq!(empty().average_harvest_rating(), 0.0);
    }

    #[test]
    fn average_rating_is_mean_of_overall_ratings() {
        let mut apiary = empty();
        let id = HiveId::new();
        apiary.add_harvest(harvest(id, 1.0, (5, 4, 5)));
        assert!((apiary.average_harvest_rating() - 14.0 / 3.0).abs() < 1e-12);

        apiary.add_harvest(harvest(id, 1.0, (1, 1, 1)));
        assert!((apiary.average_harvest_rating() - (14.0 / 3.0 + 1.0) / 2.0).abs() < 1e-12);
    }

    #[test]
    fn healthy_percent_counts_last_inspection_only() {
        let mut apiary = empty();
        assert_eq!(apiary.healthy_hive_percent(), 0.0);

        let good = hive("good");
        let never = hive("never inspected");
        let good_id = good.id;
        apiary.add_hive(good);
        apiary.add_hive(never);
        apiary.add_inspection(inspection(good_id, HiveHealth::Good));
        assert_eq!(apiary.healthy_hive_percent(), 50.0);

        apiary.add_inspection(inspection(good_id, HiveHealth::Poor));
        assert_eq!(apiary.healthy_hive_percent(), 0.0);
    }

    #[test]
    fn total_harvest_weight_sums_every_hive() {
        let mut apiary = empty();
        let (a, b) = (HiveId::new(), HiveId::new());
        apiary.add_harvest(harvest(a, 2.5, (3, 3, 3)));
        apiary.add_harvest(harvest(b, 4.0, (3, 3, 3)));
        apiary.add_harvest(harvest(a, 1.5, (3, 3, 3)));
        assert_eq!(apiary.total_harvest_kg(), 8.0);
        assert_eq!(apiary.harvested_kg_for(a), 4.0);
    }

    #[test]
    fn unknown_hive_name_is_sentinel() {
        let apiary = empty();
        assert_eq!(apiary.hive_name_for(HiveId::new()), "Unknown");
    }

    #[test]
    fn open_seeds_fixed_samples() {
        let apiary = Apiary::open(MemoryKv::new(), now());

        let names: Vec<&str> = apiary.hives().iter().map(|h| h.name.as_str()).collect();
        assert_eq!(names, vec!["Sunflower", "Meadow"]);
        let sunflower = &apiary.hives()[0];
        assert_eq!(sunflower.hive_type, HiveType::Langstroth);
        assert_eq!(sunflower.queen_status, QueenStatus::Laying);
        assert_eq!(sunflower.queen_marker_color, QueenMarkerColor::Blue);
        let meadow = &apiary.hives()[1];
        assert_eq!(meadow.hive_type, HiveType::Flow);
        assert_eq!(meadow.queen_status, QueenStatus::Present);
        assert_eq!(meadow.queen_marker_color, QueenMarkerColor::Yellow);

        assert_eq!(apiary.inspections().len(), 1);
        let first = &apiary.inspections()[0];
        assert_eq!(first.hive_id, sunflower.id);
        assert_eq!(first.brood_pattern, BroodPattern::Excellent);
        assert_eq!(first.mood, BeeMood::Calm);
        assert_eq!((first.honey_stores, first.pollen_stores, first.mite_count), (4, 3, 2));
        assert_eq!(first.health, HiveHealth::Excellent);

        assert_eq!(apiary.harvests().len(), 1);
        let crop = &apiary.harvests()[0];
        assert_eq!(crop.hive_id, sunflower.id);
        assert_eq!(crop.weight_kg, 12.5);
        assert_eq!(crop.honey_type, HoneyType::Wildflower);
        assert_eq!(
            (crop.taste_rating, crop.clarity_rating, crop.aroma_rating),
            (5, 4, 5)
        );

        let dirty: Vec<StoreKey> = apiary.dirty_keys().collect();
        assert_eq!(
            dirty,
            vec![StoreKey::Hives, StoreKey::Inspections, StoreKey::Harvests]
        );
    }

    #[test]
    fn seeding_is_persisted_once() {
        let mut apiary = Apiary::open(MemoryKv::new(), now());
        apiary.persist().expect("memory persist");
        let kv = apiary.into_backend();
        assert_eq!(kv.len(), 3);

        let reopened = Apiary::open(kv, now() + Duration::days(1));
        assert!(!reopened.is_dirty());
        assert_eq!(reopened.total_hives(), 2);
        assert_eq!(reopened.total_inspections(), 1);
    }

    #[test]
    fn when_absent_keeps_user_emptied_collections_empty() {
        let mut apiary = Apiary::open_with(MemoryKv::new(), now(), SeedPolicy::WhenAbsent);
        let ids: Vec<InspectionId> = apiary.inspections().iter().map(|e| e.id).collect();
        for id in ids {
            apiary.delete_inspection(id);
        }
        apiary.persist().expect("memory persist");

        let reopened =
            Apiary::open_with(apiary.into_backend(), now(), SeedPolicy::WhenAbsent);
        assert_eq!(reopened.total_inspections(), 0);
        assert_eq!(reopened.total_hives(), 2);

        let reseeded = Apiary::open(reopened.into_backend(), now());
        assert_eq!(reseeded.total_inspections(), 1);
    }

    #[test]
    fn persist_writes_only_dirty_keys() {
        let mut apiary = empty();
        apiary.set_weight_unit(WeightUnit::Lbs);
        apiary.persist().expect("memory persist");
        assert!(!apiary.is_dirty());

        let kv = apiary.into_backend();
        assert_eq!(kv.len(), 1);
        assert!(kv.get("settings").expect("memory get").is_some());
        assert!(kv.get("hives").expect("memory get").is_none());
    }

    #[test]
    fn round_trip_preserves_order_and_fields() {
        let mut apiary = empty();
        let mut first = hive("first");
        first.location = "Orchard".to_string();
        first.notes = "gentle".to_string();
        let first_id = first.id;
        apiary.add_hive(first);
        apiary.add_hive(hive("second"));

        let mut entry = inspection(first_id, HiveHealth::Fair);
        entry.queen_cells_seen = true;
        entry.mite_count = 7;
        apiary.add_inspection(entry);
        apiary.add_harvest(harvest(first_id, 0.75, (2, 5, 4)));
        apiary.set_default_hive_type(HiveType::TopBar);
        apiary.set_onboarding_completed(true);
        apiary.persist().expect("memory persist");

        let hives = apiary.hives().to_vec();
        let inspections = apiary.inspections().to_vec();
        let harvests = apiary.harvests().to_vec();
        let settings = apiary.settings().clone();

        let reloaded = Apiary::open_with(apiary.into_backend(), now(), SeedPolicy::Never);
        assert_eq!(reloaded.hives(), hives.as_slice());
        assert_eq!(reloaded.inspections(), inspections.as_slice());
        assert_eq!(reloaded.harvests(), harvests.as_slice());
        assert_eq!(reloaded.settings(), &settings);
    }

    #[test]
    fn empty_collections_round_trip_as_empty() {
        let mut apiary = Apiary::open(MemoryKv::new(), now());
        let hive_ids: Vec<HiveId> = apiary.hives().iter().map(|h| h.id).collect();
        for id in hive_ids {
            apiary.delete_hive(id);
        }
        assert!(apiary.inspections().is_empty());
        assert!(apiary.harvests().is_empty());
        apiary.persist().expect("memory persist");

        let reloaded = Apiary::open_with(apiary.into_backend(), now(), SeedPolicy::Never);
        assert!(reloaded.hives().is_empty());
        assert!(reloaded.inspections().is_empty());
        assert!(reloaded.harvests().is_empty());
    }

    #[test]
    fn summary_bundles_statistics() {
        let apiary = Apiary::open(MemoryKv::new(), now());
        let summary = apiary.summary();
        assert_eq!(summary.total_hives, 2);
        assert_eq!(summary.total_inspections, 1);
        assert_eq!(summary.total_harvests, 1);
        assert_eq!(summary.total_harvest_kg, 12.5);
        assert!((summary.average_harvest_rating - 14.0 / 3.0).abs() < 1e-12);
        assert_eq!(summary.healthy_hive_percent, 50.0);
    }
}
