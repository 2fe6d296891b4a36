use crate::cli::HiveCommands;
use crate::present::{Label, weight};
use crate::support::{self, DiskApiary, print_json, short_date};
use beeyard_store::{Hive, HiveId, WeightUnit};
use chrono::Utc;
use serde_json::json;
use std::path::Path;

pub fn run(command: HiveCommands, data_dir: &Path) {
    let mut apiary = support::open_apiary_or_exit(data_dir);
    match command {
        HiveCommands::Add {
            name,
            hive_type,
            location,
            queen_status,
            marker,
            queen_installed,
            notes,
            json,
        } => {
            let name = name.trim();
            if name.is_empty() {
                support::fail("hive name must not be empty");
            }
            let now = Utc::now();
            let hive_type = hive_type.unwrap_or(apiary.settings().default_hive_type);
            let mut hive = Hive::new(name, hive_type, now);
            hive.location = location.trim().to_string();
            hive.queen_status = queen_status;
            hive.queen_marker_color = marker;
            hive.queen_installed_at = queen_installed.unwrap_or(now);
            hive.notes = notes;

            apiary.add_hive(hive.clone());
            support::persist_or_exit(&mut apiary);

            if json {
                print_json(&json!({
                    "action": "hive.add",
                    "hive": hive,
                }));
            } else {
                println!(
                    "beeyard hive add\n  Added: {} ({})\n  ID: {}",
                    hive.name,
                    hive.hive_type.label(),
                    hive.id
                );
            }
        }

        HiveCommands::List { json } => run_list(&apiary, json),

        HiveCommands::Show { id, json } => run_show(&apiary, id, json),

        HiveCommands::Delete { id, json } => {
            let removal = apiary
                .delete_hive(id)
                .unwrap_or_else(|| support::fail(format!("hive not found: {id}")));
            support::persist_or_exit(&mut apiary);

            if json {
                print_json(&json!({
                    "action": "hive.delete",
                    "hiveId": id,
                    "name": removal.hive.name,
                    "inspectionsRemoved": removal.inspections_removed,
                    "harvestsRemoved": removal.harvests_removed,
                }));
            } else {
                println!(
                    "beeyard hive delete\n  Deleted: {} ({})\n  Inspections removed: {}\n  Harvests removed: {}",
                    removal.hive.name, id, removal.inspections_removed, removal.harvests_removed
                );
            }
        }
    }
}

fn run_list(apiary: &DiskApiary, json_output: bool) {
    let now = Utc::now();
    if json_output {
        let hives: Vec<_> = apiary
            .hives()
            .iter()
            .map(|hive| {
                json!({
                    "hive": hive,
                    "queenAgeDays": hive.queen_age_days(now),
                    "lastInspection": apiary.last_inspection_for(hive.id),
                })
            })
            .collect();
        print_json(&json!({
            "action": "hive.list",
            "count": hives.len(),
            "hives": hives,
        }));
        return;
    }

    println!("beeyard hive list ({})", apiary.total_hives());
    if apiary.hives().is_empty() {
        println!("  (no hives)");
        return;
    }
    for hive in apiary.hives() {
        let last = apiary
            .last_inspection_for(hive.id)
            .map(|e| format!("{} {}", short_date(e.date), e.health.label()))
            .unwrap_or_else(|| "never".to_string());
        println!("  {}  {}", hive.id, hive.name);
        println!(
            "    {} | queen {} ({} days) | last inspection: {}",
            hive.hive_type.label(),
            hive.queen_status.label(),
            hive.queen_age_days(now),
            last
        );
    }
}

fn run_show(apiary: &DiskApiary, id: HiveId, json_output: bool) {
    let hive = apiary
        .hive(id)
        .unwrap_or_else(|| support::fail(format!("hive not found: {id}")));
    let now = Utc::now();
    let unit: WeightUnit = apiary.settings().weight_unit;
    let harvested_kg = apiary.harvested_kg_for(id);

    if json_output {
        let inspections: Vec<_> = apiary.inspections_for(id).collect();
        let harvests: Vec<_> = apiary.harvests_for(id).collect();
        print_json(&json!({
            "action": "hive.show",
            "hive": hive,
            "queenAgeDays": hive.queen_age_days(now),
            "harvestedKg": harvested_kg,
            "inspections": inspections,
            "harvests": harvests,
        }));
        return;
    }

    println!("beeyard hive show {id}");
    println!();
    println!("  Name: {}", hive.name);
    println!("  Type: {}", hive.hive_type.label());
    if !hive.location.is_empty() {
        println!("  Location: {}", hive.location);
    }
    println!("  Queen: {}", hive.queen_status.label());
    println!("  Marker: {}", hive.queen_marker_color.label());
    println!(
        "  Queen installed: {} ({} days)",
        short_date(hive.queen_installed_at),
        hive.queen_age_days(now)
    );
    println!("  Created: {}", short_date(hive.created_at));
    if !hive.notes.is_empty() {
        println!("  Notes: {}", hive.notes);
    }
    println!("  Harvested: {}", weight(harvested_kg, unit));

    println!("  Inspections:");
    let mut any = false;
    for entry in apiary.inspections_for(id) {
        any = true;
        let alert = if entry.mite_alert() { " (mite alert)" } else { "" };
        println!(
            "    - {} {} | brood {} | mood {} | mites {}{}",
            short_date(entry.date),
            entry.health.label(),
            entry.brood_pattern.label(),
            entry.mood.label(),
            entry.mite_count,
            alert
        );
    }
    if !any {
        println!("    (none)");
    }

    println!("  Harvests:");
    let mut any = false;
    for entry in apiary.harvests_for(id) {
        any = true;
        println!(
            "    - {} {} {} | rating {:.1}",
            short_date(entry.date),
            weight(entry.weight_kg, unit),
            entry.honey_type.label(),
            entry.overall_rating()
        );
    }
    if !any {
        println!("    (none)");
    }
}
