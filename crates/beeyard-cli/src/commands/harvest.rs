use crate::cli::{HarvestAddArgs, HarvestCommands};
use crate::present::{Label, weight};
use crate::support::{self, DiskApiary, print_json, short_date};
use beeyard_store::{HarvestEntry, HiveId};
use chrono::Utc;
use serde_json::json;
use std::path::Path;

pub fn run(command: HarvestCommands, data_dir: &Path) {
    let mut apiary = support::open_apiary_or_exit(data_dir);
    match command {
        HarvestCommands::Add(args) => run_add(&mut apiary, args),

        HarvestCommands::List { hive, json } => run_list(&apiary, hive, json),

        HarvestCommands::Delete { id, json } => {
            let entry = apiary
                .delete_harvest(id)
                .unwrap_or_else(|| support::fail(format!("harvest not found: {id}")));
            support::persist_or_exit(&mut apiary);

            if json {
                print_json(&json!({
                    "action": "harvest.delete",
                    "harvestId": id,
                    "hiveId": entry.hive_id,
                    "weightKg": entry.weight_kg,
                }));
            } else {
                println!(
                    "beeyard harvest delete\n  Deleted: {} ({}, {})",
                    id,
                    apiary.hive_name_for(entry.hive_id),
                    weight(entry.weight_kg, apiary.settings().weight_unit)
                );
            }
        }
    }
}

fn run_add(apiary: &mut DiskApiary, args: HarvestAddArgs) {
    if apiary.hive(args.hive_id).is_none() {
        support::fail(format!("hive not found: {}", args.hive_id));
    }

    let mut entry = HarvestEntry::new(args.hive_id, args.date.unwrap_or_else(Utc::now));
    entry.weight_kg = args.weight;
    entry.honey_type = args.honey_type;
    entry.taste_rating = args.taste;
    entry.clarity_rating = args.clarity;
    entry.aroma_rating = args.aroma;
    entry.notes = args.notes;

    apiary.add_harvest(entry.clone());
    support::persist_or_exit(apiary);

    if args.json {
        print_json(&json!({
            "action": "harvest.add",
            "harvest": entry,
            "overallRating": entry.overall_rating(),
        }));
    } else {
        println!(
            "beeyard harvest add\n  Added: {} {} from {}\n  ID: {}",
            weight(entry.weight_kg, apiary.settings().weight_unit),
            entry.honey_type.label(),
            apiary.hive_name_for(entry.hive_id),
            entry.id
        );
    }
}

fn run_list(apiary: &DiskApiary, hive: Option<HiveId>, json_output: bool) {
    if let Some(id) = hive
        && apiary.hive(id).is_none()
    {
        support::fail(format!("hive not found: {id}"));
    }
    let entries: Vec<&HarvestEntry> = apiary
        .harvests()
        .iter()
        .filter(|e| hive.is_none_or(|id| e.hive_id == id))
        .collect();
    let total_kg: f64 = entries.iter().map(|e| e.weight_kg).sum();

    if json_output {
        let rows: Vec<_> = entries
            .iter()
            .map(|e| {
                json!({
                    "harvest": e,
                    "hiveName": apiary.hive_name_for(e.hive_id),
                    "overallRating": e.overall_rating(),
                })
            })
            .collect();
        print_json(&json!({
            "action": "harvest.list",
            "count": rows.len(),
            "totalKg": total_kg,
            "harvests": rows,
        }));
        return;
    }

    let unit = apiary.settings().weight_unit;
    println!(
        "beeyard harvest list ({}, {} total)",
        entries.len(),
        weight(total_kg, unit)
    );
    if entries.is_empty() {
        println!("  (no harvests)");
        return;
    }
    for e in entries {
        println!(
            "  {}  {} {} | {} {}",
            e.id,
            short_date(e.date),
            apiary.hive_name_for(e.hive_id),
            weight(e.weight_kg, unit),
            e.honey_type.label()
        );
        println!(
            "    taste {} | clarity {} | aroma {} | overall {:.1}",
            e.taste_rating,
            e.clarity_rating,
            e.aroma_rating,
            e.overall_rating()
        );
        if !e.notes.is_empty() {
            println!("    notes: {}", e.notes);
        }
    }
}
