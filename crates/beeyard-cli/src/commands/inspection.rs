use crate::cli::{InspectionAddArgs, InspectionCommands};
use crate::present::{Label, pips};
use crate::support::{self, DiskApiary, print_json, short_date, yes_no};
use beeyard_store::{HiveId, InspectionEntry, MITE_ALERT_THRESHOLD};
use chrono::Utc;
use serde_json::json;
use std::path::Path;

pub fn run(command: InspectionCommands, data_dir: &Path) {
    let mut apiary = support::open_apiary_or_exit(data_dir);
    match command {
        InspectionCommands::Add(args) => run_add(&mut apiary, args),

        InspectionCommands::List { hive, json } => run_list(&apiary, hive, json),

        InspectionCommands::Delete { id, json } => {
            let entry = apiary
                .delete_inspection(id)
                .unwrap_or_else(|| support::fail(format!("inspection not found: {id}")));
            support::persist_or_exit(&mut apiary);

            if json {
                print_json(&json!({
                    "action": "inspection.delete",
                    "inspectionId": id,
                    "hiveId": entry.hive_id,
                }));
            } else {
                println!(
                    "beeyard inspection delete\n  Deleted: {} ({}, {})",
                    id,
                    apiary.hive_name_for(entry.hive_id),
                    short_date(entry.date)
                );
            }
        }
    }
}

fn run_add(apiary: &mut DiskApiary, args: InspectionAddArgs) {
    if apiary.hive(args.hive_id).is_none() {
        support::fail(format!("hive not found: {}", args.hive_id));
    }

    let mut entry = InspectionEntry::new(args.hive_id, args.date.unwrap_or_else(Utc::now));
    entry.queen_seen = args.queen_seen;
    entry.eggs_present = args.eggs;
    entry.larvae_present = args.larvae;
    entry.queen_cells_seen = args.queen_cells;
    entry.brood_pattern = args.brood;
    entry.honey_stores = args.honey_stores;
    entry.pollen_stores = args.pollen_stores;
    entry.mood = args.mood;
    entry.mite_count = args.mites;
    entry.health = args.health;
    entry.notes = args.notes;

    apiary.add_inspection(entry.clone());
    support::persist_or_exit(apiary);

    if args.json {
        print_json(&json!({
            "action": "inspection.add",
            "inspection": entry,
            "miteAlert": entry.mite_alert(),
        }));
        return;
    }

    println!(
        "beeyard inspection add\n  Added: {} for {}\n  ID: {}",
        short_date(entry.date),
        apiary.hive_name_for(entry.hive_id),
        entry.id
    );
    if entry.mite_alert() {
        println!(
            "  warning: mite count {} is above {MITE_ALERT_THRESHOLD}; consider treatment",
            entry.mite_count
        );
    }
}

fn run_list(apiary: &DiskApiary, hive: Option<HiveId>, json_output: bool) {
    if let Some(id) = hive
        && apiary.hive(id).is_none()
    {
        support::fail(format!("hive not found: {id}"));
    }
    let entries: Vec<&InspectionEntry> = apiary
        .inspections()
        .iter()
        .filter(|e| hive.is_none_or(|id| e.hive_id == id))
        .collect();

    if json_output {
        let rows: Vec<_> = entries
            .iter()
            .map(|e| {
                json!({
                    "inspection": e,
                    "hiveName": apiary.hive_name_for(e.hive_id),
                    "miteAlert": e.mite_alert(),
                })
            })
            .collect();
        print_json(&json!({
            "action": "inspection.list",
            "count": rows.len(),
            "inspections": rows,
        }));
        return;
    }

    println!("beeyard inspection list ({})", entries.len());
    if entries.is_empty() {
        println!("  (no inspections)");
        return;
    }
    for e in entries {
        println!(
            "  {}  {} {} | {}",
            e.id,
            short_date(e.date),
            apiary.hive_name_for(e.hive_id),
            e.health.label()
        );
        println!(
            "    queen seen {} | eggs {} | larvae {} | queen cells {}",
            yes_no(e.queen_seen),
            yes_no(e.eggs_present),
            yes_no(e.larvae_present),
            yes_no(e.queen_cells_seen)
        );
        println!(
            "    brood {} | honey {} | pollen {} | mood {} | mites {}{}",
            e.brood_pattern.label(),
            pips(e.honey_stores),
            pips(e.pollen_stores),
            e.mood.label(),
            e.mite_count,
            if e.mite_alert() { " (alert)" } else { "" }
        );
        if !e.notes.is_empty() {
            println!("    notes: {}", e.notes);
        }
    }
}
