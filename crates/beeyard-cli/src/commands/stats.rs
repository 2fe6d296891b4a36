use crate::present::{Label, weight};
use crate::support::{self, print_json};
use serde_json::json;
use std::path::Path;

pub fn run(data_dir: &Path, json_output: bool) {
    let apiary = support::open_apiary_or_exit(data_dir);
    let summary = apiary.summary();
    let unit = apiary.settings().weight_unit;

    if json_output {
        print_json(&json!({
            "action": "stats",
            "weightUnit": unit,
            "summary": summary,
            "totalHarvestDisplay": unit.convert_kg(summary.total_harvest_kg),
        }));
        return;
    }

    println!("beeyard stats");
    println!();
    println!("  Hives: {}", summary.total_hives);
    println!("  Inspections: {}", summary.total_inspections);
    println!("  Harvests: {}", summary.total_harvests);
    println!(
        "  Total harvest: {}",
        weight(summary.total_harvest_kg, unit)
    );
    println!(
        "  Average rating: {:.1} / 5",
        summary.average_harvest_rating
    );
    println!("  Healthy hives: {:.0}%", summary.healthy_hive_percent);
    println!("  Weight unit: {}", unit.label());
}
