use crate::present::Label;
use crate::support::print_json;
use beeyard_store::{FeedType, feed_mix};
use serde_json::json;

const SEASONAL_FEEDING: [&str; 4] = [
    "Spring: 1:1 syrup stimulates brood rearing and comb building",
    "Summer: generally no feeding needed during nectar flow",
    "Fall: 2:1 syrup builds winter stores. Target 18-27 kg total",
    "Winter: fondant only for emergency. Minimal disturbance",
];

pub fn run(sugar_kg: f64, feed_type: FeedType, json_output: bool) {
    let mix = feed_mix(sugar_kg, feed_type);

    if json_output {
        let guide: Vec<_> = FeedType::ALL
            .iter()
            .map(|t| {
                json!({
                    "type": t,
                    "ratio": t.ratio(),
                    "use": t.season_of_use(),
                })
            })
            .collect();
        print_json(&json!({
            "action": "feed",
            "feedType": feed_type,
            "sugarKg": sugar_kg,
            "waterLitres": mix.water_litres,
            "totalKg": mix.total_kg,
            "guide": guide,
            "seasonal": SEASONAL_FEEDING,
        }));
        return;
    }

    println!("beeyard feed {sugar_kg} --type {feed_type}");
    println!();
    println!("  Feed: {}", feed_type.label());
    println!("  Sugar: {sugar_kg:.1} kg");
    println!("  Water: {:.1} L", mix.water_litres);
    println!("  Total: {:.1} kg", mix.total_kg);
    println!();
    println!("  Feeding guide:");
    for t in FeedType::ALL {
        println!(
            "    - {}: {} ({})",
            t.label(),
            t.ratio(),
            t.season_of_use()
        );
    }
    println!("  Through the year:");
    for line in SEASONAL_FEEDING {
        println!("    - {line}");
    }
}
