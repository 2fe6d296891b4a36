use crate::cli::SettingsCommands;
use crate::present::Label;
use crate::support::{self, print_json, yes_no};
use beeyard_store::Settings;
use serde_json::json;
use std::path::Path;

pub fn run(command: SettingsCommands, data_dir: &Path) {
    let mut apiary = support::open_apiary_or_exit(data_dir);
    match command {
        SettingsCommands::Show { json } => {
            if json {
                print_json(&json!({
                    "action": "settings.show",
                    "settings": apiary.settings(),
                }));
            } else {
                println!("beeyard settings show");
                print_settings(apiary.settings());
            }
        }

        SettingsCommands::Set {
            default_hive_type,
            weight_unit,
            onboarding_completed,
            json,
        } => {
            if default_hive_type.is_none() && weight_unit.is_none() && onboarding_completed.is_none()
            {
                support::fail(
                    "nothing to set; pass --default-hive-type, --weight-unit, or --onboarding-completed",
                );
            }
            if let Some(hive_type) = default_hive_type {
                apiary.set_default_hive_type(hive_type);
            }
            if let Some(unit) = weight_unit {
                apiary.set_weight_unit(unit);
            }
            if let Some(done) = onboarding_completed {
                apiary.set_onboarding_completed(done);
            }
            support::persist_or_exit(&mut apiary);

            if json {
                print_json(&json!({
                    "action": "settings.set",
                    "settings": apiary.settings(),
                }));
            } else {
                println!("beeyard settings set");
                print_settings(apiary.settings());
            }
        }
    }
}

fn print_settings(settings: &Settings) {
    println!(
        "  Onboarding completed: {}",
        yes_no(settings.has_completed_onboarding)
    );
    println!(
        "  Default hive type: {}",
        settings.default_hive_type.label()
    );
    println!("  Weight unit: {}", settings.weight_unit.label());
}
