use crate::support::{self, DiskApiary, print_json, yes_no};
use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub struct InitOutcome {
    pub data_dir: PathBuf,
    pub created_data_dir: bool,
    pub seeded: Vec<&'static str>,
    pub apiary: DiskApiary,
}

/// Create the data directory, seed missing collections, mark onboarding
/// complete, and write everything out.
pub fn init_layout(data_dir: &Path) -> Result<InitOutcome, String> {
    let mut created_data_dir = false;
    if !data_dir.exists() {
        fs::create_dir_all(data_dir).map_err(|e| {
            format!("failed to create data dir {}: {e}", data_dir.display())
        })?;
        created_data_dir = true;
    }
    if !data_dir.is_dir() {
        return Err(format!(
            "data dir is not a directory: {}",
            data_dir.display()
        ));
    }

    let mut apiary = support::open_apiary(data_dir)?;
    let seeded = apiary.dirty_keys().map(|key| key.as_str()).collect();
    apiary.set_onboarding_completed(true);
    apiary
        .persist()
        .map_err(|e| format!("failed to save {}: {e}", data_dir.display()))?;

    Ok(InitOutcome {
        data_dir: data_dir.to_path_buf(),
        created_data_dir,
        seeded,
        apiary,
    })
}

pub fn run(data_dir: &Path, json_output: bool) {
    let outcome = init_layout(data_dir).unwrap_or_else(|e| support::fail(e));
    let summary = outcome.apiary.summary();

    if json_output {
        print_json(&json!({
            "action": "init",
            "dataDir": outcome.data_dir.display().to_string(),
            "createdDataDir": outcome.created_data_dir,
            "seeded": outcome.seeded,
            "hives": summary.total_hives,
            "inspections": summary.total_inspections,
            "harvests": summary.total_harvests,
        }));
        return;
    }

    println!("beeyard init");
    println!();
    println!("  data dir: {}", outcome.data_dir.display());
    println!("  created data dir: {}", yes_no(outcome.created_data_dir));
    if outcome.seeded.is_empty() {
        println!("  seeded: none");
    } else {
        println!("  seeded: {}", outcome.seeded.join(", "));
    }
    println!(
        "  records: {} hives, {} inspections, {} harvests",
        summary.total_hives, summary.total_inspections, summary.total_harvests
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use beeyard_store::{JsonDirKv, KvStore};
    use std::time::{SystemTime, UNIX_EPOCH};

    fn temp_dir(prefix: &str) -> PathBuf {
        let unique = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock should be after unix epoch")
            .as_nanos();
        std::env::temp_dir().join(format!(
            "beeyard-cli-init-{prefix}-{}-{unique}",
            std::process::id()
        ))
    }

    #[test]
    fn init_layout_creates_and_seeds_data_dir() {
        let root = temp_dir("create");
        let outcome = init_layout(&root).expect("init should succeed");
        assert!(outcome.created_data_dir);
        assert_eq!(outcome.seeded, vec!["hives", "inspections", "harvests"]);
        assert!(outcome.apiary.settings().has_completed_onboarding);

        let kv = JsonDirKv::new(&root);
        for key in ["hives", "inspections", "harvests", "settings"] {
            assert!(
                kv.get(key).expect("read back").is_some(),
                "{key}.json should exist"
            );
        }
        let _ = fs::remove_dir_all(&root);
    }

    #[test]
    fn init_layout_reports_file_in_place_of_dir() {
        let root = temp_dir("file");
        fs::write(&root, "not a directory").expect("fixture file");
        let err = init_layout(&root).expect_err("a file is not a data dir");
        assert!(err.contains("data dir is not a directory"));
        let _ = fs::remove_file(&root);
    }

    #[test]
    fn init_layout_is_idempotent() {
        let root = temp_dir("twice");
        init_layout(&root).expect("first init should succeed");
        let again = init_layout(&root).expect("second init should succeed");
        assert!(!again.created_data_dir);
        assert!(again.seeded.is_empty());
        assert_eq!(again.apiary.total_hives(), 2);
        let _ = fs::remove_dir_all(&root);
    }
}
