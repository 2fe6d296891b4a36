use beeyard_store::{Apiary, JsonDirKv, SeedPolicy};
use chrono::{DateTime, NaiveDate, Utc};
use serde_json::Value;
use std::path::Path;

pub type DiskApiary = Apiary<JsonDirKv>;

/// Open the apiary in `data_dir`, seeding only collections never written.
///
/// A collection the user emptied stays empty on the next run.
pub fn open_apiary(data_dir: &Path) -> Result<DiskApiary, String> {
    if data_dir.exists() && !data_dir.is_dir() {
        return Err(format!(
            "data dir is not a directory: {}",
            data_dir.display()
        ));
    }
    tracing::debug!(data_dir = %data_dir.display(), "open apiary");
    Ok(Apiary::open_with(
        JsonDirKv::new(data_dir),
        Utc::now(),
        SeedPolicy::WhenAbsent,
    ))
}

/// [`open_apiary`], then save whatever was just seeded.
pub fn open_apiary_or_exit(data_dir: &Path) -> DiskApiary {
    let mut apiary = open_apiary(data_dir).unwrap_or_else(|e| fail(e));
    if apiary.is_dirty() {
        persist_or_exit(&mut apiary);
    }
    apiary
}

pub fn persist_or_exit(apiary: &mut DiskApiary) {
    apiary.persist().unwrap_or_else(|e| {
        eprintln!(
            "error: failed to save {}: {e}",
            apiary.backend().dir().display()
        );
        std::process::exit(1);
    });
}

pub fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("error: {message}");
    std::process::exit(1);
}

pub fn print_json(payload: &Value) {
    println!(
        "{}",
        serde_json::to_string_pretty(payload).expect("json serialization")
    );
}

/// `YYYY-MM-DD` (midnight UTC) or a full RFC 3339 timestamp.
pub fn parse_date(raw: &str) -> Result<DateTime<Utc>, String> {
    let raw = raw.trim();
    if let Ok(day) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(day.and_time(chrono::NaiveTime::MIN).and_utc());
    }
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| format!("invalid date `{raw}` (expected YYYY-MM-DD or RFC 3339)"))
}

pub fn parse_non_negative(raw: &str) -> Result<f64, String> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| format!("invalid number `{raw}`"))?;
    if !value.is_finite() || value < 0.0 {
        return Err(format!("must be a non-negative number, got `{raw}`"));
    }
    Ok(value)
}

pub fn short_date(date: DateTime<Utc>) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn yes_no(ok: bool) -> &'static str {
    if ok { "yes" } else { "no" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn plain_date_is_midnight_utc() {
        let parsed = parse_date("2024-03-15").expect("date should parse");
        let expected = Utc
            .with_ymd_and_hms(2024, 3, 15, 0, 0, 0)
            .single()
            .expect("valid fixture date");
        assert_eq!(parsed, expected);
    }

    #[test]
    fn rfc3339_offsets_normalize_to_utc() {
        let parsed = parse_date("2024-03-15T10:30:00+02:00").expect("timestamp should parse");
        let expected = Utc
            .with_ymd_and_hms(2024, 3, 15, 8, 30, 0)
            .single()
            .expect("valid fixture date");
        assert_eq!(parsed, expected);
    }

    #[test]
    fn garbage_date_is_rejected() {
        let err = parse_date("15/03/2024").expect_err("slash date must fail");
        assert!(err.contains("expected YYYY-MM-DD"));
    }

    #[test]
    fn non_negative_bounds() {
        assert_eq!(parse_non_negative("0"), Ok(0.0));
        assert_eq!(parse_non_negative(" 2.5 "), Ok(2.5));
        assert!(parse_non_negative("-1").is_err());
        assert!(parse_non_negative("NaN").is_err());
        assert!(parse_non_negative("inf").is_err());
        assert!(parse_non_negative("lots").is_err());
    }
}
