//! Hive type: a tracked colony and the parent of every other record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id::HiveId;

keyword_enum! {
    /// Hive construction style.
    #[derive(Default)]
    pub enum HiveType {
        #[default]
        Langstroth => "langstroth",
        TopBar => "top-bar",
        Warre => "warre",
        Flow => "flow",
    }
}

keyword_enum! {
    /// Observed state of the colony's queen.
    #[derive(Default)]
    pub enum QueenStatus {
        #[default]
        Present => "present",
        Absent => "absent",
        Virgin => "virgin",
        Laying => "laying",
        Supersedure => "supersedure",
    }
}

keyword_enum! {
    /// International queen-marking color (year-ending digits in parentheses).
    #[derive(Default)]
    pub enum QueenMarkerColor {
        White => "white",
        Yellow => "yellow",
        Red => "red",
        Green => "green",
        Blue => "blue",
        #[default]
        Unmarked => "unmarked",
    }
}

impl QueenMarkerColor {
    /// Color convention for a queen raised in `year`; years ending 1/6 are
    /// white, 2/7 yellow, 3/8 red, 4/9 green, 5/0 blue.
    pub fn for_year(year: i32) -> Self {
        match year.rem_euclid(5) {
            1 => Self::White,
            2 => Self::Yellow,
            3 => Self::Red,
            4 => Self::Green,
            _ => Self::Blue,
        }
    }
}

/// A hive: one colony with its queen attributes.
///
/// Records are never edited in place; to change a hive, delete it and add
/// a replacement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hive {
    // ── Core identification ──
    pub id: HiveId,
    pub name: String,

    // ── Construction & siting ──
    #[serde(default, rename = "type")]
    pub hive_type: HiveType,
    #[serde(default)]
    pub location: String,

    // ── Queen ──
    #[serde(default)]
    pub queen_status: QueenStatus,
    #[serde(default)]
    pub queen_marker_color: QueenMarkerColor,
    pub queen_installed_at: DateTime<Utc>,

    // ── Timestamps ──
    pub created_at: DateTime<Utc>,

    #[serde(default)]
    pub notes: String,
}

impl Hive {
    /// A new hive with a fresh id, created and queen-installed at `now`.
    pub fn new(name: impl Into<String>, hive_type: HiveType, now: DateTime<Utc>) -> Self {
        Self {
            id: HiveId::new(),
            name: name.into(),
            hive_type,
            location: String::new(),
            queen_status: QueenStatus::default(),
            queen_marker_color: QueenMarkerColor::default(),
            queen_installed_at: now,
            created_at: now,
            notes: String::new(),
        }
    }

    /// Queen age in whole days as of `now`, floored.
    ///
    /// Not clamped: an install date after `now` gives a negative age.
    pub fn queen_age_days(&self, now: DateTime<Utc>) -> i64 {
        (now - self.queen_installed_at)
            .num_seconds()
            .div_euclid(86_400)
    }
}
