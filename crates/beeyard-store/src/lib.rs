//! # beeyard-store
//!
//! Memory layer for apiary records.
//!
//! This crate provides:
//! - `Hive`, `InspectionEntry`, `HarvestEntry`, `Settings` (the records)
//! - `Apiary` (canonical in-memory state with cascade delete and statistics)
//! - `KvStore` backends (in-memory, JSON directory) for persistence
//! - Reference data: feed-mix calculator and seasonal task guide
//!
//! Presentation (labels, colors, layout) is left to callers.
//!
//! ## Data model
//!
//! ```text
//! <dir>/{hives,inspections,harvests,settings}.json
//!     ↕  open / persist
//! Apiary (newest-first collections, dirty-key tracking)
//! ```

#[macro_use]
mod keyword;

pub mod apiary;
pub mod error;
pub mod feed;
pub mod harvest;
pub mod hive;
pub mod id;
pub mod inspection;
pub mod kv;
pub mod season;
pub mod seed;
pub mod settings;

pub use apiary::{Apiary, ApiarySummary, HiveRemoval, UNKNOWN_HIVE_NAME};
pub use error::{KvError, ParseKeywordError, StoreError};
pub use feed::{FeedMix, FeedType, feed_mix};
pub use harvest::{HarvestEntry, HoneyType};
pub use hive::{Hive, HiveType, QueenMarkerColor, QueenStatus};
pub use id::{HarvestId, HiveId, InspectionId};
pub use inspection::{BeeMood, BroodPattern, HiveHealth, InspectionEntry, MITE_ALERT_THRESHOLD};
pub use kv::{JsonDirKv, KvStore, MemoryKv, StoreKey};
pub use season::{Season, seasonal_tasks};
pub use seed::SeedPolicy;
pub use settings::{LBS_PER_KG, Settings, WeightUnit};
