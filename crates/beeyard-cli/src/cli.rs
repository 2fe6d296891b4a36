use beeyard_store::{
    BeeMood, BroodPattern, FeedType, HarvestId, HiveHealth, HiveId, HiveType, HoneyType,
    InspectionId, QueenMarkerColor, QueenStatus, Season, WeightUnit,
};
use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::support::{parse_date, parse_non_negative};

#[derive(Parser)]
#[command(
    name = "beeyard",
    about = "Bee Yard: hive records, inspection logs, harvests, and beekeeping reference",
    version
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Clone, Debug)]
pub struct GlobalOpts {
    /// Directory holding the apiary JSON files (overrides the config file)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Path to a TOML config file [default: beeyard.toml, if present]
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the data directory, write sample records, finish onboarding
    Init {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage hives
    Hive {
        #[command(subcommand)]
        command: HiveCommands,
    },

    /// Log and review hive inspections
    Inspection {
        #[command(subcommand)]
        command: InspectionCommands,
    },

    /// Log and review honey harvests
    Harvest {
        #[command(subcommand)]
        command: HarvestCommands,
    },

    /// Apiary summary statistics
    Stats {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Calculate water and total mass for a feed mix
    Feed {
        /// Sugar mass in kilograms
        #[arg(value_parser = parse_non_negative)]
        sugar_kg: f64,

        /// Feed type: light-syrup, heavy-syrup, fondant, pollen-patty
        #[arg(long = "type", default_value = "light-syrup")]
        feed_type: FeedType,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Seasonal task checklist
    Season {
        /// Season: spring, summer, fall, winter [default: current season]
        season: Option<Season>,

        /// Show all four seasons
        #[arg(long, conflicts_with = "season")]
        all: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show or change settings
    Settings {
        #[command(subcommand)]
        command: SettingsCommands,
    },
}

#[derive(Subcommand, Clone, Debug)]
pub enum HiveCommands {
    /// Add a new hive
    Add {
        /// Hive name
        name: String,

        /// Hive type: langstroth, top-bar, warre, flow [default: from settings]
        #[arg(long = "type")]
        hive_type: Option<HiveType>,

        /// Where the hive stands
        #[arg(long, default_value = "")]
        location: String,

        /// Queen status: present, absent, virgin, laying, supersedure
        #[arg(long, default_value = "present")]
        queen_status: QueenStatus,

        /// Queen marker color: white, yellow, red, green, blue, unmarked
        #[arg(long, default_value = "unmarked")]
        marker: QueenMarkerColor,

        /// Queen install date (YYYY-MM-DD or RFC 3339) [default: now]
        #[arg(long, value_parser = parse_date)]
        queen_installed: Option<DateTime<Utc>>,

        /// Free-text notes
        #[arg(long, default_value = "")]
        notes: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List hives, newest first
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show one hive with its inspections and harvests
    Show {
        /// Hive ID
        id: HiveId,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete a hive and all of its inspections and harvests
    Delete {
        /// Hive ID
        id: HiveId,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand, Clone, Debug)]
pub enum InspectionCommands {
    /// Record an inspection
    Add(InspectionAddArgs),

    /// List inspections, newest first
    List {
        /// Only inspections of this hive
        #[arg(long)]
        hive: Option<HiveId>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete one inspection
    Delete {
        /// Inspection ID
        id: InspectionId,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args, Clone, Debug)]
pub struct InspectionAddArgs {
    /// Hive ID
    pub hive_id: HiveId,

    /// Inspection date (YYYY-MM-DD or RFC 3339) [default: now]
    #[arg(long, value_parser = parse_date)]
    pub date: Option<DateTime<Utc>>,

    /// Queen was seen
    #[arg(long)]
    pub queen_seen: bool,

    /// Eggs present
    #[arg(long)]
    pub eggs: bool,

    /// Larvae present
    #[arg(long)]
    pub larvae: bool,

    /// Queen cells seen
    #[arg(long)]
    pub queen_cells: bool,

    /// Brood pattern: excellent, good, spotty, drone-laying, empty
    #[arg(long, default_value = "good")]
    pub brood: BroodPattern,

    /// Honey stores, 1 (none) to 5 (full)
    #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(u8).range(1..=5))]
    pub honey_stores: u8,

    /// Pollen stores, 1 (none) to 5 (full)
    #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(u8).range(1..=5))]
    pub pollen_stores: u8,

    /// Colony mood: calm, nervous, defensive, aggressive
    #[arg(long, default_value = "calm")]
    pub mood: BeeMood,

    /// Mite count
    #[arg(long, default_value_t = 0)]
    pub mites: u32,

    /// Health: excellent, good, fair, poor, critical
    #[arg(long, default_value = "good")]
    pub health: HiveHealth,

    /// Free-text notes
    #[arg(long, default_value = "")]
    pub notes: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Subcommand, Clone, Debug)]
pub enum HarvestCommands {
    /// Record a harvest
    Add(HarvestAddArgs),

    /// List harvests, newest first
    List {
        /// Only harvests from this hive
        #[arg(long)]
        hive: Option<HiveId>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete one harvest
    Delete {
        /// Harvest ID
        id: HarvestId,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args, Clone, Debug)]
pub struct HarvestAddArgs {
    /// Hive ID
    pub hive_id: HiveId,

    /// Honey weight in kilograms
    #[arg(long, value_parser = parse_non_negative)]
    pub weight: f64,

    /// Harvest date (YYYY-MM-DD or RFC 3339) [default: now]
    #[arg(long, value_parser = parse_date)]
    pub date: Option<DateTime<Utc>>,

    /// Honey type: wildflower, clover, acacia, linden, buckwheat, manuka, mixed
    #[arg(long, default_value = "wildflower")]
    pub honey_type: HoneyType,

    /// Taste rating, 1 to 5
    #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(u8).range(1..=5))]
    pub taste: u8,

    /// Clarity rating, 1 to 5
    #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(u8).range(1..=5))]
    pub clarity: u8,

    /// Aroma rating, 1 to 5
    #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(u8).range(1..=5))]
    pub aroma: u8,

    /// Free-text notes
    #[arg(long, default_value = "")]
    pub notes: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Subcommand, Clone, Debug)]
pub enum SettingsCommands {
    /// Print current settings
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Change one or more settings
    Set {
        /// Default type for new hives
        #[arg(long)]
        default_hive_type: Option<HiveType>,

        /// Weight display unit: kg or lbs
        #[arg(long)]
        weight_unit: Option<WeightUnit>,

        /// Mark onboarding as completed (true/false)
        #[arg(long)]
        onboarding_completed: Option<bool>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
