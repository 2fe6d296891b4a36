//! Human-facing labels for stored keywords, and unit-aware weights.

use beeyard_store::{
    BeeMood, BroodPattern, FeedType, HiveHealth, HiveType, HoneyType, QueenMarkerColor,
    QueenStatus, Season, WeightUnit,
};

pub trait Label {
    fn label(&self) -> &'static str;
}

impl Label for HiveType {
    fn label(&self) -> &'static str {
        match self {
            HiveType::Langstroth => "Langstroth",
            HiveType::TopBar => "Top Bar",
            HiveType::Warre => "Warre",
            HiveType::Flow => "Flow Hive",
        }
    }
}

impl Label for QueenStatus {
    fn label(&self) -> &'static str {
        match self {
            QueenStatus::Present => "Present",
            QueenStatus::Absent => "Absent",
            QueenStatus::Virgin => "Virgin",
            QueenStatus::Laying => "Laying",
            QueenStatus::Supersedure => "Supersedure",
        }
    }
}

impl Label for QueenMarkerColor {
    fn label(&self) -> &'static str {
        match self {
            QueenMarkerColor::White => "White (1,6)",
            QueenMarkerColor::Yellow => "Yellow (2,7)",
            QueenMarkerColor::Red => "Red (3,8)",
            QueenMarkerColor::Green => "Green (4,9)",
            QueenMarkerColor::Blue => "Blue (5,0)",
            QueenMarkerColor::Unmarked => "Unmarked",
        }
    }
}

impl Label for BroodPattern {
    fn label(&self) -> &'static str {
        match self {
            BroodPattern::Excellent => "Excellent",
            BroodPattern::Good => "Good",
            BroodPattern::Spotty => "Spotty",
            BroodPattern::DroneLaying => "Drone Laying",
            BroodPattern::Empty => "Empty",
        }
    }
}

impl Label for BeeMood {
    fn label(&self) -> &'static str {
        match self {
            BeeMood::Calm => "Calm",
            BeeMood::Nervous => "Nervous",
            BeeMood::Defensive => "Defensive",
            BeeMood::Aggressive => "Aggressive",
        }
    }
}

impl Label for HiveHealth {
    fn label(&self) -> &'static str {
        match self {
            HiveHealth::Excellent => "Excellent",
            HiveHealth::Good => "Good",
            HiveHealth::Fair => "Fair",
            HiveHealth::Poor => "Poor",
            HiveHealth::Critical => "Critical",
        }
    }
}

impl Label for HoneyType {
    fn label(&self) -> &'static str {
        match self {
            HoneyType::Wildflower => "Wildflower",
            HoneyType::Clover => "Clover",
            HoneyType::Acacia => "Acacia",
            HoneyType::Linden => "Linden",
            HoneyType::Buckwheat => "Buckwheat",
            HoneyType::Manuka => "Manuka",
            HoneyType::Mixed => "Mixed",
        }
    }
}

impl Label for FeedType {
    fn label(&self) -> &'static str {
        match self {
            FeedType::LightSyrup => "Light Syrup (1:1)",
            FeedType::HeavySyrup => "Heavy Syrup (2:1)",
            FeedType::Fondant => "Fondant",
            FeedType::PollenPatty => "Pollen Patty",
        }
    }
}

impl Label for Season {
    fn label(&self) -> &'static str {
        match self {
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Fall => "Fall",
            Season::Winter => "Winter",
        }
    }
}

impl Label for WeightUnit {
    fn label(&self) -> &'static str {
        match self {
            WeightUnit::Kg => "kg",
            WeightUnit::Lbs => "lbs",
        }
    }
}

/// Stored kilograms rendered in the display unit, one decimal place.
pub fn weight(kg: f64, unit: WeightUnit) -> String {
    format!("{:.1} {}", unit.convert_kg(kg), unit.label())
}

/// Store level or rating as filled and empty pips, e.g. `●●●○○`.
pub fn pips(level: u8) -> String {
    let filled = usize::from(level.min(5));
    format!("{}{}", "●".repeat(filled), "○".repeat(5 - filled))
}
