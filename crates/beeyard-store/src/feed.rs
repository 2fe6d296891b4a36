//! Feed-mix calculator. Pure: no dependency on stored state.

use serde::Serialize;

keyword_enum! {
    /// Supplemental feed recipes.
    #[derive(Default)]
    pub enum FeedType {
        /// 1:1 sugar to water by weight/volume.
        #[default]
        LightSyrup => "light-syrup",
        /// 2:1 sugar to water.
        HeavySyrup => "heavy-syrup",
        Fondant => "fondant",
        PollenPatty => "pollen-patty",
    }
}

impl FeedType {
    /// Mixing ratio, as printed in the feeding guide.
    pub fn ratio(&self) -> &'static str {
        match self {
            FeedType::LightSyrup => "1 kg sugar : 1 L water",
            FeedType::HeavySyrup => "2 kg sugar : 1 L water",
            FeedType::Fondant => "Solid sugar block",
            FeedType::PollenPatty => "Pollen substitute + sugar",
        }
    }

    /// When in the beekeeping year this feed is used.
    pub fn season_of_use(&self) -> &'static str {
        match self {
            FeedType::LightSyrup => "Spring stimulation",
            FeedType::HeavySyrup => "Fall winter prep",
            FeedType::Fondant => "Emergency winter feed",
            FeedType::PollenPatty => "Early spring protein",
        }
    }
}

/// Result of a feed-mix calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FeedMix {
    pub water_litres: f64,
    pub total_kg: f64,
}

/// Water to add and resulting total mass for `sugar_kg` of sugar.
///
/// Fondant and pollen patties are not diluted.
pub fn feed_mix(sugar_kg: f64, feed_type: FeedType) -> FeedMix {
    let (water_litres, total_kg) = match feed_type {
        FeedType::LightSyrup => (sugar_kg, sugar_kg * 2.0),
        FeedType::HeavySyrup => (sugar_kg / 2.0, sugar_kg * 1.5),
        FeedType::Fondant | FeedType::PollenPatty => (0.0, sugar_kg),
    };
    FeedMix {
        water_litres,
        total_kg,
    }
}
