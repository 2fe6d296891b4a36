//! User settings: a single always-present record.

use serde::{Deserialize, Serialize};

use crate::hive::HiveType;

/// Pounds per kilogram.
pub const LBS_PER_KG: f64 = 2.204_62;

keyword_enum! {
    /// Unit used when displaying weights. Stored weights stay in kilograms.
    #[derive(Default)]
    pub enum WeightUnit {
        #[default]
        Kg => "kg",
        Lbs => "lbs",
    }
}

impl WeightUnit {
    /// Convert a stored kilogram value into this unit for display.
    pub fn convert_kg(&self, kg: f64) -> f64 {
        match self {
            WeightUnit::Kg => kg,
            WeightUnit::Lbs => kg * LBS_PER_KG,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub has_completed_onboarding: bool,
    #[serde(default)]
    pub default_hive_type: HiveType,
    #[serde(default)]
    pub weight_unit: WeightUnit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_yields_defaults() {
        let settings: Settings = serde_json::from_str("{}").expect("empty settings should parse");
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.weight_unit, WeightUnit::Kg);
        assert_eq!(settings.default_hive_type, HiveType::Langstroth);
    }

    #[test]
    fn settings_serialize_as_keywords() {
        insta::assert_json_snapshot!(Settings::default(), @r#"
        {
          "has_completed_onboarding": false,
          "default_hive_type": "langstroth",
          "weight_unit": "kg"
        }
        "#);
    }

    #[test]
    fn lbs_conversion_is_display_only() {
        assert_eq!(WeightUnit::Kg.convert_kg(12.5), 12.5);
        assert!((WeightUnit::Lbs.convert_kg(10.0) - 22.0462).abs() < 1e-9);
    }
}
