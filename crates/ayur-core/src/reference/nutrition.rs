use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Daily intake targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NutritionTargets {
    pub calories: u32,
    pub protein_g: u32,
    pub carbs_g: u32,
    pub fat_g: u32,
}

const FEMALE_BASE: NutritionTargets = NutritionTargets {
    calories: 1850,
    protein_g: 140,
    carbs_g: 250,
    fat_g: 60,
};

const DEFAULT_BASE: NutritionTargets = NutritionTargets {
    calories: 2200,
    protein_g: 165,
    carbs_g: 300,
    fat_g: 75,
};

/// Assumed when the patient gave no activity level.
const DEFAULT_ACTIVITY: &str = "moderate";

/// Activity multiplier in tenths, keyed by the normalized activity level.
fn activity_multiplier_tenths(activity_level: Option<&str>) -> u32 {
    let key = activity_level
        .map(|a| a.trim().to_lowercase().replace(' ', "_"))
        .filter(|a| !a.is_empty())
        .unwrap_or_else(|| DEFAULT_ACTIVITY.to_string());
    match key.as_str() {
        "sedentary" => 9,
        "light" => 10,
        "moderate" => 11,
        "active" => 12,
        "very_active" => 13,
        _ => 10,
    }
}

/// Scale by tenths, rounding half away from zero.
fn scale(value: u32, tenths: u32) -> u32 {
    (value * tenths + 5) / 10
}

/// Targets for a patient's gender and activity level. Anything other than
/// "female" uses the default base. A missing activity level counts as
/// moderate; an unrecognized one leaves the base unscaled.
pub fn nutrition_targets(gender: Option<&str>, activity_level: Option<&str>) -> NutritionTargets {
    let base = match gender {
        Some(g) if g.trim().eq_ignore_ascii_case("female") => FEMALE_BASE,
        _ => DEFAULT_BASE,
    };
    let tenths = activity_multiplier_tenths(activity_level);

    NutritionTargets {
        calories: scale(base.calories, tenths),
        protein_g: scale(base.protein_g, tenths),
        carbs_g: scale(base.carbs_g, tenths),
        fat_g: scale(base.fat_g, tenths),
    }
}
