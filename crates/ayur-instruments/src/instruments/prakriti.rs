use ayur_core::models::dosha::Dosha::{self, Kapha, Pitta, Vata};

use crate::Instrument;
use crate::schema::{Field, Step};
use crate::scoring::{FieldRule, Outcome};

/// Checkbox value meaning "no medical conditions".
pub const NO_CONDITIONS: &str = "None";

pub const GENDER: &[&str] = &["Male", "Female", "Other"];
pub const ACTIVITY_LEVEL: &[&str] = &["Sedentary", "Light", "Moderate", "Active", "Very Active"];
pub const STRESS_LEVEL: &[&str] = &["Low", "Moderate", "High", "Severe"];
pub const DIET_TYPE: &[&str] = &["Vegetarian", "Non-Vegetarian", "Vegan", "Eggetarian"];
pub const YES_NO: &[&str] = &["No", "Occasionally", "Yes"];

pub const BODY_FRAME: &[&str] = &["Thin/Light", "Medium", "Heavy/Large"];
pub const SKIN_TYPE: &[&str] = &["Dry", "Normal", "Combination", "Sensitive", "Oily"];
pub const HAIR_TYPE: &[&str] = &["Dry/Thin", "Normal", "Fine/Early Graying", "Oily/Thick"];
pub const APPETITE: &[&str] = &["Variable", "Strong", "Moderate", "Low"];
pub const DIGESTION: &[&str] = &["Quick/Variable", "Strong/Fast", "Slow/Steady"];
pub const SLEEP_PATTERN: &[&str] = &["Light sleeper", "Moderate sleeper", "Heavy sleeper"];
pub const MENTAL_STATE: &[&str] = &["Anxious/Restless", "Focused/Intense", "Calm/Steady"];

pub const CONDITIONS: &[&str] = &[
    "Diabetes",
    "Hypertension",
    "Thyroid",
    "Heart Disease",
    "Arthritis",
    "Asthma",
    "Digestive Issues",
    NO_CONDITIONS,
];

static STEPS: [Step; 5] = [
    Step {
        id: "demographics",
        title: "Personal Information",
        fields: &[
            Field::text("patient_name", "Full Name").required(),
            Field::text("age", "Age").required(),
            Field::select("gender", "Gender", GENDER).required(),
            Field::text("mobile", "Mobile Number"),
            Field::text("occupation", "Occupation"),
        ],
    },
    Step {
        id: "vitals",
        title: "Vital Signs",
        fields: &[
            Field::text("height", "Height (cm)").required(),
            Field::text("weight", "Weight (kg)").required(),
            Field::text("systolic_bp", "Systolic BP"),
            Field::text("diastolic_bp", "Diastolic BP"),
            Field::text("heart_rate", "Heart Rate (bpm)"),
            Field::text("temperature", "Temperature"),
        ],
    },
    Step {
        id: "lifestyle",
        title: "Lifestyle",
        fields: &[
            Field::select("activity_level", "Activity Level", ACTIVITY_LEVEL).required(),
            Field::select("stress_level", "Stress Level", STRESS_LEVEL).required(),
            Field::select("diet_type", "Diet Type", DIET_TYPE),
            Field::select("smoking", "Smoking", YES_NO),
            Field::select("alcohol", "Alcohol", YES_NO),
        ],
    },
    Step {
        id: "ayurvedic",
        title: "Ayurvedic Profile",
        fields: &[
            Field::select("body_frame", "Body Frame", BODY_FRAME).required(),
            Field::select("skin_type", "Skin Type", SKIN_TYPE).required(),
            Field::select("hair_type", "Hair Type", HAIR_TYPE).required(),
            Field::select("appetite", "Appetite", APPETITE).required(),
            Field::select("digestion", "Digestion", DIGESTION).required(),
            Field::select("sleep_pattern", "Sleep Pattern", SLEEP_PATTERN).required(),
            Field::select("mental_state", "Mental State", MENTAL_STATE).required(),
        ],
    },
    Step {
        id: "history",
        title: "Medical History",
        fields: &[
            Field::multi_select(
                "conditions",
                "Existing Conditions",
                CONDITIONS,
                Some(NO_CONDITIONS),
            ),
            Field::text("medications", "Current Medications"),
            Field::text("allergies", "Allergies"),
        ],
    },
];

const fn award(value: &'static str, awards: &'static [(Dosha, u32)]) -> Outcome {
    Outcome { value, awards }
}

static RULES: &[FieldRule] = &[
    FieldRule {
        field: "body_frame",
        outcomes: &[
            award("Thin/Light", &[(Vata, 3)]),
            award("Medium", &[(Pitta, 3)]),
            award("Heavy/Large", &[(Kapha, 3)]),
        ],
    },
    FieldRule {
        field: "skin_type",
        outcomes: &[
            award("Dry", &[(Vata, 2)]),
            award("Oily", &[(Kapha, 2)]),
            award("Normal", &[(Pitta, 1)]),
            award("Combination", &[(Pitta, 1)]),
            award("Sensitive", &[(Pitta, 1)]),
        ],
    },
    FieldRule {
        field: "hair_type",
        outcomes: &[
            award("Dry/Thin", &[(Vata, 2)]),
            award("Oily/Thick", &[(Kapha, 2)]),
            award("Normal", &[(Pitta, 1)]),
            award("Fine/Early Graying", &[(Pitta, 1)]),
        ],
    },
    FieldRule {
        field: "appetite",
        outcomes: &[
            award("Variable", &[(Vata, 2)]),
            award("Strong", &[(Pitta, 2)]),
            award("Low", &[(Kapha, 2)]),
            award("Moderate", &[(Pitta, 1)]),
        ],
    },
    FieldRule {
        field: "digestion",
        outcomes: &[
            award("Quick/Variable", &[(Vata, 2)]),
            award("Strong/Fast", &[(Pitta, 2)]),
            award("Slow/Steady", &[(Kapha, 2)]),
        ],
    },
    FieldRule {
        field: "sleep_pattern",
        outcomes: &[
            award("Light sleeper", &[(Vata, 2)]),
            award("Heavy sleeper", &[(Kapha, 2)]),
            award("Moderate sleeper", &[(Pitta, 1)]),
        ],
    },
    FieldRule {
        field: "mental_state",
        outcomes: &[
            award("Anxious/Restless", &[(Vata, 2)]),
            award("Focused/Intense", &[(Pitta, 2)]),
            award("Calm/Steady", &[(Kapha, 2)]),
        ],
    },
    FieldRule {
        field: "activity_level",
        outcomes: &[
            award("Very Active", &[(Vata, 1)]),
            award("Sedentary", &[(Kapha, 1)]),
            award("Light", &[]),
            award("Moderate", &[]),
            award("Active", &[]),
        ],
    },
    FieldRule {
        field: "stress_level",
        outcomes: &[
            award("High", &[(Vata, 1)]),
            award("Severe", &[(Vata, 1)]),
            award("Low", &[]),
            award("Moderate", &[]),
        ],
    },
];

/// Prakriti (constitution) intake: five steps ending in a three-way dosha
/// classification.
pub struct Prakriti;

impl Instrument for Prakriti {
    fn id(&self) -> &str {
        "prakriti"
    }

    fn name(&self) -> &str {
        "Prakriti Assessment"
    }

    fn steps(&self) -> &[Step] {
        &STEPS
    }

    fn rules(&self) -> &[FieldRule] {
        RULES
    }
}
