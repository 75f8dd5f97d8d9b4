use serde::Serialize;
use tracing::info;

use ayur_core::models::assessment::Assessment;
use ayur_core::models::dosha::Dosha;
use ayur_core::reference::{DoshaProfile, profile};

use crate::DISCLAIMER;
use crate::error::ExportError;
use crate::render::render_template;

const TEMPLATE_NAME: &str = "diet_plan.txt";
const TEMPLATE: &str = include_str!("templates/diet_plan.txt");

/// Name shown when the assessment has no patient name.
pub const DEFAULT_PATIENT_NAME: &str = "Patient";

#[derive(Serialize)]
struct DietPlanContext<'a> {
    patient_name: &'a str,
    practitioner: &'a str,
    dosha: Dosha,
    confidence: u8,
    date: jiff::civil::Date,
    profile: &'static DoshaProfile,
    disclaimer: &'static str,
}

pub(crate) fn patient_name(assessment: &Assessment) -> &str {
    assessment
        .patient_name
        .as_deref()
        .filter(|n| !n.trim().is_empty())
        .unwrap_or(DEFAULT_PATIENT_NAME)
}

/// Render the downloadable diet plan for an assessment's dominant dosha.
pub fn render_diet_plan(assessment: &Assessment, practitioner: &str) -> Result<String, ExportError> {
    let dosha = assessment.result.dominant;
    let context = DietPlanContext {
        patient_name: patient_name(assessment),
        practitioner,
        dosha,
        confidence: assessment.result.confidence,
        date: assessment.date_administered,
        profile: profile(dosha),
        disclaimer: DISCLAIMER,
    };

    let text = render_template(TEMPLATE_NAME, TEMPLATE, &context)?;
    info!(assessment_id = %assessment.id, %dosha, bytes = text.len(), "diet plan rendered");
    Ok(text)
}

/// File name for a downloaded diet plan, e.g. `Asha Rao_Diet_Plan.txt`.
pub fn diet_plan_filename(assessment: &Assessment) -> String {
    format!("{}_Diet_Plan.txt", patient_name(assessment))
}
