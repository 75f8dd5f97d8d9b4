use serde::Serialize;
use tracing::info;

use ayur_core::models::assessment::Assessment;
use ayur_core::models::dosha::Dosha;
use ayur_core::reference::{
    DoshaProfile, NutritionTargets, Recipe, nutrition_targets, profile, recipes, shopping_items,
};

use crate::DISCLAIMER;
use crate::diet_plan::patient_name;
use crate::error::ExportError;
use crate::render::render_template;

const TEMPLATE_NAME: &str = "report.txt";
const TEMPLATE: &str = include_str!("templates/report.txt");

/// Everything needed for a full report besides the reference tables.
pub struct ReportInput<'a> {
    pub assessment: &'a Assessment,
    pub practitioner: &'a str,
    /// Collected answers already formatted by the instrument.
    pub responses: &'a str,
}

#[derive(Serialize)]
struct Share {
    dosha: Dosha,
    percent: u8,
}

#[derive(Serialize)]
struct ReportContext<'a> {
    patient_name: &'a str,
    practitioner: &'a str,
    assessment_id: String,
    date: jiff::civil::Date,
    shares: Vec<Share>,
    dominant: Dosha,
    secondary: Option<Dosha>,
    confidence: u8,
    constitution: String,
    profile: &'static DoshaProfile,
    recipes: &'static [Recipe],
    nutrition: NutritionTargets,
    shopping_list: Vec<String>,
    responses: &'a str,
    disclaimer: &'static str,
}

/// Render the full assessment report: balance, description, principles,
/// weekly plan, recipes, nutrition targets, shopping list and the collected
/// responses.
pub fn render_report(input: &ReportInput<'_>) -> Result<String, ExportError> {
    let assessment = input.assessment;
    let result = &assessment.result;
    let answers = &assessment.answers;

    let context = ReportContext {
        patient_name: patient_name(assessment),
        practitioner: input.practitioner,
        assessment_id: assessment.id.to_string(),
        date: assessment.date_administered,
        shares: Dosha::ALL
            .into_iter()
            .map(|dosha| Share {
                dosha,
                percent: result.percentages.get(dosha),
            })
            .collect(),
        dominant: result.dominant,
        secondary: result.secondary(),
        confidence: result.confidence,
        constitution: result.constitution(),
        profile: profile(result.dominant),
        recipes: recipes(result.dominant),
        nutrition: nutrition_targets(answers.single("gender"), answers.single("activity_level")),
        shopping_list: shopping_items().collect(),
        responses: input.responses,
        disclaimer: DISCLAIMER,
    };

    let text = render_template(TEMPLATE_NAME, TEMPLATE, &context)?;
    info!(assessment_id = %assessment.id, bytes = text.len(), "report rendered");
    Ok(text)
}
