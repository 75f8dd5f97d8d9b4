//! ayur-instruments
//!
//! Questionnaire definitions, scoring rules, and the step-by-step intake
//! session. Pure logic, no I/O.

pub mod error;
pub mod instruments;
pub mod schema;
pub mod scoring;
pub mod session;

use ayur_core::models::answer::{AnswerSet, AnswerValue};
use ayur_core::models::classification::ClassificationResult;

use schema::{Field, Step};
use scoring::FieldRule;

/// Trait implemented by each questionnaire.
pub trait Instrument: Send + Sync {
    /// Unique identifier (e.g., "prakriti").
    fn id(&self) -> &str;

    /// Human-readable name.
    fn name(&self) -> &str;

    /// The ordered steps of the questionnaire.
    fn steps(&self) -> &[Step];

    /// Scoring rules applied by [`Instrument::classify`].
    fn rules(&self) -> &[FieldRule];

    fn step_count(&self) -> usize {
        self.steps().len()
    }

    /// Find a field by name along with the 1-based step that owns it.
    fn field(&self, name: &str) -> Option<(usize, &Field)> {
        self.steps()
            .iter()
            .enumerate()
            .find_map(|(i, step)| step.field(name).map(|f| (i + 1, f)))
    }

    fn classify(&self, answers: &AnswerSet) -> ClassificationResult {
        scoring::classify(self.rules(), answers)
    }

    /// Format collected answers as text grouped by step, for reports.
    fn to_structured_input(&self, answers: &AnswerSet) -> String {
        let mut output = format!("## {}\n\n", self.name());
        for step in self.steps() {
            output.push_str(&format!("### {}\n", step.title));
            for field in step.fields {
                match answers.get(field.name) {
                    Some(AnswerValue::Single(value)) => {
                        output.push_str(&format!("- {}: {}\n", field.label, value));
                    }
                    Some(AnswerValue::Multi(values)) => {
                        let joined = values.iter().map(String::as_str).collect::<Vec<_>>();
                        output.push_str(&format!("- {}: {}\n", field.label, joined.join(", ")));
                    }
                    None => {}
                }
            }
            output.push('\n');
        }
        output
    }
}

/// Return all registered instruments.
pub fn all_instruments() -> Vec<Box<dyn Instrument>> {
    vec![Box::new(instruments::prakriti::Prakriti)]
}

/// Look up an instrument by ID.
pub fn get_instrument(id: &str) -> Option<Box<dyn Instrument>> {
    all_instruments().into_iter().find(|i| i.id() == id)
}
