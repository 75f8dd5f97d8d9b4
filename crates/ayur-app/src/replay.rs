//! Drive a session from a prepared answer set, step by step, the same way
//! a practitioner filling in the form would.

use ayur_core::models::answer::{AnswerSet, AnswerValue};
use ayur_core::models::assessment::Assessment;
use ayur_instruments::schema::Step;

use crate::app::App;
use crate::error::AppError;

/// Fill every step from `answers`, advance through the questionnaire and
/// submit. Fields without an answer are left blank, so missing required
/// answers surface as the usual validation error.
pub async fn fill_and_submit<'a>(app: &'a mut App, answers: &AnswerSet) -> Result<&'a Assessment, AppError> {
    let steps: Vec<Step> = app
        .session()
        .ok_or(AppError::NoSession)?
        .instrument()
        .steps()
        .to_vec();
    let last = steps.len();

    for (index, step) in steps.iter().enumerate() {
        for field in step.fields {
            match answers.get(field.name) {
                Some(AnswerValue::Single(value)) => app.set_value(field.name, value)?,
                Some(AnswerValue::Multi(values)) => {
                    for value in values {
                        app.set_checked(field.name, value, true)?;
                    }
                }
                None => {}
            }
        }
        if index + 1 < last {
            app.next_step()?;
        }
    }

    app.submit().await
}
