//! Step-by-step questionnaire session.
//!
//! The session owns the live form input and the answers collected so far.
//! Answers for a step are only recorded once that step passes validation
//! on the way forward.

use std::collections::{BTreeSet, HashMap};
use std::fmt;

use tracing::{info, warn};

use ayur_core::models::answer::AnswerSet;

use crate::Instrument;
use crate::error::IntakeError;
use crate::instruments::prakriti::Prakriti;
use crate::schema::{FieldKind, Step};

/// Raw form input as currently entered, before collection.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    values: HashMap<String, String>,
    checked: HashMap<String, BTreeSet<String>>,
}

impl FormState {
    /// Current value of a single-valued field; empty when never set.
    pub fn value(&self, field: &str) -> &str {
        self.values.get(field).map(String::as_str).unwrap_or("")
    }

    /// Currently checked boxes of a multi-valued field.
    pub fn checked(&self, field: &str) -> Option<&BTreeSet<String>> {
        self.checked.get(field).filter(|set| !set.is_empty())
    }

    pub fn is_checked(&self, field: &str, value: &str) -> bool {
        self.checked
            .get(field)
            .is_some_and(|set| set.contains(value))
    }
}

pub struct IntakeSession {
    instrument: Box<dyn Instrument>,
    current: usize,
    form: FormState,
    answers: AnswerSet,
    complete: bool,
}

impl fmt::Debug for IntakeSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntakeSession")
            .field("instrument", &self.instrument.id())
            .field("current", &self.current)
            .field("answers", &self.answers)
            .field("complete", &self.complete)
            .finish()
    }
}

impl IntakeSession {
    /// A fresh session positioned at step 1.
    pub fn new(instrument: Box<dyn Instrument>) -> Self {
        Self {
            instrument,
            current: 1,
            form: FormState::default(),
            answers: AnswerSet::new(),
            complete: false,
        }
    }

    pub fn prakriti() -> Self {
        Self::new(Box::new(Prakriti))
    }

    /// Reset to step 1, discarding all input and collected answers.
    pub fn start(&mut self) {
        self.current = 1;
        self.form = FormState::default();
        self.answers = AnswerSet::new();
        self.complete = false;
        info!(instrument = self.instrument.id(), "assessment started");
    }

    pub fn instrument(&self) -> &dyn Instrument {
        self.instrument.as_ref()
    }

    /// 1-based index of the current step.
    pub fn current_step(&self) -> usize {
        self.current
    }

    pub fn step_count(&self) -> usize {
        self.instrument.step_count()
    }

    pub fn step(&self) -> &Step {
        &self.instrument.steps()[self.current - 1]
    }

    pub fn progress_percent(&self) -> u8 {
        (self.current * 100 / self.step_count()) as u8
    }

    pub fn can_retreat(&self) -> bool {
        self.current > 1
    }

    pub fn is_final_step(&self) -> bool {
        self.current == self.step_count()
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    fn step_at(&self, step: usize) -> Result<&Step, IntakeError> {
        step.checked_sub(1)
            .and_then(|i| self.instrument.steps().get(i))
            .ok_or(IntakeError::UnknownStep(step))
    }

    fn field_kind(&self, field: &str) -> Result<FieldKind, IntakeError> {
        self.instrument
            .field(field)
            .map(|(_, f)| f.kind)
            .ok_or_else(|| IntakeError::UnknownField(field.to_string()))
    }

    /// Set a text or select field.
    pub fn set_value(&mut self, field: &str, value: impl Into<String>) -> Result<(), IntakeError> {
        if self.complete {
            return Err(IntakeError::AlreadySubmitted);
        }
        if self.field_kind(field)?.is_multi() {
            return Err(IntakeError::FieldKindMismatch(field.to_string()));
        }
        self.form.values.insert(field.to_string(), value.into());
        Ok(())
    }

    /// Check or uncheck one box of a checkbox group.
    ///
    /// Checking the group's exclusive value clears every other box, and
    /// checking any other value clears the exclusive one.
    pub fn set_checked(&mut self, field: &str, value: &str, checked: bool) -> Result<(), IntakeError> {
        if self.complete {
            return Err(IntakeError::AlreadySubmitted);
        }
        let FieldKind::MultiSelect { exclusive, .. } = self.field_kind(field)? else {
            return Err(IntakeError::FieldKindMismatch(field.to_string()));
        };

        let set = self.form.checked.entry(field.to_string()).or_default();
        if !checked {
            set.remove(value);
            return Ok(());
        }

        match exclusive {
            Some(sentinel) if sentinel == value => set.clear(),
            Some(sentinel) => {
                set.remove(sentinel);
            }
            None => {}
        }
        set.insert(value.to_string());
        Ok(())
    }

    /// Check that every required field of `step` has input. Reports the
    /// first missing field in display order.
    pub fn validate_step(&self, step: usize) -> Result<(), IntakeError> {
        let definition = self.step_at(step)?;
        for field in definition.required_fields() {
            let present = if field.kind.is_multi() {
                self.form.checked(field.name).is_some()
            } else {
                !self.form.value(field.name).trim().is_empty()
            };
            if !present {
                return Err(IntakeError::MissingRequiredField {
                    step,
                    field: field.name.to_string(),
                    label: field.label.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Copy the form input of `step` into the collected answers.
    ///
    /// Empty input is not recorded; a previously collected value for a
    /// field that is now empty is removed.
    pub fn collect_step(&mut self, step: usize) -> Result<(), IntakeError> {
        let fields = self.step_at(step)?.fields;
        for field in fields {
            if field.kind.is_multi() {
                match self.form.checked(field.name) {
                    Some(values) => self.answers.insert_multi(field.name, values.iter().cloned()),
                    None => {
                        self.answers.remove(field.name);
                    }
                }
            } else {
                let value = self.form.value(field.name);
                if value.is_empty() {
                    self.answers.remove(field.name);
                } else {
                    self.answers.insert_single(field.name, value);
                }
            }
        }
        Ok(())
    }

    fn validate_and_collect(&mut self) -> Result<(), IntakeError> {
        if self.complete {
            return Err(IntakeError::AlreadySubmitted);
        }
        if let Err(e) = self.validate_step(self.current) {
            warn!(step = self.current, error = %e, "step validation failed");
            return Err(e);
        }
        self.collect_step(self.current)
    }

    /// Validate and collect the current step, then move forward. On the
    /// final step the answers are collected but the position stays put;
    /// use [`IntakeSession::submit`] to finish.
    ///
    /// Returns the new current step.
    pub fn advance(&mut self) -> Result<usize, IntakeError> {
        self.validate_and_collect()?;
        if self.current < self.step_count() {
            self.current += 1;
            info!(step = self.current, of = self.step_count(), "advanced");
        }
        Ok(self.current)
    }

    /// Move back one step. Collected answers are kept. No-op on the first
    /// step and after submission.
    pub fn retreat(&mut self) -> usize {
        if self.can_retreat() && !self.complete {
            self.current -= 1;
            info!(step = self.current, of = self.step_count(), "went back");
        }
        self.current
    }

    /// Terminal action on the final step: validate, collect, and mark the
    /// session complete.
    pub fn submit(&mut self) -> Result<&AnswerSet, IntakeError> {
        if !self.complete && !self.is_final_step() {
            return Err(IntakeError::NotOnFinalStep {
                current: self.current,
            });
        }
        self.validate_and_collect()?;
        self.complete = true;
        info!(answers = self.answers.len(), "assessment submitted");
        Ok(&self.answers)
    }
}
