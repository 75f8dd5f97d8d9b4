//! Page-level controller tying login, the intake session, classification,
//! and exports together.

use std::time::Duration;

use serde::Serialize;
use tracing::{debug, info};
use uuid::Uuid;

use ayur_auth::store::CredentialStore;
use ayur_core::models::answer::AnswerSet;
use ayur_core::models::assessment::Assessment;
use ayur_core::models::user::{Registration, Role, UserRecord};
use ayur_export::diet_plan::{diet_plan_filename, render_diet_plan};
use ayur_export::report::{ReportInput, render_report};
use ayur_instruments::session::IntakeSession;

use crate::config::AppConfig;
use crate::error::AppError;
use crate::notify::{NotificationKind, Notifier};

/// Status lines shown while a submission is processed, in order.
pub const LOADING_PHASES: [&str; 3] = [
    "Analyzing your constitution...",
    "Calculating dosha balance...",
    "Generating personalized recommendations...",
];

const FALLBACK_PRACTITIONER: &str = "Doctor";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "page", content = "role", rename_all = "snake_case")]
pub enum Page {
    Login,
    Dashboard(Role),
    Assessment,
    Loading,
    Results,
    DietPlan,
}

/// Answers captured at submission, waiting to be classified. Only valid
/// until the next logout or restart of the assessment.
#[derive(Debug)]
pub struct PendingSubmission {
    generation: u64,
    answers: AnswerSet,
}

impl PendingSubmission {
    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }
}

#[derive(Debug)]
pub struct App {
    config: AppConfig,
    store: CredentialStore,
    user: Option<UserRecord>,
    page: Page,
    session: Option<IntakeSession>,
    assessment: Option<Assessment>,
    pending: bool,
    /// Bumped whenever in-flight work is invalidated.
    generation: u64,
    notifier: Notifier,
}

impl App {
    pub fn new(config: AppConfig, store: CredentialStore) -> Self {
        let notifier = Notifier::new(config.notification_ttl());
        Self {
            config,
            store,
            user: None,
            page: Page::Login,
            session: None,
            assessment: None,
            pending: false,
            generation: 0,
            notifier,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn store(&self) -> &CredentialStore {
        &self.store
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn user(&self) -> Option<&UserRecord> {
        self.user.as_ref()
    }

    pub fn session(&self) -> Option<&IntakeSession> {
        self.session.as_ref()
    }

    pub fn assessment(&self) -> Option<&Assessment> {
        self.assessment.as_ref()
    }

    pub fn is_submitting(&self) -> bool {
        self.pending
    }

    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    /// Surface `err` to the user and hand it back.
    fn fail<T>(&mut self, err: impl Into<AppError>) -> Result<T, AppError> {
        let err = err.into();
        self.notifier.push(err.kind(), err.to_string());
        Err(err)
    }

    // ── Authentication ────────────────────────────────────────────────────

    pub fn login(&mut self, email: &str, secret: &str, role: Role) -> Result<&UserRecord, AppError> {
        let user = match self.store.authenticate(email, secret, role).cloned() {
            Ok(user) => user,
            Err(e) => return self.fail(e),
        };
        self.notifier
            .push(NotificationKind::Success, format!("Welcome {}!", user.name));
        self.page = Page::Dashboard(user.role);
        Ok(&*self.user.insert(user))
    }

    /// Add an account. The caller still has to log in with it.
    pub fn register(&mut self, registration: Registration) -> Result<(), AppError> {
        if let Err(e) = self.store.register(registration) {
            return self.fail(e);
        }
        self.notifier.push(
            NotificationKind::Success,
            "Registration successful! Please login with your credentials.",
        );
        self.page = Page::Login;
        Ok(())
    }

    pub fn logout(&mut self) {
        if let Some(user) = self.user.take() {
            info!(user_id = user.id, "logged out");
        }
        self.session = None;
        self.assessment = None;
        self.pending = false;
        self.generation += 1;
        self.page = Page::Login;
        self.notifier
            .push(NotificationKind::Success, "Logged out successfully");
    }

    /// Return to the logged-in user's dashboard.
    pub fn dashboard(&mut self) -> Result<Page, AppError> {
        let Some(role) = self.user.as_ref().map(|u| u.role) else {
            return self.fail(AppError::NotLoggedIn);
        };
        self.page = Page::Dashboard(role);
        Ok(self.page)
    }

    // ── Assessment ────────────────────────────────────────────────────────

    /// Open a fresh questionnaire at step 1.
    pub fn start_assessment(&mut self) -> Result<(), AppError> {
        if self.user.is_none() {
            return self.fail(AppError::NotLoggedIn);
        }
        if self.pending {
            return self.fail(AppError::SubmissionPending);
        }
        self.generation += 1;
        match self.session.as_mut() {
            Some(session) => session.start(),
            None => self.session = Some(IntakeSession::prakriti()),
        }
        self.page = Page::Assessment;
        info!("assessment started");
        Ok(())
    }

    fn with_session<T>(
        &mut self,
        f: impl FnOnce(&mut IntakeSession) -> Result<T, ayur_instruments::error::IntakeError>,
    ) -> Result<T, AppError> {
        let Some(session) = self.session.as_mut() else {
            return self.fail(AppError::NoSession);
        };
        match f(session) {
            Ok(value) => Ok(value),
            Err(e) => self.fail(e),
        }
    }

    pub fn set_value(&mut self, field: &str, value: &str) -> Result<(), AppError> {
        self.with_session(|s| s.set_value(field, value))
    }

    pub fn set_checked(&mut self, field: &str, value: &str, checked: bool) -> Result<(), AppError> {
        self.with_session(|s| s.set_checked(field, value, checked))
    }

    pub fn next_step(&mut self) -> Result<usize, AppError> {
        self.with_session(|s| s.advance())
    }

    pub fn previous_step(&mut self) -> Result<usize, AppError> {
        self.with_session(|s| Ok(s.retreat()))
    }

    /// Validate the final step and lock in the answers. At most one
    /// submission may be in flight.
    pub fn begin_submission(&mut self) -> Result<PendingSubmission, AppError> {
        if self.pending {
            return self.fail(AppError::SubmissionPending);
        }
        let answers = self.with_session(|s| s.submit().cloned())?;
        self.pending = true;
        self.generation += 1;
        self.page = Page::Loading;
        debug!(answers = answers.len(), generation = self.generation, "submission pending");
        Ok(PendingSubmission {
            generation: self.generation,
            answers,
        })
    }

    /// Classify the pending answers and store the resulting assessment.
    /// A submission cancelled by logout or a restarted assessment is
    /// rejected without touching the current state.
    pub fn complete_submission(&mut self, pending: PendingSubmission) -> Result<&Assessment, AppError> {
        if !self.pending || pending.generation != self.generation {
            debug!(
                token = pending.generation,
                current = self.generation,
                "stale submission dropped"
            );
            return self.fail(AppError::SubmissionCancelled);
        }
        self.pending = false;
        let Some(session) = self.session.as_ref() else {
            return self.fail(AppError::NoSession);
        };
        let instrument = session.instrument();
        let result = instrument.classify(&pending.answers);
        let assessment = Assessment {
            id: Uuid::new_v4(),
            instrument_id: instrument.id().to_string(),
            patient_name: pending.answers.single("patient_name").map(str::to_string),
            answers: pending.answers,
            result,
            date_administered: jiff::Zoned::now().date(),
            created_at: jiff::Timestamp::now(),
        };
        info!(
            assessment_id = %assessment.id,
            dominant = %assessment.result.dominant,
            confidence = assessment.result.confidence,
            "assessment classified"
        );
        self.page = Page::Results;
        Ok(&*self.assessment.insert(assessment))
    }

    /// Submit, wait out the processing phases, then classify.
    pub async fn submit(&mut self) -> Result<&Assessment, AppError> {
        let pending = self.begin_submission()?;
        let phase_delay = self.config.processing_delay() / LOADING_PHASES.len() as u32;
        for phase in LOADING_PHASES {
            info!("{phase}");
            if phase_delay > Duration::ZERO {
                tokio::time::sleep(phase_delay).await;
            }
        }
        self.complete_submission(pending)
    }

    /// Show the results page for the stored assessment.
    pub fn results(&mut self) -> Result<&Assessment, AppError> {
        if self.assessment.is_none() {
            return self.fail(AppError::NoActiveAssessment);
        }
        self.page = Page::Results;
        self.assessment.as_ref().ok_or(AppError::NoActiveAssessment)
    }

    // ── Exports ───────────────────────────────────────────────────────────

    fn practitioner(&self) -> String {
        self.config
            .practitioner_name
            .clone()
            .or_else(|| self.user.as_ref().map(|u| u.name.clone()))
            .unwrap_or_else(|| FALLBACK_PRACTITIONER.to_string())
    }

    fn require_assessment(&mut self) -> Result<&Assessment, AppError> {
        if self.assessment.is_none() {
            return self.fail(AppError::NoActiveAssessment);
        }
        self.assessment.as_ref().ok_or(AppError::NoActiveAssessment)
    }

    /// Render the diet plan and switch to the diet plan page.
    pub fn diet_plan_text(&mut self) -> Result<String, AppError> {
        let practitioner = self.practitioner();
        let rendered = render_diet_plan(self.require_assessment()?, &practitioner);
        let text = match rendered {
            Ok(text) => text,
            Err(e) => return self.fail(e),
        };
        self.page = Page::DietPlan;
        self.notifier
            .push(NotificationKind::Success, "Diet plan generated successfully!");
        Ok(text)
    }

    /// Diet plan as `(filename, contents)`, ready to be written out.
    pub fn export_diet_plan(&mut self) -> Result<(String, String), AppError> {
        let practitioner = self.practitioner();
        let assessment = self.require_assessment()?;
        let filename = diet_plan_filename(assessment);
        let text = match render_diet_plan(assessment, &practitioner) {
            Ok(text) => text,
            Err(e) => return self.fail(e),
        };
        info!(%filename, "diet plan exported");
        self.notifier
            .push(NotificationKind::Success, "Diet plan downloaded successfully!");
        Ok((filename, text))
    }

    /// Full assessment report, including the structured responses.
    pub fn report_text(&mut self) -> Result<String, AppError> {
        let practitioner = self.practitioner();
        let assessment = self.require_assessment()?;
        let responses = match ayur_instruments::get_instrument(&assessment.instrument_id) {
            Some(instrument) => instrument.to_structured_input(&assessment.answers),
            None => {
                let id = assessment.instrument_id.clone();
                return self.fail(ayur_instruments::error::IntakeError::UnknownInstrument(id));
            }
        };
        let input = ReportInput {
            assessment,
            practitioner: &practitioner,
            responses: &responses,
        };
        let text = match render_report(&input) {
            Ok(text) => text,
            Err(e) => return self.fail(e),
        };
        self.notifier
            .push(NotificationKind::Success, "Report generated successfully!");
        Ok(text)
    }
}
