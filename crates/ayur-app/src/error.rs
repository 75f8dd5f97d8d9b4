use thiserror::Error;

use ayur_auth::error::AuthError;
use ayur_export::error::ExportError;
use ayur_instruments::error::IntakeError;

use crate::notify::NotificationKind;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Intake(#[from] IntakeError),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error("No assessment data available. Please complete assessment first.")]
    NoActiveAssessment,

    #[error("No assessment in progress")]
    NoSession,

    #[error("Please log in first")]
    NotLoggedIn,

    #[error("An assessment is already being processed")]
    SubmissionPending,

    #[error("This assessment was cancelled")]
    SubmissionCancelled,
}

impl AppError {
    pub fn kind(&self) -> NotificationKind {
        match self {
            AppError::SubmissionPending | AppError::SubmissionCancelled => {
                NotificationKind::Warning
            }
            _ => NotificationKind::Error,
        }
    }
}
