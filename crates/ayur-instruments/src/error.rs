use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntakeError {
    #[error("Please fill in: {label}")]
    MissingRequiredField {
        step: usize,
        field: String,
        label: String,
    },

    #[error("unknown field: {0}")]
    UnknownField(String),

    #[error("field '{0}' does not accept this kind of input")]
    FieldKindMismatch(String),

    #[error("unknown step: {0}")]
    UnknownStep(usize),

    #[error("step {current} is not the final step")]
    NotOnFinalStep { current: usize },

    #[error("assessment already submitted")]
    AlreadySubmitted,

    #[error("unknown instrument: {0}")]
    UnknownInstrument(String),
}
