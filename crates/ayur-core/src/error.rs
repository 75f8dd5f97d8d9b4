use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("unknown dosha: {0}")]
    UnknownDosha(String),

    #[error("unknown role: {0}")]
    UnknownRole(String),
}
