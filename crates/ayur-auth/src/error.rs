use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Invalid credentials. Please check your email, password, and role.")]
    InvalidCredentials,

    #[error("User with this email already exists")]
    DuplicateIdentity(String),

    #[error("missing required field: {0}")]
    MissingField(&'static str),
}
