//! User account errors.

use thiserror::Error;

use crate::domain::foundation::{AuthError, DomainError, ErrorCode, ValidationError};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserError {
    #[error("Validation failed for '{field}': {message}")]
    ValidationFailed { field: String, message: String },

    #[error("Username '{0}' is already taken")]
    UsernameTaken(String),

    /// Unknown username and wrong password are deliberately indistinguishable.
    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Token error: {0}")]
    Token(AuthError),

    #[error("Error: {0}")]
    Infrastructure(String),
}

impl UserError {
    pub fn infrastructure(message: impl Into<String>) -> Self {
        UserError::Infrastructure(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            UserError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            UserError::UsernameTaken(_) => ErrorCode::Conflict,
            UserError::InvalidCredentials => ErrorCode::Unauthorized,
            UserError::Token(_) | UserError::Infrastructure(_) => ErrorCode::InternalError,
        }
    }
}

impl From<ValidationError> for UserError {
    fn from(err: ValidationError) -> Self {
        UserError::ValidationFailed {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}

impl From<AuthError> for UserError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidCredentials => UserError::InvalidCredentials,
            other => UserError::Token(other),
        }
    }
}

impl From<DomainError> for UserError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::Conflict => UserError::UsernameTaken(
                err.details.get("username").cloned().unwrap_or_default(),
            ),
            _ => UserError::Infrastructure(err.to_string()),
        }
    }
}
