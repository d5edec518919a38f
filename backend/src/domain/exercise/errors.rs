use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExerciseError {
    #[error("Validation failed for '{field}': {message}")]
    ValidationFailed { field: String, message: String },

    #[error("Error: {0}")]
    Infrastructure(String),
}

impl ExerciseError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ExerciseError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            ExerciseError::Infrastructure(_) => ErrorCode::InternalError,
        }
    }
}

impl From<ValidationError> for ExerciseError {
    fn from(err: ValidationError) -> Self {
        ExerciseError::ValidationFailed {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}

impl From<DomainError> for ExerciseError {
    fn from(err: DomainError) -> Self {
        ExerciseError::Infrastructure(err.to_string())
    }
}
