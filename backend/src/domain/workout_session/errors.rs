//! Workout session errors.

use thiserror::Error;

use crate::domain::foundation::{ErrorCode, ValidationError};

/// Errors raised while creating a workout session aggregate.
///
/// Every persistence variant means the whole aggregate was not applied; the
/// transaction is rolled back before the error is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorkoutSessionError {
    /// The request failed domain validation before anything was written.
    #[error("Validation failed for '{field}': {message}")]
    ValidationFailed { field: String, message: String },

    /// No transaction could be opened.
    #[error("Failed to begin transaction: {0}")]
    BeginFailed(String),

    /// The session row could not be inserted.
    #[error("Failed to insert session: {0}")]
    SessionInsertFailed(String),

    /// The workout at `position` (zero-based, input order) could not be inserted.
    #[error("Failed to insert workout {position}: {message}")]
    WorkoutInsertFailed { position: usize, message: String },

    /// The set at `set_position` of the workout at `workout_position` could not be inserted.
    #[error("Failed to insert set {set_position} of workout {workout_position}: {message}")]
    SetInsertFailed {
        workout_position: usize,
        set_position: usize,
        message: String,
    },

    /// Commit failed; the operation must be treated as not applied.
    #[error("Failed to commit transaction: {0}")]
    CommitFailed(String),
}

impl WorkoutSessionError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        WorkoutSessionError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            WorkoutSessionError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            _ => ErrorCode::InternalError,
        }
    }

    /// Returns true for failures of the transactional write itself.
    pub fn is_persistence_failure(&self) -> bool {
        !matches!(self, WorkoutSessionError::ValidationFailed { .. })
    }
}

impl From<ValidationError> for WorkoutSessionError {
    fn from(err: ValidationError) -> Self {
        let field = err.field().to_string();
        WorkoutSessionError::ValidationFailed {
            field,
            message: err.to_string(),
        }
    }
}
