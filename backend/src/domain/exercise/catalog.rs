//! User-owned exercise catalog entries.

use serde::Serialize;

use crate::domain::foundation::{ExerciseId, Timestamp, UserId, ValidationError};

pub const DEFAULT_PAGE_LIMIT: i64 = 10;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    pub id: ExerciseId,
    pub user_id: UserId,
    pub name: String,
    pub description: String,
    pub target_muscle: String,
    pub picture_url: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// An exercise to be created for the authenticated user.
#[derive(Debug, Clone, PartialEq)]
pub struct NewExercise {
    pub user_id: UserId,
    pub name: String,
    pub description: String,
    pub target_muscle: String,
    pub picture_url: String,
}

impl NewExercise {
    /// # Errors
    ///
    /// `EmptyField` if `name` or `target_muscle` is blank.
    pub fn new(
        user_id: UserId,
        name: impl Into<String>,
        description: impl Into<String>,
        target_muscle: impl Into<String>,
        picture_url: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        let target_muscle = target_muscle.into();
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        if target_muscle.trim().is_empty() {
            return Err(ValidationError::empty_field("targetMuscle"));
        }
        Ok(Self {
            user_id,
            name,
            description: description.into(),
            target_muscle,
            picture_url: picture_url.into(),
        })
    }
}

/// Offset/limit window, passed through to the repository as given.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    offset: i64,
    limit: i64,
}

impl Page {
    /// Missing values default to offset 0 and limit 10.
    ///
    /// # Errors
    ///
    /// `OutOfRange` for a negative offset or limit.
    pub fn new(offset: Option<i64>, limit: Option<i64>) -> Result<Self, ValidationError> {
        let offset = offset.unwrap_or(0);
        let limit = limit.unwrap_or(DEFAULT_PAGE_LIMIT);
        if offset < 0 {
            return Err(ValidationError::out_of_range("offset", 0, i64::MAX, offset));
        }
        if limit < 0 {
            return Err(ValidationError::out_of_range("limit", 0, i64::MAX, limit));
        }
        Ok(Self { offset, limit })
    }

    pub fn offset(&self) -> i64 {
        self.offset
    }

    pub fn limit(&self) -> i64 {
        self.limit
    }
}

impl Default for Page {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: DEFAULT_PAGE_LIMIT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_exercise_requires_name_and_target_muscle() {
        assert!(NewExercise::new(UserId::new(1), "Squat", "", "legs", "").is_ok());

        let err = NewExercise::new(UserId::new(1), " ", "", "legs", "").unwrap_err();
        assert_eq!(err.field(), "name");

        let err = NewExercise::new(UserId::new(1), "Squat", "", "", "").unwrap_err();
        assert_eq!(err.field(), "targetMuscle");
    }

    #[test]
    fn page_defaults_to_first_ten() {
        let page = Page::new(None, None).unwrap();
        assert_eq!(page, Page::default());
        assert_eq!(page.offset(), 0);
        assert_eq!(page.limit(), 10);
    }

    #[test]
    fn page_passes_values_through() {
        let page = Page::new(Some(20), Some(500)).unwrap();
        assert_eq!(page.offset(), 20);
        assert_eq!(page.limit(), 500);
    }

    #[test]
    fn page_rejects_negative_values() {
        assert_eq!(Page::new(Some(-1), None).unwrap_err().field(), "offset");
        assert_eq!(Page::new(None, Some(-5)).unwrap_err().field(), "limit");
    }
}
