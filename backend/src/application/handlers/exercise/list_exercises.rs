//! ListExercisesHandler - Pages through the caller's exercises.

use std::sync::Arc;

use crate::domain::exercise::{Exercise, ExerciseError, Page};
use crate::domain::foundation::UserId;
use crate::ports::ExerciseRepository;

/// Query for one page of a user's exercises. Missing bounds use the defaults.
#[derive(Debug, Clone)]
pub struct ListExercisesQuery {
    pub user_id: UserId,
    pub offset: Option<i64>,
    pub limit: Option<i64>,
}

pub struct ListExercisesHandler {
    repository: Arc<dyn ExerciseRepository>,
}

impl ListExercisesHandler {
    pub fn new(repository: Arc<dyn ExerciseRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: ListExercisesQuery) -> Result<Vec<Exercise>, ExerciseError> {
        let page = Page::new(query.offset, query.limit)?;
        Ok(self.repository.list_for_user(query.user_id, page).await?)
    }
}
