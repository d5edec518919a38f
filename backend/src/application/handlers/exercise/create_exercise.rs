//! CreateExerciseHandler - Adds an exercise to the caller's catalog.

use std::sync::Arc;

use crate::domain::exercise::{Exercise, ExerciseError, NewExercise};
use crate::domain::foundation::UserId;
use crate::ports::ExerciseRepository;

#[derive(Debug, Clone)]
pub struct CreateExerciseCommand {
    pub user_id: UserId,
    pub name: String,
    pub description: String,
    pub target_muscle: String,
    pub picture_url: String,
}

pub struct CreateExerciseHandler {
    repository: Arc<dyn ExerciseRepository>,
}

impl CreateExerciseHandler {
    pub fn new(repository: Arc<dyn ExerciseRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: CreateExerciseCommand) -> Result<Exercise, ExerciseError> {
        let exercise = NewExercise::new(
            cmd.user_id,
            cmd.name,
            cmd.description,
            cmd.target_muscle,
            cmd.picture_url,
        )?;

        Ok(self.repository.create(&exercise).await?)
    }
}
