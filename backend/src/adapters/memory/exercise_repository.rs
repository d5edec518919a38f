//! In-memory implementation of ExerciseRepository for testing.
//!
//! # Panics
//!
//! Methods may panic if the internal lock is poisoned.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::exercise::{Exercise, NewExercise, Page};
use crate::domain::foundation::{DomainError, ExerciseId, Timestamp, UserId};
use crate::ports::ExerciseRepository;

#[derive(Debug, Default)]
pub struct InMemoryExerciseRepository {
    exercises: Mutex<Vec<Exercise>>,
}

impl InMemoryExerciseRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ExerciseRepository for InMemoryExerciseRepository {
    async fn create(&self, exercise: &NewExercise) -> Result<Exercise, DomainError> {
        let mut exercises = self
            .exercises
            .lock()
            .expect("InMemoryExerciseRepository: lock poisoned");

        let now = Timestamp::now();
        let created = Exercise {
            id: ExerciseId::new(exercises.len() as i64 + 1),
            user_id: exercise.user_id,
            name: exercise.name.clone(),
            description: exercise.description.clone(),
            target_muscle: exercise.target_muscle.clone(),
            picture_url: exercise.picture_url.clone(),
            created_at: now,
            updated_at: now,
        };
        exercises.push(created.clone());
        Ok(created)
    }

    async fn list_for_user(
        &self,
        user_id: UserId,
        page: Page,
    ) -> Result<Vec<Exercise>, DomainError> {
        let exercises = self
            .exercises
            .lock()
            .expect("InMemoryExerciseRepository: lock poisoned");

        Ok(exercises
            .iter()
            .filter(|e| e.user_id == user_id)
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn list_for_user_filters_and_windows() {
        let repo = InMemoryExerciseRepository::new();
        for i in 0..5 {
            let owner = if i % 2 == 0 { 1 } else { 2 };
            let exercise = NewExercise::new(UserId::new(owner), format!("ex{}", i), "", "legs", "")
                .unwrap();
            repo.create(&exercise).await.unwrap();
        }

        let all = repo
            .list_for_user(UserId::new(1), Page::default())
            .await
            .unwrap();
        assert_eq!(all.len(), 3);

        let window = repo
            .list_for_user(UserId::new(1), Page::new(Some(1), Some(1)).unwrap())
            .await
            .unwrap();
        assert_eq!(window.len(), 1);
        assert_eq!(window[0].name, "ex2");
    }
}
