//! Exercise repository port.

use async_trait::async_trait;

use crate::domain::exercise::{Exercise, NewExercise, Page};
use crate::domain::foundation::{DomainError, UserId};

#[async_trait]
pub trait ExerciseRepository: Send + Sync {
    async fn create(&self, exercise: &NewExercise) -> Result<Exercise, DomainError>;

    /// Lists a user's exercises ordered by id, windowed by `page`.
    async fn list_for_user(&self, user_id: UserId, page: Page)
        -> Result<Vec<Exercise>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Trait object safety test
    #[test]
    fn exercise_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn ExerciseRepository) {}
    }
}
