//! CreateWorkoutSessionHandler - Creates a session with its workouts and sets.
//!
//! Validates the request into a `NewWorkoutSession`, has the store persist it
//! atomically, and assembles the flat rows into the nested result. Store
//! errors pass through unchanged.

use std::sync::Arc;

use crate::domain::foundation::UserId;
use crate::domain::workout_session::{
    NewWorkout, NewWorkoutSession, WorkoutSession, WorkoutSessionError,
};
use crate::ports::WorkoutSessionStore;

/// Command to create a workout session.
///
/// `user_id` must be the authenticated caller.
#[derive(Debug, Clone)]
pub struct CreateWorkoutSessionCommand {
    pub user_id: UserId,
    pub name: String,
    pub description: String,
    pub duration: i32,
    pub workouts: Vec<NewWorkout>,
}

/// Handler for creating workout sessions.
pub struct CreateWorkoutSessionHandler {
    store: Arc<dyn WorkoutSessionStore>,
}

impl CreateWorkoutSessionHandler {
    pub fn new(store: Arc<dyn WorkoutSessionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        cmd: CreateWorkoutSessionCommand,
    ) -> Result<WorkoutSession, WorkoutSessionError> {
        let session = NewWorkoutSession::new(
            cmd.user_id,
            cmd.name,
            cmd.description,
            cmd.duration,
            cmd.workouts,
        )?;

        let persisted = self.store.create(&session).await?;

        Ok(persisted.into_nested())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{FailurePoint, InMemoryAggregateDatabase};
    use crate::adapters::TransactionalWorkoutSessionStore;
    use crate::domain::foundation::ExerciseId;
    use crate::domain::workout_session::{NewWorkoutSet, PersistedWorkoutSession};
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Store that records requests and fails on demand.
    struct MockStore {
        requests: Mutex<Vec<NewWorkoutSession>>,
        fail_with: Option<WorkoutSessionError>,
    }

    impl MockStore {
        fn failing(err: WorkoutSessionError) -> Self {
            Self {
                requests: Mutex::new(Vec::new()),
                fail_with: Some(err),
            }
        }

        fn request_count(&self) -> usize {
            self.requests.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl WorkoutSessionStore for MockStore {
        async fn create(
            &self,
            session: &NewWorkoutSession,
        ) -> Result<PersistedWorkoutSession, WorkoutSessionError> {
            self.requests.lock().unwrap().push(session.clone());
            match &self.fail_with {
                Some(err) => Err(err.clone()),
                None => unreachable!("only used as a failing store"),
            }
        }
    }

    fn handler_over(db: Arc<InMemoryAggregateDatabase>) -> CreateWorkoutSessionHandler {
        CreateWorkoutSessionHandler::new(Arc::new(TransactionalWorkoutSessionStore::new(db)))
    }

    fn morning_command() -> CreateWorkoutSessionCommand {
        CreateWorkoutSessionCommand {
            user_id: UserId::new(42),
            name: "Morning".to_string(),
            description: String::new(),
            duration: 60,
            workouts: vec![NewWorkout::new(
                ExerciseId::new(1),
                "",
                vec![NewWorkoutSet::new(10, 135.5, "working", 1).unwrap()],
            )],
        }
    }

    #[tokio::test]
    async fn creates_nested_session_for_caller() {
        let handler = handler_over(Arc::new(InMemoryAggregateDatabase::new()));

        let session = handler.handle(morning_command()).await.unwrap();

        assert_eq!(session.user_id, UserId::new(42));
        assert_eq!(session.name, "Morning");
        assert_eq!(session.workouts.len(), 1);
        let workout = &session.workouts[0];
        assert_eq!(workout.session_id, session.id);
        assert_eq!(workout.sets.len(), 1);
        assert_eq!(workout.sets[0].reps, 10);
        assert_eq!(workout.sets[0].weight, 135.5);
        assert_eq!(workout.sets[0].workout_id, workout.id);
    }

    #[tokio::test]
    async fn rejects_invalid_session_before_touching_store() {
        let db = Arc::new(InMemoryAggregateDatabase::new());
        let handler = handler_over(db.clone());
        let mut cmd = morning_command();
        cmd.name = "  ".to_string();

        let result = handler.handle(cmd).await;

        assert!(matches!(
            result,
            Err(WorkoutSessionError::ValidationFailed { ref field, .. }) if field == "name"
        ));
        assert_eq!(db.open_transactions(), 0);
        assert!(db.is_empty());
    }

    #[tokio::test]
    async fn propagates_store_errors_unchanged() {
        let expected = WorkoutSessionError::CommitFailed("disk full".to_string());
        let store = Arc::new(MockStore::failing(expected.clone()));
        let handler = CreateWorkoutSessionHandler::new(store.clone());

        let result = handler.handle(morning_command()).await;

        assert_eq!(result.unwrap_err(), expected);
        assert_eq!(store.request_count(), 1);
    }

    #[tokio::test]
    async fn returns_no_partial_result_on_set_failure() {
        let db = Arc::new(InMemoryAggregateDatabase::new().fail_at(FailurePoint::SetInsert {
            workout_position: 0,
            set_position: 0,
        }));
        let handler = handler_over(db.clone());

        let result = handler.handle(morning_command()).await;

        assert!(matches!(result, Err(WorkoutSessionError::SetInsertFailed { .. })));
        assert!(db.is_empty());
    }
}
