//! Workout session store port.
//!
//! Creates a session together with all of its workouts and sets, atomically.

use async_trait::async_trait;

use crate::domain::workout_session::{
    NewWorkoutSession, PersistedWorkoutSession, WorkoutSessionError,
};

#[async_trait]
pub trait WorkoutSessionStore: Send + Sync {
    /// Persists the whole aggregate in one transaction.
    ///
    /// On success every returned workout references the returned session and
    /// every returned set references one of the returned workouts. On error
    /// nothing was applied.
    async fn create(
        &self,
        session: &NewWorkoutSession,
    ) -> Result<PersistedWorkoutSession, WorkoutSessionError>;
}
