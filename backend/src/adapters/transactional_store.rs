//! Transactional implementation of the `WorkoutSessionStore` port.
//!
//! Writes the aggregate through an `AggregateDatabase`:
//!
//! 1. insert the session row
//! 2. for each workout in input order, insert it under the new session id
//! 3. for each set of that workout in input order, insert it under the new
//!    workout id
//! 4. commit
//!
//! Any failure rolls the whole transaction back before the error is returned.
//! If the caller's future is dropped mid-write, the open transaction is
//! dropped with it and the database rolls it back.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::workout_session::{
    NewWorkoutSession, PersistedWorkoutSession, WorkoutSessionError,
};
use crate::ports::{AggregateDatabase, AggregateTransaction, WorkoutSessionStore};

pub struct TransactionalWorkoutSessionStore {
    database: Arc<dyn AggregateDatabase>,
}

impl TransactionalWorkoutSessionStore {
    pub fn new(database: Arc<dyn AggregateDatabase>) -> Self {
        Self { database }
    }

    async fn write(
        tx: &mut dyn AggregateTransaction,
        session: &NewWorkoutSession,
    ) -> Result<PersistedWorkoutSession, WorkoutSessionError> {
        let session_record = tx.insert_session(session).await.map_err(|e| {
            tracing::error!(user_id = %session.user_id(), "Failed to insert session: {}", e);
            WorkoutSessionError::SessionInsertFailed(e.message)
        })?;

        let mut workouts = Vec::with_capacity(session.workouts().len());
        let mut sets = Vec::with_capacity(session.set_count());

        for (position, workout) in session.workouts().iter().enumerate() {
            let workout_record = tx
                .insert_workout(session_record.id, workout)
                .await
                .map_err(|e| {
                    tracing::error!(
                        session_id = %session_record.id,
                        position,
                        "Failed to insert workout: {}",
                        e
                    );
                    WorkoutSessionError::WorkoutInsertFailed {
                        position,
                        message: e.message,
                    }
                })?;

            for (set_position, set) in workout.sets.iter().enumerate() {
                let set_record = tx.insert_set(workout_record.id, set).await.map_err(|e| {
                    tracing::error!(
                        session_id = %session_record.id,
                        workout_position = position,
                        set_position,
                        "Failed to insert workout set: {}",
                        e
                    );
                    WorkoutSessionError::SetInsertFailed {
                        workout_position: position,
                        set_position,
                        message: e.message,
                    }
                })?;
                sets.push(set_record);
            }

            workouts.push(workout_record);
        }

        Ok(PersistedWorkoutSession {
            session: session_record,
            workouts,
            sets,
        })
    }
}

#[async_trait]
impl WorkoutSessionStore for TransactionalWorkoutSessionStore {
    async fn create(
        &self,
        session: &NewWorkoutSession,
    ) -> Result<PersistedWorkoutSession, WorkoutSessionError> {
        let mut tx = self.database.begin().await.map_err(|e| {
            tracing::error!("Failed to begin transaction: {}", e);
            WorkoutSessionError::BeginFailed(e.message)
        })?;

        match Self::write(tx.as_mut(), session).await {
            Ok(persisted) => {
                tx.commit().await.map_err(|e| {
                    tracing::error!(
                        session_id = %persisted.session.id,
                        "Failed to commit transaction: {}",
                        e
                    );
                    WorkoutSessionError::CommitFailed(e.message)
                })?;

                tracing::debug!(
                    session_id = %persisted.session.id,
                    workouts = persisted.workouts.len(),
                    sets = persisted.sets.len(),
                    "Workout session created"
                );
                Ok(persisted)
            }
            Err(err) => {
                if let Err(e) = tx.rollback().await {
                    tracing::warn!("Failed to roll back transaction: {}", e);
                }
                Err(err)
            }
        }
    }
}
