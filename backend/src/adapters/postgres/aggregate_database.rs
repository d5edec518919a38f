//! PostgreSQL implementation of AggregateDatabase.
//!
//! Each `begin` borrows a pooled connection and holds it inside a
//! `sqlx::Transaction` until commit or rollback. sqlx rolls back a
//! transaction that is dropped uncommitted, so a cancelled request never
//! leaves rows behind.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Postgres, Row, Transaction};

use crate::domain::foundation::{
    DomainError, ExerciseId, Timestamp, UserId, WorkoutId, WorkoutSessionId, WorkoutSetId,
};
use crate::domain::workout_session::{
    NewWorkout, NewWorkoutSession, NewWorkoutSet, WorkoutRecord, WorkoutSessionRecord,
    WorkoutSetRecord,
};
use crate::ports::{AggregateDatabase, AggregateTransaction};

/// PostgreSQL implementation of AggregateDatabase.
#[derive(Clone)]
pub struct PgAggregateDatabase {
    pool: PgPool,
}

impl PgAggregateDatabase {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AggregateDatabase for PgAggregateDatabase {
    async fn begin(&self) -> Result<Box<dyn AggregateTransaction>, DomainError> {
        let tx = self.pool.begin().await.map_err(|e| {
            DomainError::database(format!("Failed to begin transaction: {}", e))
        })?;

        Ok(Box::new(PgAggregateTransaction { tx }))
    }
}

/// One open PostgreSQL transaction.
pub struct PgAggregateTransaction {
    tx: Transaction<'static, Postgres>,
}

#[async_trait]
impl AggregateTransaction for PgAggregateTransaction {
    async fn insert_session(
        &mut self,
        session: &NewWorkoutSession,
    ) -> Result<WorkoutSessionRecord, DomainError> {
        let row = sqlx::query(
            r#"
            INSERT INTO sessions (name, user_id, description, duration)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, user_id, description, duration, created_at, updated_at
            "#,
        )
        .bind(session.name())
        .bind(session.user_id().as_i64())
        .bind(session.description())
        .bind(session.duration())
        .fetch_one(&mut *self.tx)
        .await
        .map_err(|e| DomainError::database(format!("Failed to insert session: {}", e)))?;

        row_to_session(&row)
    }

    async fn insert_workout(
        &mut self,
        session_id: WorkoutSessionId,
        workout: &NewWorkout,
    ) -> Result<WorkoutRecord, DomainError> {
        let row = sqlx::query(
            r#"
            INSERT INTO workouts (exercise_id, description, session_id)
            VALUES ($1, $2, $3)
            RETURNING id, exercise_id, description, session_id, created_at, updated_at
            "#,
        )
        .bind(workout.exercise_id.as_i64())
        .bind(&workout.description)
        .bind(session_id.as_i64())
        .fetch_one(&mut *self.tx)
        .await
        .map_err(|e| DomainError::database(format!("Failed to insert workout: {}", e)))?;

        row_to_workout(&row)
    }

    async fn insert_set(
        &mut self,
        workout_id: WorkoutId,
        set: &NewWorkoutSet,
    ) -> Result<WorkoutSetRecord, DomainError> {
        let row = sqlx::query(
            r#"
            INSERT INTO workout_sets (workout_id, reps, weight, set_type, set_order)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, workout_id, reps, weight, set_type, set_order, created_at, updated_at
            "#,
        )
        .bind(workout_id.as_i64())
        .bind(set.reps)
        .bind(set.weight)
        .bind(&set.set_type)
        .bind(set.set_order)
        .fetch_one(&mut *self.tx)
        .await
        .map_err(|e| DomainError::database(format!("Failed to insert workout set: {}", e)))?;

        row_to_set(&row)
    }

    async fn commit(self: Box<Self>) -> Result<(), DomainError> {
        self.tx.commit().await.map_err(|e| {
            DomainError::database(format!("Failed to commit transaction: {}", e))
        })
    }

    async fn rollback(self: Box<Self>) -> Result<(), DomainError> {
        self.tx.rollback().await.map_err(|e| {
            DomainError::database(format!("Failed to roll back transaction: {}", e))
        })
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Row mapping
// ════════════════════════════════════════════════════════════════════════════════

pub(crate) fn column<'r, T>(row: &'r PgRow, name: &str) -> Result<T, DomainError>
where
    T: sqlx::Decode<'r, Postgres> + sqlx::Type<Postgres>,
{
    row.try_get(name)
        .map_err(|e| DomainError::database(format!("Failed to get {}: {}", name, e)))
}

pub(crate) fn timestamp(row: &PgRow, name: &str) -> Result<Timestamp, DomainError> {
    let value: chrono::DateTime<chrono::Utc> = column(row, name)?;
    Ok(Timestamp::from_datetime(value))
}

fn row_to_session(row: &PgRow) -> Result<WorkoutSessionRecord, DomainError> {
    Ok(WorkoutSessionRecord {
        id: WorkoutSessionId::new(column(row, "id")?),
        user_id: UserId::new(column(row, "user_id")?),
        name: column(row, "name")?,
        description: column(row, "description")?,
        duration: column(row, "duration")?,
        created_at: timestamp(row, "created_at")?,
        updated_at: timestamp(row, "updated_at")?,
    })
}

fn row_to_workout(row: &PgRow) -> Result<WorkoutRecord, DomainError> {
    Ok(WorkoutRecord {
        id: WorkoutId::new(column(row, "id")?),
        exercise_id: ExerciseId::new(column(row, "exercise_id")?),
        session_id: WorkoutSessionId::new(column(row, "session_id")?),
        description: column(row, "description")?,
        created_at: timestamp(row, "created_at")?,
        updated_at: timestamp(row, "updated_at")?,
    })
}

fn row_to_set(row: &PgRow) -> Result<WorkoutSetRecord, DomainError> {
    Ok(WorkoutSetRecord {
        id: WorkoutSetId::new(column(row, "id")?),
        workout_id: WorkoutId::new(column(row, "workout_id")?),
        reps: column(row, "reps")?,
        weight: column(row, "weight")?,
        set_type: column(row, "set_type")?,
        set_order: column(row, "set_order")?,
        created_at: timestamp(row, "created_at")?,
        updated_at: timestamp(row, "updated_at")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pg_aggregate_database_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgAggregateDatabase>();
    }

    #[test]
    fn pg_aggregate_transaction_is_send() {
        fn assert_send<T: Send>() {}
        assert_send::<PgAggregateTransaction>();
    }
}
