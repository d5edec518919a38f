//! Transactional persistence seam for the workout session aggregate.
//!
//! The store algorithm (insert session, then each workout, then each set)
//! is written once against these traits. Each insert returns the persisted
//! row with its generated id and timestamps, since later inserts reference
//! ids produced by earlier ones.
//!
//! # Transaction lifetime
//!
//! An `AggregateTransaction` owns one pooled connection from `begin` until
//! `commit` or `rollback`. Dropping it without committing rolls back, which
//! is how a cancelled request (dropped future, timeout) aborts the write.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, WorkoutId, WorkoutSessionId};
use crate::domain::workout_session::{
    NewWorkout, NewWorkoutSession, NewWorkoutSet, WorkoutRecord, WorkoutSessionRecord,
    WorkoutSetRecord,
};

/// Opens transactions for aggregate writes.
#[async_trait]
pub trait AggregateDatabase: Send + Sync {
    /// Borrows a connection and starts a transaction on it.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` if no connection or transaction is available
    async fn begin(&self) -> Result<Box<dyn AggregateTransaction>, DomainError>;
}

/// One open transaction. Writes are visible only inside it until commit.
#[async_trait]
pub trait AggregateTransaction: Send {
    /// Inserts the session row (`name`, `user_id`, `description`, `duration`).
    async fn insert_session(
        &mut self,
        session: &NewWorkoutSession,
    ) -> Result<WorkoutSessionRecord, DomainError>;

    /// Inserts one workout row owned by `session_id`.
    async fn insert_workout(
        &mut self,
        session_id: WorkoutSessionId,
        workout: &NewWorkout,
    ) -> Result<WorkoutRecord, DomainError>;

    /// Inserts one set row owned by `workout_id`, storing `set_order` as given.
    async fn insert_set(
        &mut self,
        workout_id: WorkoutId,
        set: &NewWorkoutSet,
    ) -> Result<WorkoutSetRecord, DomainError>;

    /// Makes every write of this transaction durable.
    async fn commit(self: Box<Self>) -> Result<(), DomainError>;

    /// Discards every write of this transaction.
    async fn rollback(self: Box<Self>) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Trait object safety test
    #[test]
    fn aggregate_database_is_object_safe() {
        fn _accepts_dyn(_db: &dyn AggregateDatabase) {}
    }

    #[test]
    fn aggregate_transaction_is_object_safe() {
        fn _accepts_dyn(_tx: Box<dyn AggregateTransaction>) {}
    }
}
