//! In-memory implementation of AggregateDatabase for testing.
//!
//! Behaves like a transactional database closely enough to exercise the
//! store algorithm without PostgreSQL:
//!
//! - ids come from shared sequences and are not reused after rollback
//! - inserts are staged on the transaction and only become visible on commit
//! - dropping a transaction discards its staged rows
//!
//! Failures can be injected at any step, and every insert can be delayed so
//! tests can cancel a request while its transaction is open.
//!
//! # Panics
//!
//! Methods may panic if internal locks are poisoned. This is acceptable
//! for test code but this adapter should NOT be used in production.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use crate::domain::foundation::{
    DomainError, Timestamp, WorkoutId, WorkoutSessionId, WorkoutSetId,
};
use crate::domain::workout_session::{
    NewWorkout, NewWorkoutSession, NewWorkoutSet, WorkoutRecord, WorkoutSessionRecord,
    WorkoutSetRecord,
};
use crate::ports::{AggregateDatabase, AggregateTransaction};

/// A step at which the in-memory database can be told to fail.
///
/// Positions are zero-based and follow insert order within one transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePoint {
    Begin,
    SessionInsert,
    WorkoutInsert { position: usize },
    SetInsert { workout_position: usize, set_position: usize },
    Commit,
}

#[derive(Debug, Default)]
struct Tables {
    sessions: Vec<WorkoutSessionRecord>,
    workouts: Vec<WorkoutRecord>,
    sets: Vec<WorkoutSetRecord>,
    next_session_id: i64,
    next_workout_id: i64,
    next_set_id: i64,
}

impl Tables {
    fn next_session_id(&mut self) -> WorkoutSessionId {
        self.next_session_id += 1;
        WorkoutSessionId::new(self.next_session_id)
    }

    fn next_workout_id(&mut self) -> WorkoutId {
        self.next_workout_id += 1;
        WorkoutId::new(self.next_workout_id)
    }

    fn next_set_id(&mut self) -> WorkoutSetId {
        self.next_set_id += 1;
        WorkoutSetId::new(self.next_set_id)
    }
}

/// In-memory aggregate database.
#[derive(Default)]
pub struct InMemoryAggregateDatabase {
    tables: Arc<Mutex<Tables>>,
    failures: Mutex<Vec<FailurePoint>>,
    step_delay: Mutex<Option<Duration>>,
    open_transactions: Arc<AtomicUsize>,
}

impl InMemoryAggregateDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every transaction begun from now on fail at `point`.
    pub fn fail_at(self, point: FailurePoint) -> Self {
        self.inject_failure(point);
        self
    }

    /// Sleeps for `delay` before every insert.
    pub fn with_step_delay(self, delay: Duration) -> Self {
        *self.step_delay.lock().expect("InMemoryAggregateDatabase: delay lock poisoned") =
            Some(delay);
        self
    }

    pub fn inject_failure(&self, point: FailurePoint) {
        self.failures
            .lock()
            .expect("InMemoryAggregateDatabase: failures lock poisoned")
            .push(point);
    }

    pub fn clear_failures(&self) {
        self.failures
            .lock()
            .expect("InMemoryAggregateDatabase: failures lock poisoned")
            .clear();
    }

    // === Test Helpers ===

    pub fn committed_sessions(&self) -> Vec<WorkoutSessionRecord> {
        self.tables().sessions.clone()
    }

    pub fn committed_workouts(&self) -> Vec<WorkoutRecord> {
        self.tables().workouts.clone()
    }

    pub fn committed_sets(&self) -> Vec<WorkoutSetRecord> {
        self.tables().sets.clone()
    }

    /// True if nothing has ever been committed.
    pub fn is_empty(&self) -> bool {
        let tables = self.tables();
        tables.sessions.is_empty() && tables.workouts.is_empty() && tables.sets.is_empty()
    }

    /// Transactions begun and not yet committed, rolled back, or dropped.
    pub fn open_transactions(&self) -> usize {
        self.open_transactions.load(Ordering::SeqCst)
    }

    fn tables(&self) -> std::sync::MutexGuard<'_, Tables> {
        self.tables
            .lock()
            .expect("InMemoryAggregateDatabase: tables lock poisoned")
    }
}

#[async_trait]
impl AggregateDatabase for InMemoryAggregateDatabase {
    async fn begin(&self) -> Result<Box<dyn AggregateTransaction>, DomainError> {
        let failures = self
            .failures
            .lock()
            .expect("InMemoryAggregateDatabase: failures lock poisoned")
            .clone();
        if failures.contains(&FailurePoint::Begin) {
            return Err(DomainError::database("injected failure: begin"));
        }

        let step_delay = *self
            .step_delay
            .lock()
            .expect("InMemoryAggregateDatabase: delay lock poisoned");

        self.open_transactions.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(InMemoryAggregateTransaction {
            tables: Arc::clone(&self.tables),
            open_transactions: Arc::clone(&self.open_transactions),
            failures,
            step_delay,
            staged: Staged::default(),
            workout_positions: HashMap::new(),
        }))
    }
}

#[derive(Default)]
struct Staged {
    sessions: Vec<WorkoutSessionRecord>,
    workouts: Vec<WorkoutRecord>,
    sets: Vec<WorkoutSetRecord>,
}

/// One open in-memory transaction.
pub struct InMemoryAggregateTransaction {
    tables: Arc<Mutex<Tables>>,
    open_transactions: Arc<AtomicUsize>,
    failures: Vec<FailurePoint>,
    step_delay: Option<Duration>,
    staged: Staged,
    // workout id -> (position, sets inserted so far)
    workout_positions: HashMap<WorkoutId, (usize, usize)>,
}

impl InMemoryAggregateTransaction {
    async fn step(&self, point: FailurePoint) -> Result<(), DomainError> {
        if let Some(delay) = self.step_delay {
            tokio::time::sleep(delay).await;
        }
        if self.failures.contains(&point) {
            return Err(DomainError::database(format!("injected failure: {:?}", point)));
        }
        Ok(())
    }

    fn tables(&self) -> std::sync::MutexGuard<'_, Tables> {
        self.tables
            .lock()
            .expect("InMemoryAggregateDatabase: tables lock poisoned")
    }

    fn session_exists(&self, id: WorkoutSessionId) -> bool {
        self.staged.sessions.iter().any(|s| s.id == id)
            || self.tables().sessions.iter().any(|s| s.id == id)
    }
}

#[async_trait]
impl AggregateTransaction for InMemoryAggregateTransaction {
    async fn insert_session(
        &mut self,
        session: &NewWorkoutSession,
    ) -> Result<WorkoutSessionRecord, DomainError> {
        self.step(FailurePoint::SessionInsert).await?;

        let now = Timestamp::now();
        let record = WorkoutSessionRecord {
            id: self.tables().next_session_id(),
            user_id: session.user_id(),
            name: session.name().to_string(),
            description: session.description().to_string(),
            duration: session.duration(),
            created_at: now,
            updated_at: now,
        };
        self.staged.sessions.push(record.clone());
        Ok(record)
    }

    async fn insert_workout(
        &mut self,
        session_id: WorkoutSessionId,
        workout: &NewWorkout,
    ) -> Result<WorkoutRecord, DomainError> {
        let position = self.staged.workouts.len();
        self.step(FailurePoint::WorkoutInsert { position }).await?;

        if !self.session_exists(session_id) {
            return Err(DomainError::database(format!(
                "foreign key violation: session {} does not exist",
                session_id
            )));
        }

        let now = Timestamp::now();
        let record = WorkoutRecord {
            id: self.tables().next_workout_id(),
            exercise_id: workout.exercise_id,
            session_id,
            description: workout.description.clone(),
            created_at: now,
            updated_at: now,
        };
        self.workout_positions.insert(record.id, (position, 0));
        self.staged.workouts.push(record.clone());
        Ok(record)
    }

    async fn insert_set(
        &mut self,
        workout_id: WorkoutId,
        set: &NewWorkoutSet,
    ) -> Result<WorkoutSetRecord, DomainError> {
        let Some(&(workout_position, set_position)) = self.workout_positions.get(&workout_id)
        else {
            return Err(DomainError::database(format!(
                "foreign key violation: workout {} does not exist",
                workout_id
            )));
        };
        self.step(FailurePoint::SetInsert {
            workout_position,
            set_position,
        })
        .await?;

        let now = Timestamp::now();
        let record = WorkoutSetRecord {
            id: self.tables().next_set_id(),
            workout_id,
            reps: set.reps,
            weight: set.weight,
            set_type: set.set_type.clone(),
            set_order: set.set_order,
            created_at: now,
            updated_at: now,
        };
        self.workout_positions
            .insert(workout_id, (workout_position, set_position + 1));
        self.staged.sets.push(record.clone());
        Ok(record)
    }

    async fn commit(mut self: Box<Self>) -> Result<(), DomainError> {
        if self.failures.contains(&FailurePoint::Commit) {
            return Err(DomainError::database("injected failure: commit"));
        }

        let staged = std::mem::take(&mut self.staged);
        let mut tables = self.tables();
        tables.sessions.extend(staged.sessions);
        tables.workouts.extend(staged.workouts);
        tables.sets.extend(staged.sets);
        Ok(())
    }

    async fn rollback(self: Box<Self>) -> Result<(), DomainError> {
        Ok(())
    }
}

impl Drop for InMemoryAggregateTransaction {
    fn drop(&mut self) {
        self.open_transactions.fetch_sub(1, Ordering::SeqCst);
    }
}
