//! Flat persisted rows of the workout session aggregate.
//!
//! The store writes one row per entity and hands these back unchanged; each
//! child carries its owning foreign key instead of a reference to its parent.
//! The assembler turns them back into the nested aggregate.

use crate::domain::foundation::{
    ExerciseId, Timestamp, UserId, WorkoutId, WorkoutSessionId, WorkoutSetId,
};

/// Row of the `sessions` table.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutSessionRecord {
    pub id: WorkoutSessionId,
    pub user_id: UserId,
    pub name: String,
    pub description: String,
    pub duration: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Row of the `workouts` table.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutRecord {
    pub id: WorkoutId,
    pub exercise_id: ExerciseId,
    pub session_id: WorkoutSessionId,
    pub description: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Row of the `workout_sets` table.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutSetRecord {
    pub id: WorkoutSetId,
    pub workout_id: WorkoutId,
    pub reps: i32,
    pub weight: f64,
    pub set_type: String,
    pub set_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Everything one committed create produced.
///
/// The flat lists carry no ordering guarantee beyond belonging to the same
/// committed transaction.
#[derive(Debug, Clone, PartialEq)]
pub struct PersistedWorkoutSession {
    pub session: WorkoutSessionRecord,
    pub workouts: Vec<WorkoutRecord>,
    pub sets: Vec<WorkoutSetRecord>,
}
