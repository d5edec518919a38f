//! Workout session aggregate.
//!
//! A `WorkoutSession` is the root; it owns its `Workout`s, which own their
//! `WorkoutSet`s. Children are only ever created together with their parent,
//! so the aggregate has two shapes:
//!
//! - `New*` values describe what a client asked to record. They carry no ids
//!   and their owner is always the authenticated caller.
//! - The nested `WorkoutSession` / `Workout` / `WorkoutSet` values are what was
//!   persisted, including generated ids and timestamps.

use serde::Serialize;

use crate::domain::foundation::{
    ExerciseId, Timestamp, UserId, ValidationError, WorkoutId, WorkoutSessionId, WorkoutSetId,
};

/// Maximum length for a session name.
pub const MAX_NAME_LENGTH: usize = 255;

// ─────────────────────────────────────────────────────────────────────────────
// Input shape
// ─────────────────────────────────────────────────────────────────────────────

/// A set as supplied by the client.
///
/// `set_order` is advisory display ordering; it is stored exactly as given
/// and never re-derived or checked for uniqueness.
#[derive(Debug, Clone, PartialEq)]
pub struct NewWorkoutSet {
    pub reps: i32,
    pub weight: f64,
    pub set_type: String,
    pub set_order: i32,
}

impl NewWorkoutSet {
    /// Creates a validated set.
    ///
    /// # Errors
    ///
    /// - `OutOfRange` if `reps` is negative
    /// - `InvalidFormat` if `weight` is negative or not finite
    pub fn new(
        reps: i32,
        weight: f64,
        set_type: impl Into<String>,
        set_order: i32,
    ) -> Result<Self, ValidationError> {
        if reps < 0 {
            return Err(ValidationError::out_of_range(
                "reps",
                0,
                i64::from(i32::MAX),
                i64::from(reps),
            ));
        }
        if !weight.is_finite() || weight < 0.0 {
            return Err(ValidationError::invalid_format(
                "weight",
                "must be a finite, non-negative number",
            ));
        }
        Ok(Self {
            reps,
            weight,
            set_type: set_type.into(),
            set_order,
        })
    }
}

/// A workout as supplied by the client, referencing a pre-existing exercise.
#[derive(Debug, Clone, PartialEq)]
pub struct NewWorkout {
    pub exercise_id: ExerciseId,
    pub description: String,
    pub sets: Vec<NewWorkoutSet>,
}

impl NewWorkout {
    pub fn new(
        exercise_id: ExerciseId,
        description: impl Into<String>,
        sets: Vec<NewWorkoutSet>,
    ) -> Self {
        Self {
            exercise_id,
            description: description.into(),
            sets,
        }
    }
}

/// A session to be created, owned by an already-authenticated user.
///
/// # Invariants
///
/// - `user_id` is the identity resolved by the auth gate
/// - `name` is non-blank and at most `MAX_NAME_LENGTH` characters
/// - `duration` is non-negative
#[derive(Debug, Clone, PartialEq)]
pub struct NewWorkoutSession {
    user_id: UserId,
    name: String,
    description: String,
    duration: i32,
    workouts: Vec<NewWorkout>,
}

impl NewWorkoutSession {
    /// Creates a validated session request.
    ///
    /// An empty `workouts` list is a valid aggregate.
    pub fn new(
        user_id: UserId,
        name: impl Into<String>,
        description: impl Into<String>,
        duration: i32,
        workouts: Vec<NewWorkout>,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        if name.chars().count() > MAX_NAME_LENGTH {
            return Err(ValidationError::invalid_format(
                "name",
                format!("must be at most {} characters", MAX_NAME_LENGTH),
            ));
        }
        if duration < 0 {
            return Err(ValidationError::out_of_range(
                "duration",
                0,
                i64::from(i32::MAX),
                i64::from(duration),
            ));
        }

        Ok(Self {
            user_id,
            name,
            description: description.into(),
            duration,
            workouts,
        })
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn duration(&self) -> i32 {
        self.duration
    }

    pub fn workouts(&self) -> &[NewWorkout] {
        &self.workouts
    }

    /// Total number of sets across all workouts.
    pub fn set_count(&self) -> usize {
        self.workouts.iter().map(|w| w.sets.len()).sum()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Persisted, nested shape
// ─────────────────────────────────────────────────────────────────────────────

/// A persisted set.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutSet {
    pub id: WorkoutSetId,
    pub workout_id: WorkoutId,
    pub reps: i32,
    pub weight: f64,
    pub set_type: String,
    pub set_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A persisted workout with its sets.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Workout {
    pub id: WorkoutId,
    pub exercise_id: ExerciseId,
    pub session_id: WorkoutSessionId,
    pub description: String,
    pub sets: Vec<WorkoutSet>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A persisted session with its workouts, as returned to the caller.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutSession {
    pub id: WorkoutSessionId,
    pub user_id: UserId,
    pub name: String,
    pub description: String,
    pub duration: i32,
    pub workouts: Vec<Workout>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl WorkoutSession {
    /// Total number of sets across all workouts.
    pub fn set_count(&self) -> usize {
        self.workouts.iter().map(|w| w.sets.len()).sum()
    }
}
