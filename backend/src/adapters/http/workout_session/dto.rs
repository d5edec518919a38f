//! HTTP DTOs for workout session endpoints.
//!
//! Wire names are camelCase. Descriptions and set types default to empty.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ExerciseId, ValidationError};
use crate::domain::workout_session::{NewWorkout, NewWorkoutSet, WorkoutSession};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to create a workout session with its workouts and sets.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateWorkoutSessionRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub duration: i32,
    #[serde(default)]
    pub workouts: Vec<WorkoutRequest>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutRequest {
    pub exercise_id: ExerciseId,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub sets: Vec<WorkoutSetRequest>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutSetRequest {
    pub reps: i32,
    pub weight: f64,
    #[serde(default)]
    pub set_type: String,
    #[serde(default)]
    pub set_order: i32,
}

impl WorkoutRequest {
    /// Validates every set and builds the domain workout.
    pub fn into_domain(self) -> Result<NewWorkout, ValidationError> {
        let sets = self
            .sets
            .into_iter()
            .map(|s| NewWorkoutSet::new(s.reps, s.weight, s.set_type, s.set_order))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(NewWorkout::new(self.exercise_id, self.description, sets))
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// `{"session": ...}`
#[derive(Debug, Clone, Serialize)]
pub struct WorkoutSessionResponse {
    pub session: WorkoutSession,
}
