//! Reassembles flat persisted rows into the nested aggregate.
//!
//! Workouts are kept in an arena (`Vec<Workout>`) with a side index from
//! workout id to arena slot, so sets can be attached by their owning foreign
//! key without parent/child references.
//!
//! Workouts keep the order they were returned in, and each workout's sets keep
//! the order they appear in the flat list. The store returns rows in insert
//! order, so the nested result mirrors the request.

use std::collections::HashMap;

use crate::domain::foundation::WorkoutId;

use super::aggregate::{Workout, WorkoutSession, WorkoutSet};
use super::records::{
    PersistedWorkoutSession, WorkoutRecord, WorkoutSessionRecord, WorkoutSetRecord,
};

/// Builds the nested session from the rows of one committed create.
///
/// # Panics
///
/// If a set references a workout id that is not among `workouts`. The store
/// only returns children it inserted under the same transaction, so this is a
/// broken store invariant, not a user error.
pub fn assemble(
    session: WorkoutSessionRecord,
    workouts: Vec<WorkoutRecord>,
    sets: Vec<WorkoutSetRecord>,
) -> WorkoutSession {
    let mut index: HashMap<WorkoutId, usize> = HashMap::with_capacity(workouts.len());
    let mut arena: Vec<Workout> = Vec::with_capacity(workouts.len());

    for workout in workouts {
        index.insert(workout.id, arena.len());
        arena.push(Workout {
            id: workout.id,
            exercise_id: workout.exercise_id,
            session_id: workout.session_id,
            description: workout.description,
            sets: Vec::new(),
            created_at: workout.created_at,
            updated_at: workout.updated_at,
        });
    }

    for set in sets {
        let Some(&slot) = index.get(&set.workout_id) else {
            panic!(
                "workout set {} references workout {} which is not part of session {}",
                set.id, set.workout_id, session.id
            );
        };
        arena[slot].sets.push(WorkoutSet {
            id: set.id,
            workout_id: set.workout_id,
            reps: set.reps,
            weight: set.weight,
            set_type: set.set_type,
            set_order: set.set_order,
            created_at: set.created_at,
            updated_at: set.updated_at,
        });
    }

    WorkoutSession {
        id: session.id,
        user_id: session.user_id,
        name: session.name,
        description: session.description,
        duration: session.duration,
        workouts: arena,
        created_at: session.created_at,
        updated_at: session.updated_at,
    }
}

impl PersistedWorkoutSession {
    /// Consumes the flat rows and returns the nested aggregate.
    pub fn into_nested(self) -> WorkoutSession {
        assemble(self.session, self.workouts, self.sets)
    }
}
