//! Workout session domain module.
//!
//! A workout session is the root of an aggregate of workouts and their sets.
//! It is created in one request and persisted all-or-nothing; the store hands
//! back flat rows which `assemble` turns into the nested shape returned to
//! clients.

mod aggregate;
mod assembler;
mod errors;
mod records;

pub use aggregate::{
    NewWorkout, NewWorkoutSession, NewWorkoutSet, Workout, WorkoutSession, WorkoutSet,
    MAX_NAME_LENGTH,
};
pub use assembler::assemble;
pub use errors::WorkoutSessionError;
pub use records::{
    PersistedWorkoutSession, WorkoutRecord, WorkoutSessionRecord, WorkoutSetRecord,
};
