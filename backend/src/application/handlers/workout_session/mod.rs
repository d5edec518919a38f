//! Workout session command handlers.

mod create_workout_session;

pub use create_workout_session::{CreateWorkoutSessionCommand, CreateWorkoutSessionHandler};
