//! Exercise command and query handlers.

mod create_exercise;
mod list_exercises;

pub use create_exercise::{CreateExerciseCommand, CreateExerciseHandler};
pub use list_exercises::{ListExercisesHandler, ListExercisesQuery};
