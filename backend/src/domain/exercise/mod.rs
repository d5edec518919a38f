//! Exercise catalog module.
//!
//! Exercises are created per user and referenced by workouts. Only create and
//! paged listing are supported.

mod catalog;
mod errors;

pub use catalog::{Exercise, NewExercise, Page, DEFAULT_PAGE_LIMIT};
pub use errors::ExerciseError;
