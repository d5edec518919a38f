//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod account;
pub mod exercise;
pub mod workout_session;

pub use account::{LoginCommand, LoginHandler, RegisterUserCommand, RegisterUserHandler};
pub use exercise::{
    CreateExerciseCommand, CreateExerciseHandler, ListExercisesHandler, ListExercisesQuery,
};
pub use workout_session::{CreateWorkoutSessionCommand, CreateWorkoutSessionHandler};
