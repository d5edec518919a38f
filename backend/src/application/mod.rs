//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.

pub mod handlers;

pub use handlers::{
    CreateExerciseCommand, CreateExerciseHandler, CreateWorkoutSessionCommand,
    CreateWorkoutSessionHandler, ListExercisesHandler, ListExercisesQuery, LoginCommand,
    LoginHandler, RegisterUserCommand, RegisterUserHandler,
};
