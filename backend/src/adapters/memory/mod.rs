//! In-memory adapters for tests and local development without a database.

mod aggregate_database;
mod exercise_repository;
mod user_repository;

pub use aggregate_database::{
    FailurePoint, InMemoryAggregateDatabase, InMemoryAggregateTransaction,
};
pub use exercise_repository::InMemoryExerciseRepository;
pub use user_repository::InMemoryUserRepository;
