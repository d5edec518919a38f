//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! - `PgAggregateDatabase` - Transactions for the workout session aggregate
//! - `PostgresUserRepository` - User accounts
//! - `PostgresExerciseRepository` - Exercise catalog

mod aggregate_database;
mod exercise_repository;
mod user_repository;

pub use aggregate_database::{PgAggregateDatabase, PgAggregateTransaction};
pub use exercise_repository::PostgresExerciseRepository;
pub use user_repository::PostgresUserRepository;
