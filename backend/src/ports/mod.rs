//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Auth Ports
//!
//! - `TokenService` - Issue and validate bearer tokens
//! - `CredentialHasher` - One-way password hashing
//! - `Clock` - Injectable source of the current time
//!
//! ## Persistence Ports
//!
//! - `AggregateDatabase` / `AggregateTransaction` - Transactional aggregate writes
//! - `WorkoutSessionStore` - All-or-nothing session creation
//! - `UserRepository`, `ExerciseRepository` - Simple row stores

mod aggregate_database;
mod clock;
mod credential_hasher;
mod exercise_repository;
mod token_service;
mod user_repository;
mod workout_session_store;

pub use aggregate_database::{AggregateDatabase, AggregateTransaction};
pub use clock::Clock;
pub use credential_hasher::CredentialHasher;
pub use exercise_repository::ExerciseRepository;
pub use token_service::TokenService;
pub use user_repository::UserRepository;
pub use workout_session_store::WorkoutSessionStore;
