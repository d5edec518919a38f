//! HTTP adapter for workout session endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    CreateWorkoutSessionRequest, WorkoutRequest, WorkoutSessionResponse, WorkoutSetRequest,
};
pub use handlers::WorkoutSessionHandlers;
pub use routes::workout_session_routes;
