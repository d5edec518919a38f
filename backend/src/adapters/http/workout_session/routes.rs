//! HTTP routes for workout session endpoints.

use axum::{routing::post, Router};

use super::handlers::{create_workout_session, WorkoutSessionHandlers};

/// Creates the workout session router. Mount behind the auth gate.
pub fn workout_session_routes(handlers: WorkoutSessionHandlers) -> Router {
    Router::new()
        .route("/create", post(create_workout_session))
        .with_state(handlers)
}
