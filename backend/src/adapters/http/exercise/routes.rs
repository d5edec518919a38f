//! HTTP routes for exercise endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{create_exercise, list_exercises, ExerciseHandlers};

/// Creates the exercise router. Mount behind the auth gate.
pub fn exercise_routes(handlers: ExerciseHandlers) -> Router {
    Router::new()
        .route("/create", post(create_exercise))
        .route("/getForUser", get(list_exercises))
        .with_state(handlers)
}
