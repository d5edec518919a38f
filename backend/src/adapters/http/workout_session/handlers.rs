//! HTTP handlers for workout session endpoints.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{json_rejection, status_for, ErrorResponse};
use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::workout_session::{
    CreateWorkoutSessionCommand, CreateWorkoutSessionHandler,
};
use crate::domain::workout_session::WorkoutSessionError;

use super::dto::{CreateWorkoutSessionRequest, WorkoutSessionResponse};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct WorkoutSessionHandlers {
    create_handler: Arc<CreateWorkoutSessionHandler>,
}

impl WorkoutSessionHandlers {
    pub fn new(create_handler: Arc<CreateWorkoutSessionHandler>) -> Self {
        Self { create_handler }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/v1/workoutsession/create - Create a session with workouts and sets
pub async fn create_workout_session(
    State(handlers): State<WorkoutSessionHandlers>,
    RequireAuth(user): RequireAuth,
    payload: Result<Json<CreateWorkoutSessionRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return json_rejection(rejection),
    };

    let workouts = match req
        .workouts
        .into_iter()
        .map(|w| w.into_domain())
        .collect::<Result<Vec<_>, _>>()
    {
        Ok(workouts) => workouts,
        Err(e) => return handle_workout_session_error(e.into()),
    };

    // Owner always comes from the token, never the body.
    let cmd = CreateWorkoutSessionCommand {
        user_id: user.id,
        name: req.name,
        description: req.description,
        duration: req.duration,
        workouts,
    };

    match handlers.create_handler.handle(cmd).await {
        Ok(session) => {
            (StatusCode::OK, Json(WorkoutSessionResponse { session })).into_response()
        }
        Err(e) => handle_workout_session_error(e),
    }
}

fn handle_workout_session_error(error: WorkoutSessionError) -> Response {
    let code = error.code();
    let body = match error {
        WorkoutSessionError::ValidationFailed { field, message } => {
            ErrorResponse::validation(&field, message)
        }
        // Details were logged by the store.
        _ => ErrorResponse::new(code, "Failed to save workout session"),
    };
    body.with_status(status_for(code))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_maps_to_400() {
        let response =
            handle_workout_session_error(WorkoutSessionError::validation("name", "empty"));
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn persistence_failure_body_uses_internal_error_code() {
        let response = handle_workout_session_error(WorkoutSessionError::CommitFailed("x".into()));
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(json["code"], "INTERNAL_ERROR");
        assert_eq!(json["message"], "Failed to save workout session");
    }

    #[test]
    fn persistence_failures_map_to_500() {
        let errors = [
            WorkoutSessionError::BeginFailed("x".into()),
            WorkoutSessionError::SessionInsertFailed("x".into()),
            WorkoutSessionError::WorkoutInsertFailed {
                position: 0,
                message: "x".into(),
            },
            WorkoutSessionError::CommitFailed("x".into()),
        ];
        for error in errors {
            assert_eq!(
                handle_workout_session_error(error).status(),
                StatusCode::INTERNAL_SERVER_ERROR
            );
        }
    }
}
