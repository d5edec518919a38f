//! HTTP handlers for exercise endpoints.

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{json_rejection, query_rejection, status_for, ErrorResponse};
use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::exercise::{
    CreateExerciseCommand, CreateExerciseHandler, ListExercisesHandler, ListExercisesQuery,
};
use crate::domain::exercise::ExerciseError;

use super::dto::{
    CreateExerciseRequest, ExerciseListResponse, ExerciseResponse, ListExercisesParams,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct ExerciseHandlers {
    create_handler: Arc<CreateExerciseHandler>,
    list_handler: Arc<ListExercisesHandler>,
}

impl ExerciseHandlers {
    pub fn new(
        create_handler: Arc<CreateExerciseHandler>,
        list_handler: Arc<ListExercisesHandler>,
    ) -> Self {
        Self {
            create_handler,
            list_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/v1/exercise/create - Add an exercise to the caller's catalog
pub async fn create_exercise(
    State(handlers): State<ExerciseHandlers>,
    RequireAuth(user): RequireAuth,
    payload: Result<Json<CreateExerciseRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return json_rejection(rejection),
    };

    let cmd = CreateExerciseCommand {
        user_id: user.id,
        name: req.name,
        description: req.description,
        target_muscle: req.target_muscle,
        picture_url: req.picture_url,
    };

    match handlers.create_handler.handle(cmd).await {
        Ok(exercise) => (StatusCode::OK, Json(ExerciseResponse { exercise })).into_response(),
        Err(e) => handle_exercise_error(e),
    }
}

/// GET /api/v1/exercise/getForUser?offset=&limit= - Page through the caller's exercises
pub async fn list_exercises(
    State(handlers): State<ExerciseHandlers>,
    RequireAuth(user): RequireAuth,
    params: Result<Query<ListExercisesParams>, QueryRejection>,
) -> Response {
    let Query(params) = match params {
        Ok(params) => params,
        Err(rejection) => return query_rejection(rejection),
    };

    let query = ListExercisesQuery {
        user_id: user.id,
        offset: params.offset,
        limit: params.limit,
    };

    match handlers.list_handler.handle(query).await {
        Ok(exercises) => (StatusCode::OK, Json(ExerciseListResponse { exercises })).into_response(),
        Err(e) => handle_exercise_error(e),
    }
}

fn handle_exercise_error(error: ExerciseError) -> Response {
    let code = error.code();
    let body = match error {
        ExerciseError::ValidationFailed { field, message } => ErrorResponse::validation(&field, message),
        ExerciseError::Infrastructure(msg) => {
            tracing::error!("Exercise request failed: {}", msg);
            ErrorResponse::new(code, "Internal error")
        }
    };
    body.with_status(status_for(code))
}
