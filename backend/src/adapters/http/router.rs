//! Router assembly for the REST API.
//!
//! ```text
//! /health                           public
//! /api/v1/user/{register,login}     public
//! /api/v1/exercise/...              require_auth
//! /api/v1/workoutsession/create     require_auth
//! ```
//!
//! Every request passes request-id, trace, catch-panic, timeout and CORS
//! stages before routing.

use std::any::Any;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        HeaderValue, Method, Request, StatusCode,
    },
    middleware,
    response::Response,
    routing::get,
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{AllowOrigin, Any as AnyOrigin, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::application::handlers::{
    CreateExerciseHandler, CreateWorkoutSessionHandler, ListExercisesHandler, LoginHandler,
    RegisterUserHandler,
};
use crate::ports::{
    CredentialHasher, ExerciseRepository, TokenService, UserRepository, WorkoutSessionStore,
};

use super::error::ErrorResponse;
use super::exercise::{exercise_routes, ExerciseHandlers};
use super::middleware::require_auth;
use super::user::{user_routes, UserHandlers};
use super::workout_session::{workout_session_routes, WorkoutSessionHandlers};

/// Port implementations the API is built from.
#[derive(Clone)]
pub struct AppServices {
    pub tokens: Arc<dyn TokenService>,
    pub hasher: Arc<dyn CredentialHasher>,
    pub users: Arc<dyn UserRepository>,
    pub exercises: Arc<dyn ExerciseRepository>,
    pub sessions: Arc<dyn WorkoutSessionStore>,
}

/// Cross-cutting HTTP settings.
#[derive(Debug, Clone)]
pub struct HttpSettings {
    pub request_timeout: Duration,
    /// Allowed CORS origins; empty allows any origin.
    pub cors_origins: Vec<String>,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(30),
            cors_origins: Vec::new(),
        }
    }
}

/// Routes under `/api/v1` without the cross-cutting layers.
pub fn api_router(services: &AppServices) -> Router {
    let user = UserHandlers::new(
        Arc::new(RegisterUserHandler::new(
            services.users.clone(),
            services.hasher.clone(),
        )),
        Arc::new(LoginHandler::new(
            services.users.clone(),
            services.hasher.clone(),
            services.tokens.clone(),
        )),
    );
    let exercise = ExerciseHandlers::new(
        Arc::new(CreateExerciseHandler::new(services.exercises.clone())),
        Arc::new(ListExercisesHandler::new(services.exercises.clone())),
    );
    let workout_session = WorkoutSessionHandlers::new(Arc::new(
        CreateWorkoutSessionHandler::new(services.sessions.clone()),
    ));

    // route_layer keeps unknown paths at 404 instead of 401
    let protected = Router::new()
        .nest("/exercise", exercise_routes(exercise))
        .nest("/workoutsession", workout_session_routes(workout_session))
        .route_layer(middleware::from_fn_with_state(
            services.tokens.clone(),
            require_auth,
        ));

    Router::new()
        .nest("/user", user_routes(user))
        .merge(protected)
}

/// The complete application: health check, API and middleware stack.
pub fn app_router(services: &AppServices, settings: &HttpSettings) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/api/v1", api_router(services))
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http().make_span_with(request_span))
                .layer(PropagateRequestIdLayer::x_request_id())
                .layer(CatchPanicLayer::custom(panic_response))
                .layer(TimeoutLayer::new(settings.request_timeout))
                .layer(cors_layer(&settings.cors_origins)),
        )
}

async fn health() -> &'static str {
    "ok"
}

fn request_span(request: &Request<Body>) -> tracing::Span {
    let request_id = request
        .headers()
        .get("x-request-id")
        .and_then(|value| value.to_str().ok())
        .unwrap_or("-");
    tracing::info_span!(
        "http_request",
        method = %request.method(),
        uri = %request.uri(),
        request_id = %request_id,
    )
}

fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(message) = panic.downcast_ref::<String>() {
        message.as_str()
    } else if let Some(message) = panic.downcast_ref::<&str>() {
        message
    } else {
        "unknown panic"
    };
    tracing::error!("Request handler panicked: {}", detail);

    ErrorResponse::internal("Internal error").with_status(StatusCode::INTERNAL_SERVER_ERROR)
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let allow_origin = if origins.is_empty() {
        AllowOrigin::from(AnyOrigin)
    } else {
        let parsed: Vec<HeaderValue> = origins
            .iter()
            .filter_map(|origin| match HeaderValue::from_str(origin) {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                    None
                }
            })
            .collect();
        AllowOrigin::list(parsed)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::auth::{BcryptHasher, JwtTokenService, SystemClock};
    use crate::adapters::memory::{
        InMemoryAggregateDatabase, InMemoryExerciseRepository, InMemoryUserRepository,
    };
    use crate::adapters::TransactionalWorkoutSessionStore;
    use tower::ServiceExt;

    fn services() -> AppServices {
        AppServices {
            tokens: Arc::new(JwtTokenService::new(
                b"router-test-secret-router-test-secret",
                chrono::Duration::hours(1),
                Arc::new(SystemClock),
            )),
            hasher: Arc::new(BcryptHasher::new(4)),
            users: Arc::new(InMemoryUserRepository::new()),
            exercises: Arc::new(InMemoryExerciseRepository::new()),
            sessions: Arc::new(TransactionalWorkoutSessionStore::new(Arc::new(
                InMemoryAggregateDatabase::new(),
            ))),
        }
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn health_is_public() {
        let app = app_router(&services(), &HttpSettings::default());
        let response = app.oneshot(get_request("/health")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"ok");
    }

    #[tokio::test]
    async fn responses_carry_request_id() {
        let app = app_router(&services(), &HttpSettings::default());
        let response = app.oneshot(get_request("/health")).await.unwrap();

        assert!(response.headers().contains_key("x-request-id"));
    }

    #[tokio::test]
    async fn protected_route_requires_token() {
        let app = app_router(&services(), &HttpSettings::default());
        let response = app
            .oneshot(get_request("/api/v1/exercise/getForUser"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn unknown_path_is_not_found() {
        let app = app_router(&services(), &HttpSettings::default());
        let response = app
            .oneshot(get_request("/api/v1/workoutsession/missing"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn panics_become_json_500() {
        let app = Router::new()
            .route("/boom", get(|| async { panic!("boom") as () }))
            .layer(CatchPanicLayer::custom(panic_response));

        let response = app.oneshot(get_request("/boom")).await.unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["code"], "INTERNAL_ERROR");
    }
}
