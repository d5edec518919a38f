//! HTTP adapter for exercise endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{CreateExerciseRequest, ExerciseListResponse, ExerciseResponse, ListExercisesParams};
pub use handlers::ExerciseHandlers;
pub use routes::exercise_routes;
