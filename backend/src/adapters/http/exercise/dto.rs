//! HTTP DTOs for exercise endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::exercise::Exercise;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateExerciseRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub target_muscle: String,
    #[serde(default)]
    pub picture_url: String,
}

/// Query parameters for listing exercises.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListExercisesParams {
    #[serde(default)]
    pub offset: Option<i64>,
    #[serde(default)]
    pub limit: Option<i64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExerciseResponse {
    pub exercise: Exercise,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExerciseListResponse {
    pub exercises: Vec<Exercise>,
}
