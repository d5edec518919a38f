//! PostgreSQL implementation of ExerciseRepository.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;

use super::aggregate_database::{column, timestamp};
use crate::domain::exercise::{Exercise, NewExercise, Page};
use crate::domain::foundation::{DomainError, ExerciseId, UserId};
use crate::ports::ExerciseRepository;

/// PostgreSQL implementation of ExerciseRepository.
#[derive(Clone)]
pub struct PostgresExerciseRepository {
    pool: PgPool,
}

impl PostgresExerciseRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ExerciseRepository for PostgresExerciseRepository {
    async fn create(&self, exercise: &NewExercise) -> Result<Exercise, DomainError> {
        let row = sqlx::query(
            r#"
            INSERT INTO exercises (name, description, target_muscle, picture_url, user_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, user_id, name, description, target_muscle, picture_url,
                      created_at, updated_at
            "#,
        )
        .bind(&exercise.name)
        .bind(&exercise.description)
        .bind(&exercise.target_muscle)
        .bind(&exercise.picture_url)
        .bind(exercise.user_id.as_i64())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to insert exercise: {}", e)))?;

        row_to_exercise(&row)
    }

    async fn list_for_user(
        &self,
        user_id: UserId,
        page: Page,
    ) -> Result<Vec<Exercise>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, user_id, name, description, target_muscle, picture_url,
                   created_at, updated_at
            FROM exercises
            WHERE user_id = $1
            ORDER BY id
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(user_id.as_i64())
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to list exercises: {}", e)))?;

        rows.iter().map(row_to_exercise).collect()
    }
}

fn row_to_exercise(row: &PgRow) -> Result<Exercise, DomainError> {
    Ok(Exercise {
        id: ExerciseId::new(column(row, "id")?),
        user_id: UserId::new(column(row, "user_id")?),
        name: column(row, "name")?,
        description: column(row, "description")?,
        target_muscle: column(row, "target_muscle")?,
        picture_url: column(row, "picture_url")?,
        created_at: timestamp(row, "created_at")?,
        updated_at: timestamp(row, "updated_at")?,
    })
}
