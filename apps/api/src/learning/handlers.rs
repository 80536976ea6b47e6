use std::collections::HashMap;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::learning::filter::ResourceFilter;
use crate::models::learning::{LearningProgressRow, LearningResourceRow};
use crate::progress::handlers::UserIdQuery;
use crate::progress::models::STATUS_IN_PROGRESS;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct StartResourceRequest {
    pub user_id: Uuid,
}

/// GET /api/v1/resources
///
/// Catalog ordered by rating (best first), narrowed by `category`,
/// `resource_type` and `difficulty`.
pub async fn handle_list_resources(
    State(state): State<AppState>,
    Query(filter): Query<ResourceFilter>,
) -> Result<Json<Vec<LearningResourceRow>>, AppError> {
    let resources = sqlx::query_as::<_, LearningResourceRow>(
        r#"
        SELECT lr.id, lr.title, lr.description, lr.resource_type, lr.url, lr.provider,
               lr.skill_id, lr.difficulty_level, lr.duration_hours::float8 AS duration_hours,
               lr.rating::float8 AS rating, lr.is_free,
               s.name AS skill_name, s.category AS skill_category
        FROM learning_resources lr
        LEFT JOIN skills s ON s.id = lr.skill_id
        ORDER BY lr.rating DESC NULLS LAST
        "#,
    )
    .fetch_all(&state.db)
    .await?;

    Ok(Json(filter.apply(resources)))
}

/// GET /api/v1/resources/progress
///
/// The user's progress rows keyed by resource id.
pub async fn handle_get_progress(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<HashMap<Uuid, LearningProgressRow>>, AppError> {
    let rows = sqlx::query_as::<_, LearningProgressRow>(
        "SELECT * FROM user_learning_progress WHERE user_id = $1",
    )
    .bind(params.user_id)
    .fetch_all(&state.db)
    .await?;

    Ok(Json(
        rows.into_iter().map(|row| (row.resource_id, row)).collect(),
    ))
}

/// POST /api/v1/resources/:id/start
pub async fn handle_start_resource(
    State(state): State<AppState>,
    Path(resource_id): Path<Uuid>,
    Json(request): Json<StartResourceRequest>,
) -> Result<Json<LearningProgressRow>, AppError> {
    let exists: bool =
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM learning_resources WHERE id = $1)")
            .bind(resource_id)
            .fetch_one(&state.db)
            .await?;
    if !exists {
        return Err(AppError::NotFound(format!(
            "Learning resource {resource_id} not found"
        )));
    }

    let progress = sqlx::query_as::<_, LearningProgressRow>(
        r#"
        INSERT INTO user_learning_progress (user_id, resource_id, status, progress_percentage)
        VALUES ($1, $2, $3, 0)
        ON CONFLICT (user_id, resource_id) DO UPDATE
        SET status = EXCLUDED.status,
            progress_percentage = EXCLUDED.progress_percentage
        RETURNING *
        "#,
    )
    .bind(request.user_id)
    .bind(resource_id)
    .bind(STATUS_IN_PROGRESS)
    .fetch_one(&state.db)
    .await?;

    info!(user_id = %request.user_id, %resource_id, "Learning resource started");

    Ok(Json(progress))
}
