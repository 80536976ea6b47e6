//! Axum route handlers for the Assessment API.

use std::collections::HashMap;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::assessment::catalog::{sample_questions, QuestionView};
use crate::assessment::scoring::{review_answers, score_assessment, AnswerReview};
use crate::errors::AppError;
use crate::models::assessment::{AssessmentRow, CompletedAssessmentRow, UserAssessmentRow};
use crate::progress::handlers::UserIdQuery;
use crate::progress::models::FALLBACK_ASSESSMENT_TITLE;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct QuestionsResponse {
    pub assessment: AssessmentRow,
    pub questions: Vec<QuestionView>,
}

#[derive(Debug, Deserialize)]
pub struct SubmitRequest {
    pub user_id: Uuid,
    /// question id → selected option text
    #[serde(default)]
    pub answers: HashMap<String, String>,
}

#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub attempt: UserAssessmentRow,
    pub score: i32,
    pub total_points: i32,
    pub percent: i64,
    pub passed: bool,
    pub review: Vec<AnswerReview>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/assessments
pub async fn handle_list_assessments(
    State(state): State<AppState>,
) -> Result<Json<Vec<AssessmentRow>>, AppError> {
    let assessments = sqlx::query_as::<_, AssessmentRow>(
        "SELECT * FROM assessments ORDER BY created_at DESC",
    )
    .fetch_all(&state.db)
    .await?;

    Ok(Json(assessments))
}

/// GET /api/v1/assessments/:id/questions
pub async fn handle_get_questions(
    State(state): State<AppState>,
    Path(assessment_id): Path<Uuid>,
) -> Result<Json<QuestionsResponse>, AppError> {
    let assessment = find_assessment(&state.db, assessment_id).await?;
    let questions = sample_questions().iter().map(QuestionView::from).collect();

    Ok(Json(QuestionsResponse {
        assessment,
        questions,
    }))
}

/// POST /api/v1/assessments/:id/submit
///
/// Scores the answers against the question set and records the attempt.
pub async fn handle_submit(
    State(state): State<AppState>,
    Path(assessment_id): Path<Uuid>,
    Json(request): Json<SubmitRequest>,
) -> Result<Json<SubmitResponse>, AppError> {
    let assessment = find_assessment(&state.db, assessment_id).await?;

    let questions = sample_questions();
    let result = score_assessment(&questions, &request.answers);
    let review = review_answers(&questions, &request.answers);

    let attempt = sqlx::query_as::<_, UserAssessmentRow>(
        r#"
        INSERT INTO user_assessments
            (user_id, assessment_id, score, total_points, time_taken_minutes)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING *
        "#,
    )
    .bind(request.user_id)
    .bind(assessment_id)
    .bind(result.score)
    .bind(result.total_points)
    .bind(assessment.duration_minutes)
    .fetch_one(&state.db)
    .await?;

    info!(
        user_id = %request.user_id,
        %assessment_id,
        score = result.score,
        total_points = result.total_points,
        "Assessment submitted"
    );

    Ok(Json(SubmitResponse {
        attempt,
        score: result.score,
        total_points: result.total_points,
        percent: result.percent(),
        passed: result.passed(),
        review,
    }))
}

/// GET /api/v1/assessments/completed
pub async fn handle_list_completed(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<Vec<CompletedAssessmentRow>>, AppError> {
    let completed = sqlx::query_as::<_, CompletedAssessmentRow>(
        r#"
        SELECT ua.id, ua.assessment_id, COALESCE(a.title, $2) AS title, a.category,
               ua.score, ua.total_points, ua.completed_at
        FROM user_assessments ua
        LEFT JOIN assessments a ON a.id = ua.assessment_id
        WHERE ua.user_id = $1
        ORDER BY ua.completed_at DESC
        "#,
    )
    .bind(params.user_id)
    .bind(FALLBACK_ASSESSMENT_TITLE)
    .fetch_all(&state.db)
    .await?;

    Ok(Json(completed))
}

async fn find_assessment(pool: &PgPool, assessment_id: Uuid) -> Result<AssessmentRow, AppError> {
    sqlx::query_as::<_, AssessmentRow>("SELECT * FROM assessments WHERE id = $1")
        .bind(assessment_id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Assessment {assessment_id} not found")))
}
