use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AssessmentRow {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub category: String,
    pub difficulty_level: String,
    pub duration_minutes: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct UserAssessmentRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub assessment_id: Uuid,
    pub score: i32,
    pub total_points: i32,
    pub completed_at: DateTime<Utc>,
    pub time_taken_minutes: Option<i32>,
}

/// A completed attempt joined with the assessment it belongs to.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CompletedAssessmentRow {
    pub id: Uuid,
    pub assessment_id: Uuid,
    pub title: String,
    pub category: Option<String>,
    pub score: i32,
    pub total_points: i32,
    pub completed_at: DateTime<Utc>,
}
