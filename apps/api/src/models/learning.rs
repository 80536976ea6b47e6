use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A learning resource joined with the skill it teaches (if any).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct LearningResourceRow {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub resource_type: String,
    pub url: String,
    pub provider: String,
    pub skill_id: Option<Uuid>,
    pub difficulty_level: String,
    pub duration_hours: Option<f64>,
    pub rating: Option<f64>,
    pub is_free: bool,
    pub skill_name: Option<String>,
    pub skill_category: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct LearningProgressRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub resource_id: Uuid,
    pub status: String,
    pub progress_percentage: i32,
    pub started_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
    pub notes: Option<String>,
}
