use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SkillRow {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub difficulty_level: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

/// A `user_skills` row joined with its catalog skill.
/// Skill columns are nullable because the join is a LEFT JOIN.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct UserSkillDetailRow {
    pub id: Uuid,
    pub skill_id: Uuid,
    pub proficiency_level: i32,
    pub source: String,
    pub name: Option<String>,
    pub category: Option<String>,
    pub difficulty_level: Option<String>,
    pub updated_at: DateTime<Utc>,
}
