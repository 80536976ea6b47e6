use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, Serializer};
use sqlx::FromRow;
use uuid::Uuid;

pub const STATUS_IN_PROGRESS: &str = "in_progress";
pub const STATUS_COMPLETED: &str = "completed";

/// Label for skills whose category could not be resolved.
pub const FALLBACK_CATEGORY: &str = "Other";
pub const FALLBACK_ASSESSMENT_TITLE: &str = "Assessment";
pub const FALLBACK_RESOURCE_TITLE: &str = "Learning Resource";

// ────────────────────────────────────────────────────────────────────────────
// Raw records (owned by the storage layer, read-only here)
// ────────────────────────────────────────────────────────────────────────────

/// One skill held by a user. `category` is pre-resolved by the store's join.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SkillRecord {
    pub skill_id: Uuid,
    pub category: Option<String>,
    pub proficiency_level: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AssessmentAttempt {
    pub assessment_title: String,
    pub completed_at: DateTime<Utc>,
    pub score: i32,
    pub total_points: i32,
}

/// A user's engagement with one learning resource. `status` is free-form:
/// only `in_progress` and `completed` are counted, anything else is tolerated.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct LearningProgressEntry {
    pub resource_title: String,
    pub status: String,
    pub started_at: DateTime<Utc>,
    pub duration_hours: Option<f64>,
}

// ────────────────────────────────────────────────────────────────────────────
// Derived output
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AggregateStats {
    pub total_skills: usize,
    pub average_proficiency: i64,
    pub completed_assessments: usize,
    pub in_progress_resources: usize,
    pub completed_resources: usize,
    pub total_learning_hours: f64,
}

/// What an activity item came from. Progress items carry the entry's raw status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActivityKind {
    Assessment,
    Resource(String),
}

impl ActivityKind {
    pub fn as_str(&self) -> &str {
        match self {
            ActivityKind::Assessment => "assessment",
            ActivityKind::Resource(status) => status.as_str(),
        }
    }
}

impl Serialize for ActivityKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivityItem {
    pub kind: ActivityKind,
    pub title: String,
    pub date: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score_percent: Option<i64>,
}

/// Share of the user's skills that fall in one category, for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryShare {
    pub category: String,
    pub count: usize,
    pub percent: f64,
}

/// Everything the progress view renders, recomputed on every request.
#[derive(Debug, Clone, Serialize)]
pub struct ProgressReport {
    pub stats: AggregateStats,
    pub skills_by_category: BTreeMap<String, usize>,
    pub recent_activity: Vec<ActivityItem>,
}
