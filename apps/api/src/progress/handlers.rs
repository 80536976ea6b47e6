use std::collections::BTreeMap;

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::progress::aggregator::category_breakdown;
use crate::progress::models::{ActivityItem, AggregateStats, CategoryShare};
use crate::progress::store::load_progress;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct UserIdQuery {
    pub user_id: Uuid,
}

#[derive(Serialize)]
pub struct ProgressResponse {
    pub stats: AggregateStats,
    pub skills_by_category: BTreeMap<String, usize>,
    pub category_breakdown: Vec<CategoryShare>,
    pub recent_activity: Vec<ActivityItem>,
}

/// GET /api/v1/progress
pub async fn handle_get_progress(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<ProgressResponse>, AppError> {
    let report = load_progress(state.progress_store.as_ref(), params.user_id).await?;
    let category_breakdown =
        category_breakdown(&report.skills_by_category, report.stats.total_skills);

    Ok(Json(ProgressResponse {
        stats: report.stats,
        skills_by_category: report.skills_by_category,
        category_breakdown,
        recent_activity: report.recent_activity,
    }))
}
