//! Record fetching for the progress view.
//!
//! `ProgressStore` is the seam between the aggregator and storage. The
//! Postgres implementation resolves joins (skill category, assessment title,
//! resource title and duration) so the aggregator only sees flat records.

use anyhow::Result;
use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;
use uuid::Uuid;

use crate::errors::AppError;
use crate::progress::aggregator::compute_progress;
use crate::progress::models::{
    AssessmentAttempt, LearningProgressEntry, ProgressReport, SkillRecord,
    FALLBACK_ASSESSMENT_TITLE, FALLBACK_RESOURCE_TITLE,
};

#[async_trait]
pub trait ProgressStore: Send + Sync {
    async fn fetch_user_skills(&self, user_id: Uuid) -> Result<Vec<SkillRecord>>;

    /// Attempts ordered most recently completed first.
    async fn fetch_user_assessment_attempts(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<AssessmentAttempt>>;

    /// Entries ordered most recently started first.
    async fn fetch_user_learning_progress(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<LearningProgressEntry>>;
}

pub struct PgProgressStore {
    pool: PgPool,
}

impl PgProgressStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProgressStore for PgProgressStore {
    async fn fetch_user_skills(&self, user_id: Uuid) -> Result<Vec<SkillRecord>> {
        Ok(sqlx::query_as::<_, SkillRecord>(
            r#"
            SELECT us.skill_id, s.category, us.proficiency_level
            FROM user_skills us
            LEFT JOIN skills s ON s.id = us.skill_id
            WHERE us.user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?)
    }

    async fn fetch_user_assessment_attempts(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<AssessmentAttempt>> {
        Ok(sqlx::query_as::<_, AssessmentAttempt>(
            r#"
            SELECT COALESCE(a.title, $2) AS assessment_title,
                   ua.completed_at, ua.score, ua.total_points
            FROM user_assessments ua
            LEFT JOIN assessments a ON a.id = ua.assessment_id
            WHERE ua.user_id = $1
            ORDER BY ua.completed_at DESC
            "#,
        )
        .bind(user_id)
        .bind(FALLBACK_ASSESSMENT_TITLE)
        .fetch_all(&self.pool)
        .await?)
    }

    async fn fetch_user_learning_progress(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<LearningProgressEntry>> {
        Ok(sqlx::query_as::<_, LearningProgressEntry>(
            r#"
            SELECT COALESCE(lr.title, $2) AS resource_title,
                   p.status, p.started_at,
                   lr.duration_hours::float8 AS duration_hours
            FROM user_learning_progress p
            LEFT JOIN learning_resources lr ON lr.id = p.resource_id
            WHERE p.user_id = $1
            ORDER BY p.started_at DESC
            "#,
        )
        .bind(user_id)
        .bind(FALLBACK_RESOURCE_TITLE)
        .fetch_all(&self.pool)
        .await?)
    }
}

/// Fetches all three record sets concurrently, then aggregates.
/// If any fetch fails nothing is aggregated.
pub async fn load_progress(
    store: &dyn ProgressStore,
    user_id: Uuid,
) -> Result<ProgressReport, AppError> {
    let (skills, attempts, progress) = tokio::try_join!(
        store.fetch_user_skills(user_id),
        store.fetch_user_assessment_attempts(user_id),
        store.fetch_user_learning_progress(user_id),
    )
    .map_err(|e| AppError::Fetch(format!("{e:#}")))?;

    debug!(
        %user_id,
        skills = skills.len(),
        attempts = attempts.len(),
        progress = progress.len(),
        "Loaded progress records"
    );

    Ok(compute_progress(&skills, &attempts, &progress))
}

#[cfg(test)]
pub mod testing {
    use super::*;

    /// Fixed record sets, optionally failing the learning-progress fetch.
    #[derive(Default)]
    pub struct InMemoryProgressStore {
        pub skills: Vec<SkillRecord>,
        pub attempts: Vec<AssessmentAttempt>,
        pub progress: Vec<LearningProgressEntry>,
        pub fail_progress: bool,
    }

    #[async_trait]
    impl ProgressStore for InMemoryProgressStore {
        async fn fetch_user_skills(&self, _user_id: Uuid) -> Result<Vec<SkillRecord>> {
            Ok(self.skills.clone())
        }

        async fn fetch_user_assessment_attempts(
            &self,
            _user_id: Uuid,
        ) -> Result<Vec<AssessmentAttempt>> {
            Ok(self.attempts.clone())
        }

        async fn fetch_user_learning_progress(
            &self,
            _user_id: Uuid,
        ) -> Result<Vec<LearningProgressEntry>> {
            if self.fail_progress {
                anyhow::bail!("connection reset by peer");
            }
            Ok(self.progress.clone())
        }
    }
}
