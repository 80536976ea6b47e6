pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::assessment::handlers as assessment;
use crate::learning::handlers as learning;
use crate::progress::handlers as progress;
use crate::skills::handlers as skills;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Progress dashboard
        .route("/api/v1/progress", get(progress::handle_get_progress))
        // Skill analysis
        .route("/api/v1/skills", get(skills::handle_list_skills))
        .route("/api/v1/skills/analyze", post(skills::handle_analyze))
        // Assessments
        .route(
            "/api/v1/assessments",
            get(assessment::handle_list_assessments),
        )
        .route(
            "/api/v1/assessments/completed",
            get(assessment::handle_list_completed),
        )
        .route(
            "/api/v1/assessments/:id/questions",
            get(assessment::handle_get_questions),
        )
        .route(
            "/api/v1/assessments/:id/submit",
            post(assessment::handle_submit),
        )
        // Learning resources
        .route("/api/v1/resources", get(learning::handle_list_resources))
        .route(
            "/api/v1/resources/progress",
            get(learning::handle_get_progress),
        )
        .route(
            "/api/v1/resources/:id/start",
            post(learning::handle_start_resource),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use chrono::Utc;
    use serde_json::Value;
    use sqlx::postgres::PgPoolOptions;
    use tower::ServiceExt;
    use uuid::Uuid;

    use super::*;
    use crate::config::Config;
    use crate::progress::models::{AssessmentAttempt, SkillRecord};
    use crate::progress::store::testing::InMemoryProgressStore;
    use crate::skills::extractor::RandomSkillExtractor;

    fn test_state(store: InMemoryProgressStore) -> AppState {
        // Never connected: only the in-memory store is exercised.
        let db = PgPoolOptions::new()
            .connect_lazy("postgres://localhost/skillpath_test")
            .unwrap();
        AppState {
            db,
            config: Config {
                database_url: "postgres://localhost/skillpath_test".to_string(),
                port: 0,
                rust_log: "info".to_string(),
                skill_extraction_limit: 6,
            },
            progress_store: Arc::new(store),
            extractor: Arc::new(RandomSkillExtractor),
        }
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let app = build_router(test_state(InMemoryProgressStore::default()));
        let (status, body) = get_json(app, "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_progress_endpoint_renders_report() {
        let store = InMemoryProgressStore {
            skills: vec![
                SkillRecord {
                    skill_id: Uuid::new_v4(),
                    category: Some("AI".to_string()),
                    proficiency_level: 60,
                },
                SkillRecord {
                    skill_id: Uuid::new_v4(),
                    category: Some("NLP".to_string()),
                    proficiency_level: 80,
                },
            ],
            attempts: vec![AssessmentAttempt {
                assessment_title: "NLP Fundamentals".to_string(),
                completed_at: Utc::now(),
                score: 30,
                total_points: 50,
            }],
            ..Default::default()
        };
        let app = build_router(test_state(store));
        let uri = format!("/api/v1/progress?user_id={}", Uuid::new_v4());
        let (status, body) = get_json(app, &uri).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["stats"]["average_proficiency"], 70);
        assert_eq!(body["skills_by_category"]["AI"], 1);
        assert_eq!(body["category_breakdown"][1]["percent"], 50.0);
        assert_eq!(body["recent_activity"][0]["kind"], "assessment");
        assert_eq!(body["recent_activity"][0]["score_percent"], 60);
    }

    #[tokio::test]
    async fn test_progress_endpoint_reports_fetch_failure() {
        let store = InMemoryProgressStore {
            fail_progress: true,
            ..Default::default()
        };
        let app = build_router(test_state(store));
        let uri = format!("/api/v1/progress?user_id={}", Uuid::new_v4());
        let (status, body) = get_json(app, &uri).await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["error"]["code"], "PROGRESS_UNAVAILABLE");
    }

    #[tokio::test]
    async fn test_progress_requires_user_id() {
        let app = build_router(test_state(InMemoryProgressStore::default()));
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/progress")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
