use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::config::EXTRACTION_CANDIDATE_CAP;
use crate::errors::AppError;
use crate::models::skill::{SkillRow, UserSkillDetailRow};
use crate::progress::handlers::UserIdQuery;
use crate::skills::extractor::{ExtractedSkill, SkillSource};
use crate::skills::proficiency::ProficiencyBand;
use crate::state::AppState;

/// No file is stored by this service, so upload rows carry a placeholder URL.
const RESUME_PLACEHOLDER_URL: &str = "#";

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub user_id: Uuid,
    pub linkedin_url: Option<String>,
    pub resume_file_name: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct UserSkillView {
    #[serde(flatten)]
    pub skill: UserSkillDetailRow,
    pub proficiency_band: ProficiencyBand,
    pub proficiency_label: &'static str,
}

impl From<UserSkillDetailRow> for UserSkillView {
    fn from(skill: UserSkillDetailRow) -> Self {
        let band = ProficiencyBand::from_level(skill.proficiency_level);
        Self {
            skill,
            proficiency_band: band,
            proficiency_label: band.label(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub message: String,
    pub extracted: Vec<ExtractedSkill>,
    pub skills: Vec<UserSkillView>,
}

/// POST /api/v1/skills/analyze
///
/// Simulated skill extraction: takes the first catalog skills and assigns
/// them proficiency levels through the configured extractor.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let source = resolve_source(&request)?;

    let candidates = sqlx::query_as::<_, SkillRow>(
        "SELECT * FROM skills ORDER BY created_at LIMIT $1",
    )
    .bind(EXTRACTION_CANDIDATE_CAP)
    .fetch_all(&state.db)
    .await?;

    let assignable = assignable_candidates(&candidates, state.config.skill_extraction_limit);
    let extracted = state
        .extractor
        .extract(request.user_id, assignable, source)
        .await?;

    let resume_file_name = match source {
        SkillSource::Resume => request.resume_file_name.as_deref(),
        SkillSource::Linkedin => None,
    };
    record_analysis(&state.db, request.user_id, &extracted, resume_file_name).await?;

    info!(
        user_id = %request.user_id,
        source = source.as_str(),
        count = extracted.len(),
        "Skills extracted"
    );

    let skills = fetch_user_skills(&state.db, request.user_id).await?;

    Ok(Json(AnalyzeResponse {
        message: "Analysis complete! Skills have been extracted and added to your profile."
            .to_string(),
        extracted,
        skills,
    }))
}

/// GET /api/v1/skills
pub async fn handle_list_skills(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<Vec<UserSkillView>>, AppError> {
    Ok(Json(fetch_user_skills(&state.db, params.user_id).await?))
}

/// A resume takes precedence over a profile link; blank values count as absent.
fn resolve_source(request: &AnalyzeRequest) -> Result<SkillSource, AppError> {
    let present = |v: &Option<String>| v.as_deref().is_some_and(|s| !s.trim().is_empty());

    if present(&request.resume_file_name) {
        Ok(SkillSource::Resume)
    } else if present(&request.linkedin_url) {
        Ok(SkillSource::Linkedin)
    } else {
        Err(AppError::Validation(
            "Please upload a resume or enter a LinkedIn URL".to_string(),
        ))
    }
}

/// The leading `limit` candidates, or all of them if there are fewer.
fn assignable_candidates(candidates: &[SkillRow], limit: usize) -> &[SkillRow] {
    &candidates[..candidates.len().min(limit)]
}

/// `parsed_data` stored with a resume upload.
fn upload_parsed_data(extracted_count: usize) -> Value {
    json!({ "extracted_skills": extracted_count })
}

/// Upserts the extracted skills and, for a resume analysis, records the
/// upload metadata row. Both writes share one transaction.
async fn record_analysis(
    pool: &PgPool,
    user_id: Uuid,
    extracted: &[ExtractedSkill],
    resume_file_name: Option<&str>,
) -> Result<(), AppError> {
    let mut tx = pool.begin().await?;
    for skill in extracted {
        sqlx::query(
            r#"
            INSERT INTO user_skills (user_id, skill_id, proficiency_level, source)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (user_id, skill_id) DO UPDATE
            SET proficiency_level = EXCLUDED.proficiency_level,
                source = EXCLUDED.source,
                updated_at = now()
            "#,
        )
        .bind(user_id)
        .bind(skill.skill_id)
        .bind(skill.proficiency_level)
        .bind(skill.source.as_str())
        .execute(&mut *tx)
        .await?;
    }

    if let Some(file_name) = resume_file_name {
        sqlx::query(
            r#"
            INSERT INTO resume_uploads (user_id, file_name, file_url, parsed_data)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(user_id)
        .bind(file_name)
        .bind(RESUME_PLACEHOLDER_URL)
        .bind(upload_parsed_data(extracted.len()))
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;
    Ok(())
}

async fn fetch_user_skills(pool: &PgPool, user_id: Uuid) -> Result<Vec<UserSkillView>, AppError> {
    let rows = sqlx::query_as::<_, UserSkillDetailRow>(
        r#"
        SELECT us.id, us.skill_id, us.proficiency_level, us.source,
               s.name, s.category, s.difficulty_level, us.updated_at
        FROM user_skills us
        LEFT JOIN skills s ON s.id = us.skill_id
        WHERE us.user_id = $1
        ORDER BY us.proficiency_level DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(UserSkillView::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(resume: Option<&str>, linkedin: Option<&str>) -> AnalyzeRequest {
        AnalyzeRequest {
            user_id: Uuid::new_v4(),
            resume_file_name: resume.map(String::from),
            linkedin_url: linkedin.map(String::from),
        }
    }

    #[test]
    fn test_resume_wins_over_linkedin() {
        let req = request(Some("cv.pdf"), Some("https://linkedin.com/in/someone"));
        assert_eq!(resolve_source(&req).unwrap(), SkillSource::Resume);
    }

    #[test]
    fn test_linkedin_only() {
        let req = request(None, Some("https://linkedin.com/in/someone"));
        assert_eq!(resolve_source(&req).unwrap(), SkillSource::Linkedin);
    }

    #[test]
    fn test_neither_source_rejected() {
        assert!(matches!(
            resolve_source(&request(None, None)),
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            resolve_source(&request(Some(""), Some("   "))),
            Err(AppError::Validation(_))
        ));
    }

    fn catalog(n: usize) -> Vec<SkillRow> {
        (0..n)
            .map(|i| SkillRow {
                id: Uuid::new_v4(),
                name: format!("Skill {i}"),
                category: "AI".to_string(),
                difficulty_level: "beginner".to_string(),
                description: String::new(),
                created_at: chrono::Utc::now(),
            })
            .collect()
    }

    #[test]
    fn test_assignable_candidates_takes_leading_skills() {
        let skills = catalog(10);
        let below = assignable_candidates(&skills, 6);
        assert_eq!(below.len(), 6);
        assert_eq!(below[0].id, skills[0].id);
        assert_eq!(below[5].id, skills[5].id);

        assert_eq!(assignable_candidates(&skills, 10).len(), 10);
    }

    #[test]
    fn test_assignable_candidates_limit_above_count() {
        let skills = catalog(4);
        assert_eq!(assignable_candidates(&skills, 6).len(), 4);
        assert!(assignable_candidates(&[], 6).is_empty());
    }

    #[test]
    fn test_assignable_candidates_zero_limit() {
        assert!(assignable_candidates(&catalog(10), 0).is_empty());
    }

    #[test]
    fn test_upload_parsed_data_counts_extracted_skills() {
        assert_eq!(upload_parsed_data(6), json!({ "extracted_skills": 6 }));
        assert_eq!(upload_parsed_data(0)["extracted_skills"], 0);
    }

    #[test]
    fn test_skill_view_carries_band() {
        let view = UserSkillView::from(UserSkillDetailRow {
            id: Uuid::new_v4(),
            skill_id: Uuid::new_v4(),
            proficiency_level: 72,
            source: "resume".to_string(),
            name: Some("Named Entity Recognition".to_string()),
            category: Some("NLP".to_string()),
            difficulty_level: Some("advanced".to_string()),
            updated_at: chrono::Utc::now(),
        });
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["proficiency_label"], "Proficient");
        assert_eq!(json["proficiency_band"], "proficient");
        assert_eq!(json["proficiency_level"], 72);
    }
}
