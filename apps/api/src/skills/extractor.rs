//! Skill Extractor — assigns proficiency levels to candidate skills for a user.
//!
//! Default: `RandomSkillExtractor`, a placeholder that draws uniform levels in
//! [40, 80). No resume or profile content is read. A real extractor only has
//! to honour the trait contract: one result per assigned candidate, levels in
//! [0, 100].
//!
//! `AppState` holds an `Arc<dyn SkillExtractor>`.

use async_trait::async_trait;
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::skill::SkillRow;

/// Lower bound (inclusive) of a randomly assigned level.
const RANDOM_LEVEL_MIN: i32 = 40;
/// Upper bound (exclusive) of a randomly assigned level.
const RANDOM_LEVEL_MAX: i32 = 80;

/// Where the user's skills were taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillSource {
    Resume,
    Linkedin,
}

impl SkillSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkillSource::Resume => "resume",
            SkillSource::Linkedin => "linkedin",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtractedSkill {
    pub skill_id: Uuid,
    pub proficiency_level: i32,
    pub source: SkillSource,
}

#[async_trait]
pub trait SkillExtractor: Send + Sync {
    async fn extract(
        &self,
        user_id: Uuid,
        candidates: &[SkillRow],
        source: SkillSource,
    ) -> Result<Vec<ExtractedSkill>, AppError>;
}

pub struct RandomSkillExtractor;

#[async_trait]
impl SkillExtractor for RandomSkillExtractor {
    async fn extract(
        &self,
        _user_id: Uuid,
        candidates: &[SkillRow],
        source: SkillSource,
    ) -> Result<Vec<ExtractedSkill>, AppError> {
        Ok(assign_random_levels(
            candidates,
            source,
            &mut rand::thread_rng(),
        ))
    }
}

fn assign_random_levels<R: Rng>(
    candidates: &[SkillRow],
    source: SkillSource,
    rng: &mut R,
) -> Vec<ExtractedSkill> {
    candidates
        .iter()
        .map(|skill| ExtractedSkill {
            skill_id: skill.id,
            proficiency_level: rng.gen_range(RANDOM_LEVEL_MIN..RANDOM_LEVEL_MAX),
            source,
        })
        .collect()
}
