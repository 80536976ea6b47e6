//! Progress Aggregator — turns a user's raw skill, assessment and learning
//! records into the dashboard's stats, category counts and activity feed.
//!
//! Pure and total: empty input yields zeroed stats, never an error. Records are
//! not validated or clamped (a negative `duration_hours` is summed as-is).

use std::collections::BTreeMap;

use crate::progress::models::{
    ActivityItem, ActivityKind, AggregateStats, AssessmentAttempt, CategoryShare,
    LearningProgressEntry, ProgressReport, SkillRecord, FALLBACK_CATEGORY, STATUS_COMPLETED,
    STATUS_IN_PROGRESS,
};

/// At most this many of the latest attempts and of the latest progress entries
/// are considered for the feed.
const ACTIVITY_PER_SOURCE: usize = 3;
/// Length cap of the merged feed.
const ACTIVITY_FEED_LIMIT: usize = 5;

pub fn compute_progress(
    skills: &[SkillRecord],
    attempts: &[AssessmentAttempt],
    progress: &[LearningProgressEntry],
) -> ProgressReport {
    let stats = AggregateStats {
        total_skills: skills.len(),
        average_proficiency: average_proficiency(skills),
        completed_assessments: attempts.len(),
        in_progress_resources: count_status(progress, STATUS_IN_PROGRESS),
        completed_resources: count_status(progress, STATUS_COMPLETED),
        total_learning_hours: progress
            .iter()
            .map(|p| p.duration_hours.unwrap_or(0.0))
            .sum(),
    };

    ProgressReport {
        stats,
        skills_by_category: count_by_category(skills),
        recent_activity: recent_activity(attempts, progress),
    }
}

/// Rounded mean proficiency; 0 for a user with no skills.
pub fn average_proficiency(skills: &[SkillRecord]) -> i64 {
    if skills.is_empty() {
        return 0;
    }
    let sum: i64 = skills.iter().map(|s| s.proficiency_level as i64).sum();
    div_round_half_up(sum, skills.len() as i64)
}

/// Exact, case-sensitive status match.
fn count_status(progress: &[LearningProgressEntry], status: &str) -> usize {
    progress.iter().filter(|p| p.status == status).count()
}

pub fn count_by_category(skills: &[SkillRecord]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for skill in skills {
        let category = skill
            .category
            .as_deref()
            .filter(|c| !c.trim().is_empty())
            .unwrap_or(FALLBACK_CATEGORY);
        *counts.entry(category.to_string()).or_insert(0) += 1;
    }
    counts
}

/// Display percentages per category (`count / total * 100`), in label order.
pub fn category_breakdown(
    counts: &BTreeMap<String, usize>,
    total_skills: usize,
) -> Vec<CategoryShare> {
    counts
        .iter()
        .map(|(category, &count)| CategoryShare {
            category: category.clone(),
            count,
            percent: if total_skills == 0 {
                0.0
            } else {
                count as f64 / total_skills as f64 * 100.0
            },
        })
        .collect()
}

/// Merges the latest attempts and progress entries into one feed, newest first.
///
/// Sorting is stable, so on equal dates assessment items stay ahead of
/// progress items and each source keeps its own order.
pub fn recent_activity(
    attempts: &[AssessmentAttempt],
    progress: &[LearningProgressEntry],
) -> Vec<ActivityItem> {
    let mut latest_attempts: Vec<&AssessmentAttempt> = attempts.iter().collect();
    latest_attempts.sort_by(|a, b| b.completed_at.cmp(&a.completed_at));

    let mut latest_progress: Vec<&LearningProgressEntry> = progress.iter().collect();
    latest_progress.sort_by(|a, b| b.started_at.cmp(&a.started_at));

    let mut items: Vec<ActivityItem> = latest_attempts
        .into_iter()
        .take(ACTIVITY_PER_SOURCE)
        .map(|a| ActivityItem {
            kind: ActivityKind::Assessment,
            title: a.assessment_title.clone(),
            date: a.completed_at,
            score_percent: Some(score_percent(a.score, a.total_points)),
        })
        .collect();

    items.extend(
        latest_progress
            .into_iter()
            .take(ACTIVITY_PER_SOURCE)
            .map(|p| ActivityItem {
                kind: ActivityKind::Resource(p.status.clone()),
                title: p.resource_title.clone(),
                date: p.started_at,
                score_percent: None,
            }),
    );

    items.sort_by(|a, b| b.date.cmp(&a.date));
    items.truncate(ACTIVITY_FEED_LIMIT);
    items
}

/// `round(score / total_points * 100)`; 0 when there are no points to earn.
pub fn score_percent(score: i32, total_points: i32) -> i64 {
    if total_points <= 0 {
        return 0;
    }
    div_round_half_up(score as i64 * 100, total_points as i64)
}

/// `numerator / denominator` rounded with .5 toward positive infinity.
/// Integer arithmetic keeps exact halves exact (29/200 → 14.5 → 15).
/// `denominator` must be positive.
fn div_round_half_up(numerator: i64, denominator: i64) -> i64 {
    (2 * numerator + denominator).div_euclid(2 * denominator)
}
