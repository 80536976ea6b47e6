use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::assessment::catalog::Question;
use crate::progress::aggregator::score_percent;

/// Fraction of total points at or above which an attempt is shown as passed.
pub const PASS_THRESHOLD: f64 = 0.70;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentScore {
    pub score: i32,
    pub total_points: i32,
}

impl AssessmentScore {
    pub fn percent(&self) -> i64 {
        score_percent(self.score, self.total_points)
    }

    pub fn passed(&self) -> bool {
        is_pass(self.score, self.total_points)
    }
}

/// Per-question outcome shown on the results screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnswerReview {
    pub question_id: String,
    pub is_correct: bool,
    /// Only revealed for questions answered incorrectly.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correct_answer: Option<String>,
}

/// Sums points for exactly matching answers (case-sensitive, no partial
/// credit). Unanswered questions score 0 but still count toward the total.
pub fn score_assessment(
    questions: &[Question],
    answers: &HashMap<String, String>,
) -> AssessmentScore {
    let initial = AssessmentScore {
        score: 0,
        total_points: 0,
    };
    questions.iter().fold(initial, |acc, q| {
        let earned = if is_correct(q, answers) { q.points } else { 0 };
        AssessmentScore {
            score: acc.score + earned,
            total_points: acc.total_points + q.points,
        }
    })
}

pub fn review_answers(
    questions: &[Question],
    answers: &HashMap<String, String>,
) -> Vec<AnswerReview> {
    questions
        .iter()
        .map(|q| {
            let correct = is_correct(q, answers);
            AnswerReview {
                question_id: q.id.clone(),
                is_correct: correct,
                correct_answer: (!correct).then(|| q.correct_answer.clone()),
            }
        })
        .collect()
}

/// Presentation-only pass check. An assessment worth no points never passes.
pub fn is_pass(score: i32, total_points: i32) -> bool {
    total_points > 0 && score as f64 / total_points as f64 >= PASS_THRESHOLD
}

fn is_correct(question: &Question, answers: &HashMap<String, String>) -> bool {
    answers
        .get(&question.id)
        .is_some_and(|a| *a == question.correct_answer)
}
