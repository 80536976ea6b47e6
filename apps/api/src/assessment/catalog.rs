//! The multiple-choice question set served for every assessment.
//!
//! Questions are held in memory rather than read from `assessment_questions`.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq)]
pub struct Question {
    pub id: String,
    pub question_text: String,
    pub question_type: String,
    pub options: Vec<String>,
    pub correct_answer: String,
    pub points: i32,
    pub order_number: i32,
}

/// A question as shown to the test taker: no correct answer.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionView {
    pub id: String,
    pub question_text: String,
    pub question_type: String,
    pub options: Vec<String>,
    pub points: i32,
    pub order_number: i32,
}

impl From<&Question> for QuestionView {
    fn from(q: &Question) -> Self {
        Self {
            id: q.id.clone(),
            question_text: q.question_text.clone(),
            question_type: q.question_type.clone(),
            options: q.options.clone(),
            points: q.points,
            order_number: q.order_number,
        }
    }
}

const POINTS_PER_QUESTION: i32 = 10;

/// (question, options, index of the correct option)
const SAMPLE_QUESTIONS: &[(&str, [&str; 4], usize)] = &[
    (
        "What is the primary purpose of the attention mechanism in Transformer models?",
        [
            "To reduce computational complexity",
            "To allow the model to focus on relevant parts of the input",
            "To increase training speed",
            "To reduce model size",
        ],
        1,
    ),
    (
        "Which of the following is NOT a common NLP preprocessing step?",
        [
            "Tokenization",
            "Lemmatization",
            "Gradient descent",
            "Stop word removal",
        ],
        2,
    ),
    (
        "What does BERT stand for?",
        [
            "Bidirectional Encoder Representations from Transformers",
            "Basic Encoding for Recurrent Transformers",
            "Binary Encoder for Real-time Transformations",
            "Balanced Embedding Representation Technique",
        ],
        0,
    ),
    (
        "In machine learning, what is overfitting?",
        [
            "When the model performs poorly on both training and test data",
            "When the model performs well on training data but poorly on test data",
            "When the model takes too long to train",
            "When the model uses too few parameters",
        ],
        1,
    ),
    (
        "What is the purpose of word embeddings in NLP?",
        [
            "To compress text data",
            "To represent words as dense vectors that capture semantic meaning",
            "To remove stop words from text",
            "To translate text between languages",
        ],
        1,
    ),
];

/// Builds the question set, ordered by `order_number`.
pub fn sample_questions() -> Vec<Question> {
    SAMPLE_QUESTIONS
        .iter()
        .enumerate()
        .map(|(i, (text, options, correct))| Question {
            id: (i + 1).to_string(),
            question_text: text.to_string(),
            question_type: "multiple_choice".to_string(),
            options: options.iter().map(|o| o.to_string()).collect(),
            correct_answer: options[*correct].to_string(),
            points: POINTS_PER_QUESTION,
            order_number: i as i32 + 1,
        })
        .collect()
}
