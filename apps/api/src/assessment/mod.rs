// Assessments: static question set, answer scoring, attempt persistence.

pub mod catalog;
pub mod handlers;
pub mod scoring;
