// Skill analysis: simulated extraction from a resume or profile link, and the
// user's skill list with proficiency bands.

pub mod extractor;
pub mod handlers;
pub mod proficiency;
