use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProficiencyBand {
    Expert,
    Proficient,
    Intermediate,
    Beginner,
}

impl ProficiencyBand {
    pub fn from_level(level: i32) -> Self {
        match level {
            l if l >= 80 => ProficiencyBand::Expert,
            l if l >= 60 => ProficiencyBand::Proficient,
            l if l >= 40 => ProficiencyBand::Intermediate,
            _ => ProficiencyBand::Beginner,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProficiencyBand::Expert => "Expert",
            ProficiencyBand::Proficient => "Proficient",
            ProficiencyBand::Intermediate => "Intermediate",
            ProficiencyBand::Beginner => "Beginner",
        }
    }
}
