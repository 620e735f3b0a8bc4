//! Difficulty-mix weighting policy for the final score.

use serde::{Deserialize, Serialize};

use crate::models::{Difficulty, Question};

/// Dominant difficulty tier of a session. A session only counts as easy or
/// hard when every question sits in that tier; anything mixed is medium.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DifficultyMix {
    Easy,
    Medium,
    Hard,
}

impl DifficultyMix {
    pub fn label(&self) -> &'static str {
        match self {
            DifficultyMix::Easy => "easy",
            DifficultyMix::Medium => "medium",
            DifficultyMix::Hard => "hard",
        }
    }
}

pub fn dominant_mix(questions: &[Question]) -> DifficultyMix {
    if !questions.is_empty() && questions.iter().all(|q| q.difficulty == Difficulty::Hard) {
        DifficultyMix::Hard
    } else if !questions.is_empty() && questions.iter().all(|q| q.difficulty == Difficulty::Easy) {
        DifficultyMix::Easy
    } else {
        DifficultyMix::Medium
    }
}

/// Component weights for the final score. Selected per difficulty mix; all
/// tiers currently share one profile, with skills-match carrying the extra
/// point so the weights sum to 1.0.
#[derive(Debug, Clone, Copy)]
pub struct FinalWeights {
    pub skills_match: f64,
    pub knowledge: f64,
    pub confidence: f64,
}

impl FinalWeights {
    pub fn for_mix(_mix: DifficultyMix) -> Self {
        FinalWeights {
            skills_match: 0.34,
            knowledge: 0.33,
            confidence: 0.33,
        }
    }
}
