use crate::level::detector::CandidateLevel;
use crate::models::Difficulty;

/// Base question difficulty for a detected level. Per-skill adjustment can
/// hang off this later; today every skill in a plan shares the base tier.
pub fn base_difficulty(level: CandidateLevel) -> Difficulty {
    match level {
        CandidateLevel::Junior => Difficulty::Easy,
        CandidateLevel::Middle => Difficulty::Medium,
        CandidateLevel::Senior => Difficulty::Hard,
    }
}
