//! Scoring pipeline: technical grading, confidence estimation, score
//! aggregation, and the final recommendation policy.

pub mod aggregate;
pub mod confidence;
pub mod non_answer;
pub mod recommendation;
pub mod technical;
pub mod weights;

pub use aggregate::{aggregate, finalize_score, skills_match, ScoreBreakdown};
pub use confidence::{estimate_confidence, ConfidenceLevel};
pub use recommendation::{generate_comment, recommend, Decision, FinalRecommendation};
pub use technical::{score_technical, TechnicalScores};
pub use weights::{dominant_mix, DifficultyMix};
