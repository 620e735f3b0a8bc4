//! Fuses technical, integrity, skills-match, and confidence numbers into
//! the score breakdown and the final 0-100 score.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::ScoringPolicy;
use crate::integrity::FullIntegrityReport;
use crate::models::{Question, SessionSummary};
use crate::scoring::confidence::ConfidenceLevel;
use crate::scoring::technical::{score_technical, TechnicalScores};
use crate::scoring::weights::{DifficultyMix, FinalWeights};

/// Component scores, all on 0-100. Fields say what they hold; the skills
/// match and confidence points are first-class components here, not
/// squatters in repurposed slots.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub knowledge_score: f64,
    pub honesty_score: f64,
    pub skills_match_score: f64,
    pub confidence_points: f64,
}

/// How well the interview's question set covered the skills the CV claims.
/// Returns 0-100; either side being empty yields 0 rather than free credit.
pub fn skills_match(cv_skills: &[String], questions: &[Question]) -> f64 {
    if cv_skills.is_empty() || questions.is_empty() {
        return 0.0;
    }

    let interview_skills: Vec<String> = {
        let mut skills: Vec<String> = questions
            .iter()
            .map(|q| q.skill.to_lowercase())
            .filter(|s| !s.is_empty())
            .collect();
        skills.sort();
        skills.dedup();
        skills
    };

    let matches = cv_skills
        .iter()
        .map(|s| s.to_lowercase())
        .filter(|skill| {
            interview_skills
                .iter()
                .any(|covered| covered.contains(skill.as_str()) || skill.contains(covered.as_str()))
        })
        .count();

    (matches as f64 / cv_skills.len() as f64 * 100.0).min(100.0)
}

/// Builds the full component breakdown for a session.
pub fn aggregate(
    summary: &SessionSummary,
    integrity: &FullIntegrityReport,
    questions: &[Question],
    cv_skills: &[String],
    confidence: ConfidenceLevel,
) -> ScoreBreakdown {
    let tech: TechnicalScores = score_technical(summary, questions);

    ScoreBreakdown {
        knowledge_score: round2(tech.knowledge),
        honesty_score: round2(integrity.overall_honesty_score * 100.0),
        skills_match_score: round2(skills_match(cv_skills, questions)),
        confidence_points: round2(confidence.points()),
    }
}

/// Final weighted score on 0-100.
///
/// The technical floor is absolute: below it the answer content was junk,
/// and neither a well-matched CV nor clean process signals can buy points
/// back.
pub fn finalize_score(
    breakdown: &ScoreBreakdown,
    difficulty_mix: DifficultyMix,
    policy: &ScoringPolicy,
) -> u32 {
    if breakdown.knowledge_score < policy.technical_floor {
        debug!(
            knowledge = breakdown.knowledge_score,
            floor = policy.technical_floor,
            "final score zeroed by technical floor"
        );
        return 0;
    }

    let weights = FinalWeights::for_mix(difficulty_mix);
    let final_score = breakdown.skills_match_score * weights.skills_match
        + breakdown.knowledge_score * weights.knowledge
        + breakdown.confidence_points * weights.confidence;

    final_score.round().clamp(0.0, 100.0) as u32
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Difficulty, QuestionType};

    fn make_question(skill: &str) -> Question {
        Question {
            id: 1,
            skill: skill.to_string(),
            difficulty: Difficulty::Medium,
            kind: QuestionType::Theory,
            text: "q".to_string(),
            expected_topics: vec![],
            lang: "en".to_string(),
        }
    }

    fn make_breakdown(knowledge: f64, skills: f64, confidence: f64) -> ScoreBreakdown {
        ScoreBreakdown {
            knowledge_score: knowledge,
            honesty_score: 90.0,
            skills_match_score: skills,
            confidence_points: confidence,
        }
    }

    #[test]
    fn test_skills_match_full_overlap() {
        let cv = vec!["python".to_string(), "sql".to_string()];
        let questions = vec![make_question("python"), make_question("sql")];
        assert_eq!(skills_match(&cv, &questions), 100.0);
    }

    #[test]
    fn test_skills_match_partial_overlap() {
        let cv = vec!["python".to_string(), "react".to_string()];
        let questions = vec![make_question("python")];
        assert_eq!(skills_match(&cv, &questions), 50.0);
    }

    #[test]
    fn test_skills_match_substring_counts() {
        // "postgresql" on the CV against a "sql" interview skill.
        let cv = vec!["postgresql".to_string()];
        let questions = vec![make_question("sql")];
        assert_eq!(skills_match(&cv, &questions), 100.0);
    }

    #[test]
    fn test_skills_match_no_free_credit() {
        assert_eq!(skills_match(&[], &[make_question("python")]), 0.0);
        assert_eq!(skills_match(&["python".to_string()], &[]), 0.0);
    }

    #[test]
    fn test_finalize_weighted_sum() {
        let breakdown = make_breakdown(100.0, 100.0, 100.0);
        let score = finalize_score(&breakdown, DifficultyMix::Medium, &ScoringPolicy::default());
        assert_eq!(score, 100);
    }

    #[test]
    fn test_finalize_known_mix() {
        // 0.34*50 + 0.33*60 + 0.33*65 = 58.25 -> 58.
        let breakdown = make_breakdown(60.0, 50.0, 65.0);
        let score = finalize_score(&breakdown, DifficultyMix::Medium, &ScoringPolicy::default());
        assert_eq!(score, 58);
    }

    #[test]
    fn test_technical_floor_zeroes_everything() {
        let breakdown = make_breakdown(4.9, 100.0, 100.0);
        let score = finalize_score(&breakdown, DifficultyMix::Hard, &ScoringPolicy::default());
        assert_eq!(score, 0);
    }

    #[test]
    fn test_technical_floor_boundary() {
        // Exactly at the floor passes; just below does not.
        let at_floor = make_breakdown(5.0, 0.0, 30.0);
        let score = finalize_score(&at_floor, DifficultyMix::Medium, &ScoringPolicy::default());
        assert!(score > 0);
    }

    #[test]
    fn test_score_bounded() {
        let breakdown = make_breakdown(100.0, 100.0, 100.0);
        for mix in [DifficultyMix::Easy, DifficultyMix::Medium, DifficultyMix::Hard] {
            assert!(finalize_score(&breakdown, mix, &ScoringPolicy::default()) <= 100);
        }
    }
}
