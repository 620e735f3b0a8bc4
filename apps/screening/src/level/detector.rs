//! Seniority detection from a resume analysis: weighted component scores
//! over experience, skill count, analysis confidence, and stack diversity.

use serde::{Deserialize, Serialize};

use crate::cv::CvAnalysis;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidateLevel {
    Junior,
    Middle,
    Senior,
}

impl CandidateLevel {
    pub fn label(&self) -> &'static str {
        match self {
            CandidateLevel::Junior => "junior",
            CandidateLevel::Middle => "middle",
            CandidateLevel::Senior => "senior",
        }
    }
}

/// Level thresholds on the 0-100 score: Junior below 45, Senior from 75.
const MIDDLE_FROM: f64 = 45.0;
const SENIOR_FROM: f64 = 75.0;

/// Component weights: experience dominates, then breadth of skills.
const WEIGHT_EXPERIENCE: f64 = 0.40;
const WEIGHT_SKILLS: f64 = 0.30;
const WEIGHT_CONFIDENCE: f64 = 0.20;
const WEIGHT_DIVERSITY: f64 = 0.10;

/// Stack categories used for the diversity component.
static STACK_CATEGORIES: &[&[&str]] = &[
    &["react", "vue", "angular", "html", "css", "javascript", "typescript"],
    &["node.js", "python", "django", "flask", "java", "go", "php"],
    &["sql", "postgresql", "mysql", "mongodb", "redis"],
    &["docker", "kubernetes", "aws", "azure", "ci/cd"],
];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelDetection {
    pub candidate_name: String,
    pub level: CandidateLevel,
    /// How decisively the score landed inside its band (0-1).
    pub confidence_overall: f64,
    pub skills: Vec<String>,
    pub experience_years: Option<f64>,
    pub level_score: f64,
}

/// Detects candidate level from a resume analysis.
pub fn detect_level(candidate_name: &str, analysis: &CvAnalysis) -> LevelDetection {
    let all_skills = analysis.all_skills();

    let experience = score_experience(analysis.experience_years.unwrap_or(0.0));
    let skills = score_skill_count(all_skills.len());
    let confidence = score_confidence(analysis);
    let diversity = score_diversity(&all_skills);

    let level_score = (experience * WEIGHT_EXPERIENCE
        + skills * WEIGHT_SKILLS
        + confidence * WEIGHT_CONFIDENCE
        + diversity * WEIGHT_DIVERSITY)
        * 100.0;

    let level = level_for_score(level_score);
    let confidence_overall = boundary_confidence(level_score, level);

    LevelDetection {
        candidate_name: candidate_name.to_string(),
        level,
        confidence_overall: (confidence_overall * 100.0).round() / 100.0,
        skills: all_skills,
        experience_years: analysis.experience_years,
        level_score: (level_score * 100.0).round() / 100.0,
    }
}

fn score_experience(years: f64) -> f64 {
    if years <= 1.0 {
        0.1
    } else if years <= 3.0 {
        0.3
    } else if years <= 5.0 {
        0.6
    } else if years <= 7.0 {
        0.8
    } else {
        1.0
    }
}

fn score_skill_count(count: usize) -> f64 {
    if count <= 3 {
        0.2
    } else if count <= 6 {
        0.5
    } else if count <= 10 {
        0.8
    } else {
        1.0
    }
}

fn score_confidence(analysis: &CvAnalysis) -> f64 {
    if analysis.confidence.is_empty() {
        return 0.5;
    }
    analysis.confidence.values().sum::<f64>() / analysis.confidence.len() as f64
}

fn score_diversity(skills: &[String]) -> f64 {
    let covered = STACK_CATEGORIES
        .iter()
        .filter(|category| {
            category
                .iter()
                .any(|s| skills.iter().any(|skill| skill.eq_ignore_ascii_case(s)))
        })
        .count();
    covered as f64 / STACK_CATEGORIES.len() as f64
}

fn level_for_score(score: f64) -> CandidateLevel {
    if score < MIDDLE_FROM {
        CandidateLevel::Junior
    } else if score < SENIOR_FROM {
        CandidateLevel::Middle
    } else {
        CandidateLevel::Senior
    }
}

/// Confidence from distance to the nearest band boundary: dead-center
/// scores are certain, scores hugging a boundary are not.
fn boundary_confidence(score: f64, level: CandidateLevel) -> f64 {
    let (low, high) = match level {
        CandidateLevel::Junior => (0.0, MIDDLE_FROM),
        CandidateLevel::Middle => (MIDDLE_FROM, SENIOR_FROM),
        CandidateLevel::Senior => (SENIOR_FROM, 100.0),
    };
    let half_range = (high - low) / 2.0;
    let distance = (score - low).min(high - score);
    (distance / half_range).clamp(0.0, 1.0)
}
