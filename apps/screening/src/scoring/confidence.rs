//! How much should anyone trust the numbers this engine produced? A short
//! interview with skipped questions and one-line answers yields the same
//! shaped output as a full session; this grade is what tells them apart.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceLevel {
    High,
    Medium,
    Low,
}

impl ConfidenceLevel {
    /// Numeric contribution to the final weighted score.
    pub fn points(&self) -> f64 {
        match self {
            ConfidenceLevel::High => 100.0,
            ConfidenceLevel::Medium => 65.0,
            ConfidenceLevel::Low => 30.0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ConfidenceLevel::High => "high",
            ConfidenceLevel::Medium => "medium",
            ConfidenceLevel::Low => "low",
        }
    }
}

/// Grades the reliability of a session's results.
///
/// Starts from 100 points and deducts for thin evidence: few questions,
/// low completion, shallow answers, and suspicious activity (integrity
/// issues make the technical numbers less believable, not just the
/// candidate less likable).
pub fn estimate_confidence(
    total_questions: usize,
    answered_questions: usize,
    answer_lengths: &[usize],
    suspicious_count: usize,
) -> ConfidenceLevel {
    if total_questions == 0 {
        return ConfidenceLevel::Low;
    }

    let completion_rate = answered_questions as f64 / total_questions as f64;
    let mut points: i64 = 100;

    if total_questions < 3 {
        points -= 40;
    } else if total_questions < 5 {
        points -= 20;
    }

    if completion_rate < 0.5 {
        points -= 50;
    } else if completion_rate < 0.8 {
        points -= 20;
    }

    let average_length = if answer_lengths.is_empty() {
        0.0
    } else {
        answer_lengths.iter().sum::<usize>() as f64 / answer_lengths.len() as f64
    };
    if average_length < 20.0 {
        points -= 30;
    }

    points -= suspicious_count as i64 * 15;

    if points >= 80 {
        ConfidenceLevel::High
    } else if points >= 50 {
        ConfidenceLevel::Medium
    } else {
        ConfidenceLevel::Low
    }
}
