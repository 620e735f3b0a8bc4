use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    Active,
    Finished,
    Timeout,
}

/// A candidate answer, immutable once submitted. Created by the
/// interview-flow layer; the scoring pipeline reads it and nothing else.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Answer {
    pub question_id: u32,
    pub text: String,
    /// Seconds between question display and submission.
    pub time_spent: u32,
    pub submitted_at: DateTime<Utc>,
    #[serde(default)]
    pub is_timeout: bool,
    /// AI probability attached by the interview-flow speed trap, if it ran.
    /// When present the integrity pass reuses it instead of re-running the
    /// detector, so the typing-speed penalty is not applied twice.
    #[serde(default)]
    pub ai_score: Option<f64>,
}

impl Answer {
    pub fn new(question_id: u32, text: impl Into<String>, time_spent: u32) -> Self {
        Answer {
            question_id,
            text: text.into(),
            time_spent,
            submitted_at: Utc::now(),
            is_timeout: false,
            ai_score: None,
        }
    }
}

/// Summary of a completed interview session, as handed over by the
/// session-management collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSummary {
    pub session_id: Uuid,
    pub candidate_name: String,
    pub total_questions: usize,
    pub answered_questions: usize,
    /// Seconds across all questions.
    pub total_time_spent: u32,
    pub status: SessionStatus,
    pub answers: Vec<Answer>,
}
