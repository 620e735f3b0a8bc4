use serde::{Deserialize, Serialize};

/// Question difficulty tier. Unknown question references degrade to
/// `Medium` rather than failing a whole scoring pass.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    Theory,
    Case,
}

/// An interview question as served by the question-bank collaborator.
/// The bank contents are external; the engine only consumes this shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub id: u32,
    pub skill: String,
    pub difficulty: Difficulty,
    #[serde(rename = "type")]
    pub kind: QuestionType,
    pub text: String,
    /// Topics a good answer is expected to touch; drives the topic-match
    /// part of the technical score.
    #[serde(default)]
    pub expected_topics: Vec<String>,
    #[serde(default = "default_lang")]
    pub lang: String,
}

fn default_lang() -> String {
    "en".to_string()
}

/// The set of questions selected for one interview.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionSet {
    pub candidate_name: String,
    pub candidate_level: String,
    pub questions: Vec<Question>,
    pub total_questions: usize,
}
