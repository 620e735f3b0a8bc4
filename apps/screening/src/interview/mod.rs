//! Interview planning: the question-bank seam and the level-driven,
//! seed-deterministic question selector.

pub mod bank;
pub mod selector;

pub use bank::{InMemoryQuestionBank, QuestionBank};
pub use selector::select_questions;
