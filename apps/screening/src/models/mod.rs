pub mod question;
pub mod session;

pub use question::{Difficulty, Question, QuestionSet, QuestionType};
pub use session::{Answer, SessionStatus, SessionSummary};
