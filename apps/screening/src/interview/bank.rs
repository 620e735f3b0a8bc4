//! The question-bank seam. Bank contents live with an external
//! collaborator; the selector only needs this lookup shape. The in-memory
//! implementation backs tests and the demo binary.

use crate::models::{Difficulty, Question};

/// Lookup interface the selector works against.
pub trait QuestionBank: Send + Sync {
    /// All questions for a skill at a difficulty in a language. Order must
    /// be stable for a given bank instance.
    fn questions_for(&self, skill: &str, difficulty: Difficulty, lang: &str) -> Vec<Question>;

    /// Languages the bank can serve for a skill, used for fallback.
    fn available_langs(&self, skill: &str) -> Vec<String>;
}

/// Plain vector-backed bank.
pub struct InMemoryQuestionBank {
    questions: Vec<Question>,
}

impl InMemoryQuestionBank {
    pub fn new(questions: Vec<Question>) -> Self {
        InMemoryQuestionBank { questions }
    }
}

impl QuestionBank for InMemoryQuestionBank {
    fn questions_for(&self, skill: &str, difficulty: Difficulty, lang: &str) -> Vec<Question> {
        self.questions
            .iter()
            .filter(|q| {
                q.skill.eq_ignore_ascii_case(skill) && q.difficulty == difficulty && q.lang == lang
            })
            .cloned()
            .collect()
    }

    fn available_langs(&self, skill: &str) -> Vec<String> {
        let mut langs: Vec<String> = self
            .questions
            .iter()
            .filter(|q| q.skill.eq_ignore_ascii_case(skill))
            .map(|q| q.lang.clone())
            .collect();
        langs.sort();
        langs.dedup();
        langs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::QuestionType;

    fn make_question(id: u32, skill: &str, difficulty: Difficulty, lang: &str) -> Question {
        Question {
            id,
            skill: skill.to_string(),
            difficulty,
            kind: QuestionType::Theory,
            text: format!("question {id}"),
            expected_topics: vec![],
            lang: lang.to_string(),
        }
    }

    #[test]
    fn test_filters_by_skill_difficulty_lang() {
        let bank = InMemoryQuestionBank::new(vec![
            make_question(1, "python", Difficulty::Easy, "en"),
            make_question(2, "python", Difficulty::Hard, "en"),
            make_question(3, "python", Difficulty::Easy, "ru"),
            make_question(4, "sql", Difficulty::Easy, "en"),
        ]);
        let found = bank.questions_for("python", Difficulty::Easy, "en");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, 1);
    }

    #[test]
    fn test_skill_match_ignores_case() {
        let bank = InMemoryQuestionBank::new(vec![make_question(1, "Python", Difficulty::Easy, "en")]);
        assert_eq!(bank.questions_for("python", Difficulty::Easy, "en").len(), 1);
    }

    #[test]
    fn test_available_langs_sorted_unique() {
        let bank = InMemoryQuestionBank::new(vec![
            make_question(1, "python", Difficulty::Easy, "ru"),
            make_question(2, "python", Difficulty::Hard, "en"),
            make_question(3, "python", Difficulty::Easy, "ru"),
        ]);
        assert_eq!(bank.available_langs("python"), vec!["en", "ru"]);
    }
}
