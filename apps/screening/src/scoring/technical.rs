//! Technical grading of answers: topic coverage, keyword density, and the
//! junk guards that keep "python asdfghjk" from scoring off keyword
//! presence alone.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{Question, QuestionType, SessionSummary};
use crate::scoring::non_answer;

/// Technical vocabulary across the three supported languages, matched as
/// lowercase substrings. Hits feed the keyword bonus and the length-score
/// gate.
static TECH_KEYWORDS: &[&str] = &[
    // EN
    "implementation",
    "performance",
    "complexity",
    "architecture",
    "pattern",
    "logic",
    "database",
    "api",
    "interface",
    "class",
    "object",
    "function",
    "method",
    "async",
    "sync",
    "thread",
    "deploy",
    "ci/cd",
    "testing",
    "unit",
    "integration",
    "rest",
    "graphql",
    "sql",
    "nosql",
    // RU
    "реализация",
    "производительность",
    "сложность",
    "архитектура",
    "паттерн",
    "логика",
    "база",
    "интерфеис",
    "класс",
    "объект",
    "функция",
    "метод",
    "асинхрон",
    "поток",
    "деплой",
    "тестирование",
    "юнит",
    "интеграция",
    "рест",
    "данные",
    "сервер",
    "клиент",
    "оптимизация",
    "кэширование",
    "безопасность",
    "авторизация",
    "аутентификация",
    "программирование",
    "разработка",
    "код",
    "структура",
    "алгоритм",
    // UZ
    "amalga oshirish",
    "unumdorlik",
    "murakkablik",
    "arxitektura",
    "andoza",
    "mantiq",
    "ma'lumotlar",
    "interfeys",
    "sinf",
    "obyekt",
    "funktsiya",
    "usul",
    "asinxron",
    "oqim",
    "joylashtirish",
    "sinash",
    "birlik",
    "integratsiya",
    "mijoz",
    "optimallashtirish",
    "keshlash",
    "xavfsizlik",
    "tizim",
    "dastur",
    "algoritm",
    "kod",
];

/// Markers of trade-off reasoning, used for the problem-solving score on
/// case questions.
static PROBLEM_SOLVING_MARKERS: &[&str] = &[
    "trade-off",
    "alternative",
    "depends",
    "strategy",
    "handling",
    "solution",
    "scale",
    "компромисс",
    "альтернатива",
    "зависит",
    "стратегия",
    "обработка",
    "решение",
    "масштабирование",
    "kelishuv",
    "muqobil",
    "bog'liq",
    "strategiya",
    "ishlov",
    "yechim",
    "miqyoslash",
    "плюсы",
    "минусы",
    "вариант",
    "лучше",
    "хуже",
    "afzallik",
    "kamchilik",
];

/// Short function words that do not count toward the "too many stray short
/// words" junk rule.
static COMMON_SHORT_WORDS: &[&str] = &[
    "я", "и", "в", "на", "с", "а", "но", "у", "к", "за", "от", "до", "по", "об", "va", "bu", "u",
    "da", "ni", "ga", "of", "in", "to", "is", "a", "an", "the", "it", "on",
];

/// Anything outside word characters, whitespace, and ordinary punctuation
/// counts as junk for the junk-density guard.
static JUNK_CHARS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s.,?!:;()\-]").unwrap());

const VOWELS_ALL: &str = "aeiouyаеёиоуыэюя";

const KEYWORD_BONUS_CAP: f64 = 30.0;
const JUNK_RATIO_LIMIT: f64 = 0.4;

/// Session-level technical result: components of the score breakdown.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TechnicalScores {
    pub knowledge: f64,
    pub problem_solving: f64,
}

/// Grades every answer in the session and averages. Empty sessions score
/// zero on both axes; there is no free baseline anywhere in this path.
pub fn score_technical(summary: &SessionSummary, questions: &[Question]) -> TechnicalScores {
    let question_map: HashMap<u32, &Question> = questions.iter().map(|q| (q.id, q)).collect();

    let mut knowledge_scores = Vec::with_capacity(summary.answers.len());
    let mut problem_solving_scores = Vec::with_capacity(summary.answers.len());

    for answer in &summary.answers {
        let question = question_map.get(&answer.question_id).copied();

        if answer.text.is_empty() || answer.is_timeout {
            debug!(
                question_id = answer.question_id,
                "zero score: no answer or timeout"
            );
            knowledge_scores.push(0.0);
            problem_solving_scores.push(0.0);
            continue;
        }

        if let Some(reason) = non_answer::detect(&answer.text) {
            debug!(
                question_id = answer.question_id,
                reason = ?reason,
                "zero score: non-answer detected"
            );
            knowledge_scores.push(0.0);
            problem_solving_scores.push(0.0);
            continue;
        }

        let text_lower = answer.text.to_lowercase();
        let word_count = answer.text.split_whitespace().count();

        let expected_topics: &[String] = question.map(|q| q.expected_topics.as_slice()).unwrap_or(&[]);
        let topic_matches = count_topic_matches(&text_lower, expected_topics);

        // No expected topics means no topic credit, not a default.
        let knowledge_base = if expected_topics.is_empty() {
            0.0
        } else {
            topic_matches as f64 / expected_topics.len() as f64 * 100.0
        };

        let keyword_hits = TECH_KEYWORDS
            .iter()
            .filter(|kw| text_lower.contains(*kw))
            .count();

        // Length is only worth something when at least some relevance
        // showed up; long-but-irrelevant stays at zero.
        let length_score = if word_count > 20 {
            if topic_matches > 0 || keyword_hits > 2 {
                70.0
            } else {
                0.0
            }
        } else if word_count > 10 {
            if topic_matches > 0 || keyword_hits > 1 {
                30.0
            } else {
                0.0
            }
        } else {
            0.0
        };

        if is_keyword_plus_junk(&answer.text, &text_lower, word_count) {
            debug!(
                question_id = answer.question_id,
                answer = %answer.text,
                "zero score: junk-mixed answer"
            );
            knowledge_scores.push(0.0);
            problem_solving_scores.push(0.0);
            continue;
        }

        let keyword_bonus = (keyword_hits as f64 * 5.0).min(KEYWORD_BONUS_CAP);
        let knowledge = (knowledge_base.max(length_score) + keyword_bonus).min(100.0);

        if knowledge == 0.0 {
            debug!(
                question_id = answer.question_id,
                "zero knowledge score for answered question"
            );
        }
        knowledge_scores.push(knowledge);

        // Case questions get their own problem-solving grade; theory
        // questions only show part of that ability.
        let is_case = question.map(|q| q.kind == QuestionType::Case).unwrap_or(false);
        if is_case {
            let marker_points = PROBLEM_SOLVING_MARKERS
                .iter()
                .filter(|m| text_lower.contains(*m))
                .count() as f64
                * 10.0;
            let length_points = if word_count > 30 {
                75.0
            } else if word_count > 15 {
                50.0
            } else {
                0.0
            };
            let problem_solving = (knowledge_base.max(length_points) + marker_points).min(100.0);
            problem_solving_scores.push(problem_solving);
        } else {
            problem_solving_scores.push(knowledge * 0.8);
        }
    }

    TechnicalScores {
        knowledge: mean(&knowledge_scores),
        problem_solving: mean(&problem_solving_scores),
    }
}

/// Counts expected topics present as whole words (case-insensitive).
fn count_topic_matches(text_lower: &str, expected_topics: &[String]) -> usize {
    expected_topics
        .iter()
        .filter(|topic| {
            let pattern = format!(r"\b{}\b", regex::escape(&topic.to_lowercase()));
            Regex::new(&pattern)
                .map(|re| re.is_match(text_lower))
                .unwrap_or(false)
        })
        .count()
}

/// The junk-density guard: a short answer mixing real keywords with mash.
fn is_keyword_plus_junk(text: &str, text_lower: &str, word_count: usize) -> bool {
    if word_count >= 20 {
        return false;
    }

    let char_count = text.chars().count();
    let junk_count = JUNK_CHARS.find_iter(text).count();
    let junk_ratio = if char_count > 0 {
        junk_count as f64 / char_count as f64
    } else {
        0.0
    };

    let has_gibberish_word = text_lower.split_whitespace().any(|word| {
        let len = word.chars().count();
        if len <= 5 {
            return false;
        }
        let vowels = word.chars().filter(|c| VOWELS_ALL.contains(*c)).count();
        (vowels as f64) / (len as f64) < 0.1
    });

    let stray_short_words = text_lower
        .split_whitespace()
        .filter(|word| word.chars().count() <= 2 && !COMMON_SHORT_WORDS.contains(word))
        .count();

    junk_ratio > JUNK_RATIO_LIMIT
        || has_gibberish_word
        || (stray_short_words > 3 && word_count < 7)
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Answer, Difficulty, SessionStatus};
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    fn make_question(id: u32, kind: QuestionType, topics: &[&str]) -> Question {
        Question {
            id,
            skill: "python".to_string(),
            difficulty: Difficulty::Medium,
            kind,
            text: "q".to_string(),
            expected_topics: topics.iter().map(|t| t.to_string()).collect(),
            lang: "en".to_string(),
        }
    }

    fn make_answer(question_id: u32, text: &str) -> Answer {
        Answer {
            question_id,
            text: text.to_string(),
            time_spent: 120,
            submitted_at: Utc.with_ymd_and_hms(2025, 11, 2, 10, 0, 0).unwrap(),
            is_timeout: false,
            ai_score: None,
        }
    }

    fn make_summary(answers: Vec<Answer>) -> SessionSummary {
        SessionSummary {
            session_id: Uuid::nil(),
            candidate_name: "Test".to_string(),
            total_questions: answers.len(),
            answered_questions: answers.len(),
            total_time_spent: 0,
            status: SessionStatus::Finished,
            answers,
        }
    }

    #[test]
    fn test_empty_session_scores_zero() {
        let scores = score_technical(&make_summary(vec![]), &[]);
        assert_eq!(scores.knowledge, 0.0);
        assert_eq!(scores.problem_solving, 0.0);
    }

    #[test]
    fn test_topic_coverage_scores() {
        let question = make_question(1, QuestionType::Theory, &["generators", "memory"]);
        let answer = make_answer(
            1,
            "generators avoid loading everything into memory because each item is \
             produced lazily while iterating over the source data stream here",
        );
        let scores = score_technical(&make_summary(vec![answer]), &[question]);
        // Both topics matched (100) and keyword bonus applies, capped at 100.
        assert!(scores.knowledge >= 100.0 - 1e-9);
    }

    #[test]
    fn test_non_answer_zeroes_despite_topic_overlap() {
        // "не знаю" disqualifies even though the topic word appears.
        let question = make_question(1, QuestionType::Theory, &["generators"]);
        let answer = make_answer(1, "не знаю про generators");
        let scores = score_technical(&make_summary(vec![answer]), &[question]);
        assert_eq!(scores.knowledge, 0.0);
        assert_eq!(scores.problem_solving, 0.0);
    }

    #[test]
    fn test_gibberish_scores_zero() {
        let answer = make_answer(1, "aaaaaa");
        let scores = score_technical(
            &make_summary(vec![answer]),
            &[make_question(1, QuestionType::Theory, &["anything"])],
        );
        assert_eq!(scores.knowledge, 0.0);
    }

    #[test]
    fn test_keyword_plus_mash_zeroed_by_junk_guard() {
        // "qwrtpsdfg" is a vowel-free mash; the guard overrides the topic hit.
        let answer = make_answer(1, "python qwrtpsdfg");
        let scores = score_technical(
            &make_summary(vec![answer]),
            &[make_question(1, QuestionType::Theory, &["python"])],
        );
        assert_eq!(scores.knowledge, 0.0);
    }

    #[test]
    fn test_long_but_irrelevant_scores_nothing_from_length() {
        let text = "my cousin went to the mountains last summer and the weather was \
                    lovely so we walked for hours and talked about life and cooking \
                    and music until the sun went down over the valley";
        let answer = make_answer(1, text);
        let scores = score_technical(
            &make_summary(vec![answer]),
            &[make_question(1, QuestionType::Theory, &["sharding"])],
        );
        assert_eq!(scores.knowledge, 0.0);
    }

    #[test]
    fn test_timeout_answer_scores_zero() {
        let mut answer = make_answer(1, "a perfectly fine answer about database indexing");
        answer.is_timeout = true;
        let scores = score_technical(
            &make_summary(vec![answer]),
            &[make_question(1, QuestionType::Theory, &["database"])],
        );
        assert_eq!(scores.knowledge, 0.0);
    }

    #[test]
    fn test_no_expected_topics_means_no_topic_credit() {
        // Relevance can still come from keywords, but the topic component
        // contributes zero rather than a default.
        let answer = make_answer(1, "short reply");
        let scores = score_technical(
            &make_summary(vec![answer]),
            &[make_question(1, QuestionType::Theory, &[])],
        );
        assert_eq!(scores.knowledge, 0.0);
    }

    #[test]
    fn test_case_question_uses_problem_solving_markers() {
        let question = make_question(1, QuestionType::Case, &["caching"]);
        let answer = make_answer(
            1,
            "it depends on the workload; one strategy is caching hot keys, the \
             alternative is precomputing, and the trade-off is staleness versus \
             latency, so the solution should scale with read volume and handling \
             of invalidation must be explicit across every node involved",
        );
        let scores = score_technical(&make_summary(vec![answer]), &[question]);
        assert!(scores.problem_solving >= 75.0, "ps was {}", scores.problem_solving);
    }

    #[test]
    fn test_theory_question_problem_solving_is_proxy() {
        let question = make_question(1, QuestionType::Theory, &["closure", "scope"]);
        let answer = make_answer(
            1,
            "a closure captures variables from the enclosing scope so the function \
             keeps access to them after the outer frame returns, which is the whole \
             point of callbacks holding state",
        );
        let scores = score_technical(&make_summary(vec![answer]), &[question]);
        assert!(scores.knowledge > 0.0);
        assert!((scores.problem_solving - scores.knowledge * 0.8).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_question_id_still_grades() {
        // No metadata: no topics, but keywords still earn the bonus path.
        let answer = make_answer(
            99,
            "the architecture should keep the database behind an api layer with \
             caching for performance and an async queue for slow work so the \
             interface stays responsive under load at all times",
        );
        let scores = score_technical(&make_summary(vec![answer]), &[]);
        assert!(scores.knowledge > 0.0);
    }

    #[test]
    fn test_scores_bounded() {
        let question = make_question(1, QuestionType::Case, &["api"]);
        let answer = make_answer(
            1,
            "api api api architecture database performance pattern logic thread \
             async sync method function class object interface testing unit rest \
             sql nosql deploy integration complexity implementation strategy \
             solution alternative depends scale trade-off handling",
        );
        let scores = score_technical(&make_summary(vec![answer]), &[question]);
        assert!(scores.knowledge <= 100.0);
        assert!(scores.problem_solving <= 100.0);
    }
}
