//! Classifies answers that should score zero no matter what keywords they
//! happen to contain: keyboard mashes, repeated characters, and explicit
//! "I don't know" equivalents in English, Russian, and Uzbek.

use serde::Serialize;

/// Why an answer was classified as a non-answer. Closed set so the scorer
/// can log a concrete reason instead of a boolean.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NonAnswerReason {
    EmptyOrTooShort,
    RepeatedCharacters,
    DontKnowPhrase,
    LowVowelRatio,
    KeyboardMash,
    RepeatedWords,
}

/// "I don't know" equivalents. A match only counts when the phrase
/// dominates a short answer, or is one of the strong single signals below.
static DONT_KNOW_PHRASES: &[&str] = &[
    // EN
    "don't know",
    "dont know",
    "i do not know",
    "no idea",
    "not sure",
    "forgot",
    "can't remember",
    "random",
    "idk",
    "nothing",
    "none",
    // RU
    "не знаю",
    "не припомню",
    "не помню",
    "без понятия",
    "забыл",
    "ничего",
    "пусто",
    "рандом",
    "флоп",
    "аа",
    "ээ",
    "хмм",
    "не могу сказать",
    "не уверен",
    "сложно сказать",
    "тд",
    "т.д.",
    "и т.д.",
    "итп",
    "и т.п.",
    "хз",
    "чо",
    "че",
    "хх",
    "йй",
    "фыва",
    // UZ
    "bilmayman",
    "eslolmayman",
    "yodimda yo'q",
    "tushunmadim",
    "bilmadim",
    "unutdim",
    "t.h",
    "va h.k",
    "yo'q",
];

/// Phrases strong enough to disqualify on their own, however long the
/// answer around them.
static STRONG_SIGNALS: &[&str] = &["рандом", "не знаю", "не помню", "don't know", "bilmayman"];

static KEYBOARD_ROWS: &[&str] = &[
    "qwertyuiop",
    "asdfghjkl",
    "zxcvbnm",
    "йцукенгшщз",
    "фывапролдж",
    "ячсмитьбю",
];

/// Vowels across the three supported alphabets; 'y' and the Uzbek
/// apostrophe count, which keeps real words above the gibberish threshold.
const VOWELS: &str = "aeiouyаеёиоуыэюя'";

const MIN_VOWEL_RATIO: f64 = 0.1;
const MIN_UNIQUE_WORD_RATIO: f64 = 0.4;

/// Classifies `text`, returning the first matching disqualification.
pub fn detect(text: &str) -> Option<NonAnswerReason> {
    let trimmed = text.trim();
    if trimmed.chars().count() < 2 {
        return Some(NonAnswerReason::EmptyOrTooShort);
    }

    let text_lower = trimmed.to_lowercase();

    let mut chars = text_lower.chars();
    let first = chars.next();
    if let Some(first) = first {
        if chars.all(|c| c == first) {
            return Some(NonAnswerReason::RepeatedCharacters);
        }
    }

    let text_len = text_lower.chars().count();
    for phrase in DONT_KNOW_PHRASES {
        if text_lower.contains(phrase) {
            let dominates = text_len < phrase.chars().count() + 15;
            if dominates || STRONG_SIGNALS.contains(phrase) {
                return Some(NonAnswerReason::DontKnowPhrase);
            }
        }
    }

    if text_len > 5 {
        let vowel_count = text_lower.chars().filter(|c| VOWELS.contains(*c)).count();
        if (vowel_count as f64) / (text_len as f64) < MIN_VOWEL_RATIO {
            return Some(NonAnswerReason::LowVowelRatio);
        }

        for row in KEYBOARD_ROWS {
            if text_lower.contains(row) || (row.contains(&text_lower) && text_len > 3) {
                return Some(NonAnswerReason::KeyboardMash);
            }
        }

        let words: Vec<&str> = text_lower.split_whitespace().collect();
        if words.len() > 3 {
            let unique: std::collections::BTreeSet<&str> = words.iter().copied().collect();
            if (unique.len() as f64) / (words.len() as f64) < MIN_UNIQUE_WORD_RATIO {
                return Some(NonAnswerReason::RepeatedWords);
            }
        }
    }

    None
}
