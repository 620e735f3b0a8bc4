//! "Does this text look like a resume at all?" Additive scoring over
//! section markers, contact info, and date patterns, with a penalty for
//! long documents that carry none of the usual resume structure.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::errors::EngineError;

/// Section and vocabulary markers a resume usually carries, across the
/// three supported languages.
static RESUME_MARKERS: &[&str] = &[
    // EN
    "experience",
    "work history",
    "employment",
    "projects",
    "education",
    "skills",
    "technologies",
    "certificates",
    "languages",
    "summary",
    "profile",
    "cv",
    "resume",
    "curriculum vitae",
    "university",
    "college",
    "job",
    "career",
    "training",
    // RU
    "опыт работы",
    "образование",
    "навыки",
    "технологии",
    "проекты",
    "курсы",
    "сертификаты",
    "о себе",
    "контакты",
    "личные данные",
    "резюме",
    "телефон",
    "почта",
    "разработка",
    "работа",
    // UZ
    "ish tajribasi",
    "ma'lumoti",
    "ko'nikmalar",
    "loyihalar",
    "kurslar",
    "sertifikatlar",
    "til",
    "aloqa",
    "rabota",
    "telefon",
    "manzil",
];

static EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").unwrap());
static PHONE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\+?\d{9,15}").unwrap());
static YEAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(19|20)\d{2}\b").unwrap());

const PASS_THRESHOLD: i32 = 20;
const LONG_DOCUMENT_CHARS: usize = 3000;

/// Accepts or rejects candidate text as a resume. The single place where
/// the engine refuses input instead of degrading.
pub fn validate_resume(text: &str) -> Result<(), EngineError> {
    let score = validation_score(text);
    if score >= PASS_THRESHOLD {
        Ok(())
    } else {
        Err(EngineError::NotAResume(format!(
            "validation score {score} below threshold {PASS_THRESHOLD}"
        )))
    }
}

fn validation_score(text: &str) -> i32 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0;
    }
    let char_count = trimmed.chars().count();
    if char_count < 50 {
        return 0;
    }

    let text_lower = text.to_lowercase();
    let marker_count = RESUME_MARKERS
        .iter()
        .filter(|m| text_lower.contains(*m))
        .count();

    let has_email = EMAIL.is_match(text);
    let has_phone = PHONE.is_match(text);
    let has_years = YEAR.is_match(text);

    let mut score = 0;

    // Contact info is the strongest single signal.
    if has_email || has_phone {
        score += 20;
    }

    if marker_count >= 2 {
        score += 20;
    } else if marker_count >= 1 {
        score += 10;
    }

    if has_years {
        score += 10;
    }

    // Long documents with almost no resume structure are usually something
    // else entirely pasted into the upload box.
    if char_count > LONG_DOCUMENT_CHARS && marker_count < 3 {
        score -= 15;
    }

    debug!(
        char_count,
        marker_count, has_email, has_phone, has_years, score, "resume validation"
    );

    score
}
