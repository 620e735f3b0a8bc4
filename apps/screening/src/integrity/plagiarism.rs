//! Template and copy-detection. Matches answers against a small corpus of
//! known interview-answer boilerplate and against the candidate's own
//! earlier answers in the session. The score is a running max across all
//! checks; a strong hit is never averaged back down by weaker ones.

use serde_json::json;

use crate::integrity::signal::{AnalyzerKind, SignalResult};

/// Templated phrasings commonly lifted from interview-prep sites.
static TEMPLATES: &[&str] = &[
    "In this example, we use a dictionary to keep track of elements.",
    "As per my knowledge, this is the most efficient way to handle this.",
    "The first thing to consider is the time complexity of the operation.",
    "Typically, we would use a library like Redux for state management.",
    "Let's break down the problem into smaller components.",
];

/// Minimum characters before cross-answer similarity is meaningful.
const SELF_SIMILARITY_MIN_CHARS: usize = 20;

/// Scores one answer for plagiarism likelihood in [0, 1]; higher is more
/// suspicious. `previous_answers` must be the earlier answers of the same
/// session in submission order.
pub fn analyze(text: &str, previous_answers: &[String]) -> SignalResult {
    let mut result = SignalResult::new(AnalyzerKind::Plagiarism, 0.0);
    let mut probability = 0.0_f64;
    let text_lower = text.to_lowercase();

    for template in TEMPLATES {
        let template_lower = template.to_lowercase();

        if text_lower.contains(&template_lower) {
            result.flags.insert("known_template_detected".to_string());
            probability = probability.max(0.9);
            continue;
        }

        if similarity_ratio(&template_lower, &text_lower) > 0.6 {
            result
                .flags
                .insert("possible_templated_phrasing".to_string());
            probability = probability.max(0.5);
        }
    }

    if text.chars().count() > SELF_SIMILARITY_MIN_CHARS {
        let max_self_similarity = previous_answers
            .iter()
            .filter(|prev| prev.chars().count() > SELF_SIMILARITY_MIN_CHARS)
            .map(|prev| similarity_ratio(&prev.to_lowercase(), &text_lower))
            .fold(0.0_f64, f64::max);

        if max_self_similarity > 0.7 {
            result.flags.insert("high_self_similarity".to_string());
            probability = probability.max(0.4);
        }
    }

    result.score = probability;
    result.probability = Some(probability);
    result.details.insert(
        "plagiarism_probability".to_string(),
        json!(probability),
    );
    result
        .details
        .insert("found_matches".to_string(), json!(result.flags.len()));
    result
}

/// Edit-distance similarity in [0, 1]: 1.0 for identical strings, 0.0 for
/// nothing in common. Computed over chars so multibyte text compares sanely.
pub fn similarity_ratio(a: &str, b: &str) -> f64 {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let longest = a_chars.len().max(b_chars.len());
    if longest == 0 {
        return 1.0;
    }
    1.0 - levenshtein(&a_chars, &b_chars) as f64 / longest as f64
}

fn levenshtein(a: &[char], b: &[char]) -> usize {
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut current = vec![0usize; b.len() + 1];

    for (i, &ca) in a.iter().enumerate() {
        current[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let substitution = prev[j] + usize::from(ca != cb);
            current[j + 1] = substitution.min(prev[j + 1] + 1).min(current[j] + 1);
        }
        std::mem::swap(&mut prev, &mut current);
    }

    prev[b.len()]
}
