//! Scores how an answer is built: code presence, reasoning steps, and depth.
//! Higher is healthier here, unlike the suspicion-oriented analyzers.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::json;

use crate::integrity::signal::{AnalyzerKind, SignalResult};

/// Words that signal step-by-step reasoning.
static LOGIC_MARKERS: &[&str] = &[
    "first", "then", "second", "finally", "because", "therefore", "reason",
];

static CODE_PUNCTUATION: Lazy<Regex> = Lazy::new(|| Regex::new(r"[{}();]").unwrap());

/// Rates the logical structure of one answer in [0, 1].
///
/// Combination rule: arithmetic mean of every component that triggered. The
/// word-count band always contributes, so the mean is never over an empty
/// set for non-empty text.
pub fn analyze(text: &str) -> SignalResult {
    if text.is_empty() {
        return SignalResult::new(AnalyzerKind::Structure, 0.0);
    }

    let mut result = SignalResult::new(AnalyzerKind::Structure, 0.0);
    let mut scores: Vec<f64> = Vec::new();
    let text_lower = text.to_lowercase();

    let has_code = text.contains("```") || CODE_PUNCTUATION.is_match(text);
    if has_code {
        result.flags.insert("contains_code".to_string());
        scores.push(0.8);
    }

    let logic_found = LOGIC_MARKERS
        .iter()
        .filter(|word| text_lower.contains(*word))
        .count();
    if logic_found >= 2 {
        result.flags.insert("logical_steps_detected".to_string());
        scores.push(1.0);
    } else {
        result.flags.insert("lack_of_explaining_steps".to_string());
        scores.push(0.3);
    }

    let word_count = text.split_whitespace().count();
    if word_count > 100 {
        result.flags.insert("comprehensive_answer".to_string());
        scores.push(1.0);
    } else if word_count < 15 {
        result.flags.insert("too_short_answer".to_string());
        scores.push(0.2);
    } else {
        scores.push(0.7);
    }

    // Code dumped with no prose, or a wall of prose where code was expected.
    if has_code && word_count < 10 {
        result.flags.insert("raw_code_no_explanation".to_string());
        scores.push(0.4);
    }
    if !has_code && word_count > 80 {
        result.flags.insert("long_text_no_code".to_string());
        scores.push(0.6);
    }

    result.score = scores.iter().sum::<f64>() / scores.len() as f64;
    result
        .details
        .insert("word_count".to_string(), json!(word_count));
    result.details.insert("has_code".to_string(), json!(has_code));
    result
        .details
        .insert("logic_markers_found".to_string(), json!(logic_found));
    result
}
