use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The four signal axes. Closed set: adding an analyzer means adding a
/// variant here, not matching on strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalyzerKind {
    AiDetection,
    Structure,
    TimeBehavior,
    Plagiarism,
}

/// Output of a single analyzer for a single answer.
///
/// Scores are directional per axis: for `AiDetection` and `Plagiarism`
/// higher means more suspicious; for `Structure` and `TimeBehavior` higher
/// means healthier. The fusion step in `analyzer.rs` is the only place that
/// needs to know which is which.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignalResult {
    pub kind: AnalyzerKind,
    /// Always in [0, 1].
    pub score: f64,
    pub probability: Option<f64>,
    pub flags: BTreeSet<String>,
    pub details: BTreeMap<String, serde_json::Value>,
}

impl SignalResult {
    pub fn new(kind: AnalyzerKind, score: f64) -> Self {
        SignalResult {
            kind,
            score,
            probability: None,
            flags: BTreeSet::new(),
            details: BTreeMap::new(),
        }
    }

    pub fn has_flag(&self, flag: &str) -> bool {
        self.flags.contains(flag)
    }
}

/// Integrity verdict for one answer. Lives only inside a
/// `FullIntegrityReport`; never persisted on its own.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerIntegrityReport {
    pub question_id: u32,
    /// Weighted honesty, rescaled to 0-100.
    pub honesty_score: f64,
    pub is_suspicious: bool,
    pub ai_probability: f64,
    pub signals: Vec<SignalResult>,
    pub summary: String,
}

/// Session-level integrity report, built once per scoring pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullIntegrityReport {
    pub session_id: Uuid,
    pub candidate_name: String,
    /// Mean of per-answer honesty, back on the 0-1 scale. An empty session
    /// reports the configured trust-on-no-evidence value (1.0 by default).
    pub overall_honesty_score: f64,
    pub suspicious_answers_count: usize,
    pub global_flags: BTreeSet<String>,
    pub answer_reports: Vec<AnswerIntegrityReport>,
    pub recommendation: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyzer_kind_snake_case() {
        let json = serde_json::to_string(&AnalyzerKind::AiDetection).unwrap();
        assert_eq!(json, r#""ai_detection""#);
        let json = serde_json::to_string(&AnalyzerKind::TimeBehavior).unwrap();
        assert_eq!(json, r#""time_behavior""#);
    }

    #[test]
    fn test_signal_result_flags_serialize_sorted() {
        let mut result = SignalResult::new(AnalyzerKind::Plagiarism, 0.9);
        result.flags.insert("zeta".to_string());
        result.flags.insert("alpha".to_string());
        let json = serde_json::to_string(&result).unwrap();
        let zeta = json.find("zeta").unwrap();
        let alpha = json.find("alpha").unwrap();
        assert!(alpha < zeta, "flag order must be deterministic");
    }
}
