//! Per-answer signal fusion and session-level aggregation.

use std::collections::{BTreeSet, HashMap};

use tracing::{debug, info};

use crate::config::ScoringPolicy;
use crate::integrity::signal::{
    AnalyzerKind, AnswerIntegrityReport, FullIntegrityReport, SignalResult,
};
use crate::integrity::{ai_detector, plagiarism, round2, structure, time_behavior};
use crate::models::{Question, SessionSummary};

/// Honesty weights: AI probability dominates, then plagiarism, then timing,
/// then structural health.
const WEIGHT_AI: f64 = 0.4;
const WEIGHT_PLAGIARISM: f64 = 0.3;
const WEIGHT_TIME: f64 = 0.2;
const WEIGHT_STRUCTURE: f64 = 0.1;

/// An answer is marked suspicious below this honesty, or above this level
/// on either suspicion axis.
const SUSPICIOUS_HONESTY_BELOW: f64 = 0.6;
const SUSPICIOUS_SIGNAL_ABOVE: f64 = 0.7;

/// Session flags raised by the aggregate.
const HIGH_RISK_HONESTY_BELOW: f64 = 0.5;

/// Runs the full integrity pass over a finished session.
///
/// Answers are processed in submission order; the plagiarism checker sees
/// exactly the texts that preceded the answer under analysis, so reordering
/// the input changes the result by design.
pub fn analyze_integrity(
    summary: &SessionSummary,
    questions: &[Question],
    policy: &ScoringPolicy,
) -> FullIntegrityReport {
    let question_map: HashMap<u32, &Question> = questions.iter().map(|q| (q.id, q)).collect();

    let mut answer_reports = Vec::with_capacity(summary.answers.len());
    let mut previous_texts: Vec<String> = Vec::with_capacity(summary.answers.len());

    for answer in &summary.answers {
        // Unknown question ids degrade to medium difficulty instead of
        // failing the whole pass.
        let difficulty = question_map
            .get(&answer.question_id)
            .map(|q| q.difficulty)
            .unwrap_or_default();

        // The interview-flow layer may have already run the speed trap on
        // submission; reuse its score so fast typing is not punished twice.
        let ai_result = match answer.ai_score {
            Some(score) => {
                let mut reused = SignalResult::new(AnalyzerKind::AiDetection, score);
                reused.probability = Some(score);
                reused
            }
            None => ai_detector::analyze(&answer.text, answer.time_spent),
        };
        let ai_score = ai_result.score;

        let structure_result = structure::analyze(&answer.text);
        let time_result = time_behavior::analyze(
            answer.time_spent,
            difficulty,
            answer.text.chars().count(),
        );
        let plagiarism_result = plagiarism::analyze(&answer.text, &previous_texts);
        let plagiarism_score = plagiarism_result.score;

        previous_texts.push(answer.text.clone());

        let mut honesty = WEIGHT_AI * (1.0 - ai_score)
            + WEIGHT_PLAGIARISM * (1.0 - plagiarism_score)
            + WEIGHT_TIME * time_result.score
            + WEIGHT_STRUCTURE * structure_result.score;

        // Kill switch: near-certain cheating evidence overrides whatever the
        // weighted sum said.
        if ai_score > policy.kill_switch_cap_threshold
            || plagiarism_score > policy.kill_switch_cap_threshold
        {
            honesty = honesty.min(policy.kill_switch_cap);
            if ai_score > policy.kill_switch_force_threshold {
                honesty = policy.kill_switch_force;
            }
        }

        let is_suspicious = honesty < SUSPICIOUS_HONESTY_BELOW
            || ai_score > SUSPICIOUS_SIGNAL_ABOVE
            || plagiarism_score > SUSPICIOUS_SIGNAL_ABOVE;

        let signals = vec![ai_result, structure_result, time_result, plagiarism_result];

        let all_flags: BTreeSet<&str> = signals
            .iter()
            .flat_map(|signal| signal.flags.iter().map(String::as_str))
            .collect();

        let answer_summary = if is_suspicious {
            let shown: Vec<&str> = all_flags.iter().copied().take(3).collect();
            format!("Suspicious activity detected: {}", shown.join(", "))
        } else {
            "Answer looks authentic and manually written.".to_string()
        };

        if is_suspicious {
            debug!(
                question_id = answer.question_id,
                honesty = round2(honesty),
                ai_score,
                plagiarism_score,
                "answer flagged as suspicious"
            );
        }

        answer_reports.push(AnswerIntegrityReport {
            question_id: answer.question_id,
            honesty_score: round2(honesty * 100.0),
            is_suspicious,
            ai_probability: ai_score,
            signals,
            summary: answer_summary,
        });
    }

    let overall_honesty = if answer_reports.is_empty() {
        // No evidence at all: report the configured trust default rather
        // than punishing an empty session.
        policy.trust_on_empty_session
    } else {
        let sum: f64 = answer_reports.iter().map(|r| r.honesty_score).sum();
        sum / answer_reports.len() as f64 / 100.0
    };

    let suspicious_count = answer_reports.iter().filter(|r| r.is_suspicious).count();

    let mut global_flags = BTreeSet::new();
    if overall_honesty < HIGH_RISK_HONESTY_BELOW {
        global_flags.insert("HIGH_RISK_OF_CHEATING".to_string());
    }
    if suspicious_count * 2 > answer_reports.len() && !answer_reports.is_empty() {
        global_flags.insert("SYSTEMIC_AI_USAGE_LIKELY".to_string());
    }

    let recommendation = if overall_honesty > 0.8 {
        "Highly Trustworthy: The candidate answered naturally and manually."
    } else if overall_honesty > 0.6 {
        "Mostly Honest: Some flags detected, but likely minor assistance or fast typing."
    } else if overall_honesty > 0.4 {
        "Suspect: Significant indicators of AI assistance or automated tools."
    } else {
        "Risk: Strong probability of systemic cheating. Human review recommended."
    };

    info!(
        session_id = %summary.session_id,
        overall_honesty = round2(overall_honesty),
        suspicious_count,
        "integrity pass complete"
    );

    FullIntegrityReport {
        session_id: summary.session_id,
        candidate_name: summary.candidate_name.clone(),
        overall_honesty_score: overall_honesty,
        suspicious_answers_count: suspicious_count,
        global_flags,
        answer_reports,
        recommendation: recommendation.to_string(),
    }
}
