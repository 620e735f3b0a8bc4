//! End-to-end evaluation: integrity, technical scoring, confidence,
//! aggregation, and the final recommendation, in one deterministic pass.
//! Everything here is a pure function of the inputs; session locking and
//! persistence are the caller's concern.

use tracing::info;

use crate::config::ScoringPolicy;
use crate::integrity::{analyze_integrity, AnalyzerKind, FullIntegrityReport};
use crate::models::{Question, SessionSummary};
use crate::scoring::{
    aggregate, dominant_mix, estimate_confidence, finalize_score, generate_comment, recommend,
    FinalRecommendation,
};

/// Runs the full scoring pass for a finished session.
pub fn evaluate_session(
    summary: &SessionSummary,
    questions: &[Question],
    cv_skills: &[String],
    policy: &ScoringPolicy,
) -> FinalRecommendation {
    let integrity = analyze_integrity(summary, questions, policy);

    let answer_lengths: Vec<usize> = summary
        .answers
        .iter()
        .map(|a| a.text.chars().count())
        .collect();
    let confidence = estimate_confidence(
        summary.total_questions,
        summary.answered_questions,
        &answer_lengths,
        integrity.suspicious_answers_count,
    );

    let breakdown = aggregate(summary, &integrity, questions, cv_skills, confidence);

    let difficulty_mix = dominant_mix(questions);
    let final_score = finalize_score(&breakdown, difficulty_mix, policy);

    let (decision, reason) = recommend(final_score, &breakdown, &integrity.global_flags);
    let hr_comment = generate_comment(&breakdown, timing_health(&integrity));

    let mut flags: Vec<String> = integrity.global_flags.iter().cloned().collect();
    flags.push(reason);

    let mut metadata = std::collections::BTreeMap::new();
    metadata.insert(
        "difficulty_mix".to_string(),
        serde_json::json!(difficulty_mix.label()),
    );
    metadata.insert(
        "integrity_summary".to_string(),
        serde_json::json!(integrity.recommendation),
    );

    info!(
        session_id = %summary.session_id,
        final_score,
        decision = decision.label(),
        confidence = confidence.label(),
        "session evaluated"
    );

    FinalRecommendation {
        session_id: summary.session_id,
        candidate_name: summary.candidate_name.clone(),
        final_score,
        decision,
        confidence,
        hr_comment,
        score_breakdown: breakdown,
        flags,
        metadata,
    }
}

/// Mean time-behavior score across the session on 0-100; an empty session
/// counts as healthy timing.
fn timing_health(integrity: &FullIntegrityReport) -> f64 {
    let scores: Vec<f64> = integrity
        .answer_reports
        .iter()
        .flat_map(|report| {
            report
                .signals
                .iter()
                .filter(|s| s.kind == AnalyzerKind::TimeBehavior)
                .map(|s| s.score)
        })
        .collect();
    if scores.is_empty() {
        100.0
    } else {
        scores.iter().sum::<f64>() / scores.len() as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Answer, Difficulty, QuestionType, SessionStatus};
    use crate::scoring::Decision;
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    fn make_question(id: u32, skill: &str, topics: &[&str]) -> Question {
        Question {
            id,
            skill: skill.to_string(),
            difficulty: Difficulty::Medium,
            kind: QuestionType::Theory,
            text: format!("tell me about {skill}"),
            expected_topics: topics.iter().map(|t| t.to_string()).collect(),
            lang: "en".to_string(),
        }
    }

    fn make_answer(question_id: u32, text: &str, time_spent: u32) -> Answer {
        Answer {
            question_id,
            text: text.to_string(),
            time_spent,
            submitted_at: Utc.with_ymd_and_hms(2025, 11, 2, 10, 0, 0).unwrap(),
            is_timeout: false,
            ai_score: None,
        }
    }

    fn make_summary(answers: Vec<Answer>, total_questions: usize) -> SessionSummary {
        SessionSummary {
            session_id: Uuid::nil(),
            candidate_name: "Pipeline Test".to_string(),
            total_questions,
            answered_questions: answers.len(),
            total_time_spent: answers.iter().map(|a| a.time_spent).sum(),
            status: SessionStatus::Finished,
            answers,
        }
    }

    fn good_session() -> (SessionSummary, Vec<Question>, Vec<String>) {
        let questions = vec![
            make_question(1, "python", &["decorators", "functions"]),
            make_question(2, "sql", &["index", "join"]),
            make_question(3, "docker", &["container", "image"]),
            make_question(4, "python", &["generators", "memory"]),
            make_question(5, "sql", &["transaction", "isolation"]),
        ];
        let answers = vec![
            make_answer(1, "decorators wrap functions because we want reusable behavior, then the wrapper returns the inner result after logging it for later inspection", 150),
            make_answer(2, "an index speeds up the join because the database can seek instead of scanning, then the planner picks the cheaper path for execution", 170),
            make_answer(3, "a container runs from an image, because the image layers hold the filesystem, then the runtime adds a writable layer on top of those", 160),
            make_answer(4, "generators yield items lazily so memory stays flat, because nothing is materialized until the consumer asks, then iteration drives the flow", 180),
            make_answer(5, "a transaction groups writes and the isolation level decides what readers see, because anomalies appear when levels are relaxed too far", 190),
        ];
        let cv_skills = vec!["python".to_string(), "sql".to_string(), "docker".to_string()];
        (make_summary(answers, 5), questions, cv_skills)
    }

    #[test]
    fn test_good_session_scores_well() {
        let (summary, questions, cv_skills) = good_session();
        let rec = evaluate_session(&summary, &questions, &cv_skills, &ScoringPolicy::default());
        assert!(rec.final_score >= 70, "score was {}", rec.final_score);
        assert!(matches!(rec.decision, Decision::StrongHire | Decision::Hire));
        assert!(rec.hr_comment.contains("|||"));
        assert_eq!(rec.metadata["difficulty_mix"], serde_json::json!("medium"));
    }

    #[test]
    fn test_empty_session_trusted_but_rejected() {
        // Fail-open on honesty, but zero knowledge floors the final score.
        let summary = make_summary(vec![], 0);
        let rec = evaluate_session(&summary, &[], &[], &ScoringPolicy::default());
        assert_eq!(rec.score_breakdown.honesty_score, 100.0);
        assert_eq!(rec.final_score, 0);
        assert_eq!(rec.decision, Decision::Reject);
    }

    #[test]
    fn test_gibberish_session_rejected() {
        let questions = vec![make_question(1, "python", &["anything"])];
        let answers = vec![make_answer(1, "asdfghjkl", 4)];
        let rec = evaluate_session(
            &make_summary(answers, 1),
            &questions,
            &["python".to_string()],
            &ScoringPolicy::default(),
        );
        assert_eq!(rec.final_score, 0);
        assert_eq!(rec.decision, Decision::Reject);
    }

    #[test]
    fn test_ai_heavy_session_never_strong_hire() {
        let (summary, questions, cv_skills) = good_session();
        let mut summary = summary;
        for answer in &mut summary.answers {
            answer.ai_score = Some(0.95);
        }
        let rec = evaluate_session(&summary, &questions, &cv_skills, &ScoringPolicy::default());
        assert!(rec.score_breakdown.honesty_score <= 10.0);
        assert_ne!(rec.decision, Decision::StrongHire);
        assert!(rec
            .flags
            .iter()
            .any(|f| f == "HIGH_RISK_OF_CHEATING" || f == "SYSTEMIC_AI_USAGE_LIKELY"));
    }

    #[test]
    fn test_deterministic_end_to_end() {
        let (summary, questions, cv_skills) = good_session();
        let policy = ScoringPolicy::default();
        let first = evaluate_session(&summary, &questions, &cv_skills, &policy);
        let second = evaluate_session(&summary, &questions, &cv_skills, &policy);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_all_outputs_bounded() {
        let (summary, questions, cv_skills) = good_session();
        let rec = evaluate_session(&summary, &questions, &cv_skills, &ScoringPolicy::default());
        assert!(rec.final_score <= 100);
        let b = &rec.score_breakdown;
        for value in [
            b.knowledge_score,
            b.honesty_score,
            b.skills_match_score,
            b.confidence_points,
        ] {
            assert!((0.0..=100.0).contains(&value), "component out of range: {value}");
        }
    }

    #[test]
    fn test_flags_carry_reason_last() {
        let (summary, questions, cv_skills) = good_session();
        let rec = evaluate_session(&summary, &questions, &cv_skills, &ScoringPolicy::default());
        assert!(!rec.flags.is_empty());
        let last = rec.flags.last().unwrap();
        assert!(last.chars().any(|c| c.is_whitespace()), "reason text expected, got {last}");
    }

    #[test]
    fn test_fail_closed_policy_override() {
        let mut policy = ScoringPolicy::default();
        policy.trust_on_empty_session = 0.0;
        let summary = make_summary(vec![], 0);
        let rec = evaluate_session(&summary, &[], &[], &policy);
        assert_eq!(rec.score_breakdown.honesty_score, 0.0);
    }
}
