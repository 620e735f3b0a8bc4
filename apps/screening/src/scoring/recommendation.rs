//! Final decision policy: maps score, honesty, and session flags to a
//! discrete hiring decision plus the human-readable rationale HR sees.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::scoring::aggregate::ScoreBreakdown;
use crate::scoring::confidence::ConfidenceLevel;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
    StrongHire,
    Hire,
    Review,
    Reject,
}

impl Decision {
    pub fn label(&self) -> &'static str {
        match self {
            Decision::StrongHire => "Strong Hire",
            Decision::Hire => "Hire",
            Decision::Review => "Review",
            Decision::Reject => "Reject",
        }
    }
}

/// The terminal artifact of the pipeline. Persisted and delivered by
/// external collaborators; created exactly once per scoring pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinalRecommendation {
    pub session_id: Uuid,
    pub candidate_name: String,
    pub final_score: u32,
    pub decision: Decision,
    pub confidence: ConfidenceLevel,
    /// Russian and Uzbek comment halves, "|||"-delimited.
    pub hr_comment: String,
    pub score_breakdown: ScoreBreakdown,
    pub flags: Vec<String>,
    pub metadata: BTreeMap<String, serde_json::Value>,
}

/// Decision matrix, evaluated top-down; the first matching row wins.
pub fn recommend(
    score: u32,
    breakdown: &ScoreBreakdown,
    flags: &BTreeSet<String>,
) -> (Decision, String) {
    if score >= 85 {
        if breakdown.honesty_score < 60.0 {
            return (
                Decision::Review,
                "Excellent technical knowledge, but significant integrity flags require human verification."
                    .to_string(),
            );
        }
        return (
            Decision::StrongHire,
            "Exceptional candidate with strong technical depth and authentic communication."
                .to_string(),
        );
    }

    if score >= 70 {
        if breakdown.honesty_score < 50.0 {
            return (
                Decision::Review,
                "Good technical level, but low honesty score suggests potential AI usage or copy-pasting."
                    .to_string(),
            );
        }
        return (
            Decision::Hire,
            "Solid technical foundation. The candidate displays clear competence in the required skills."
                .to_string(),
        );
    }

    if score >= 50 {
        if flags.contains("HIGH_RISK_OF_CHEATING") {
            return (
                Decision::Reject,
                "Candidate showed borderline performance and multiple serious integrity violations."
                    .to_string(),
            );
        }
        return (
            Decision::Review,
            "Average performance. May need additional training or a follow-up interview for clarification."
                .to_string(),
        );
    }

    let reason = if breakdown.knowledge_score < 40.0 {
        "Insufficient technical knowledge demonstrated during the interview."
    } else {
        "Score is below the required threshold for this position."
    };
    (
        Decision::Reject,
        format!("Does not meet current requirements. {reason}"),
    )
}

/// Composes the bilingual HR comment (Russian ||| Uzbek) from three
/// independent observations: knowledge tier, honesty tier, and timing
/// health. `timing_health` is the session's mean time-behavior score on
/// 0-100.
pub fn generate_comment(breakdown: &ScoreBreakdown, timing_health: f64) -> String {
    let mut comments_ru: Vec<&str> = Vec::new();
    let mut comments_uz: Vec<&str> = Vec::new();

    if breakdown.knowledge_score > 80.0 {
        comments_ru.push("Демонстрирует глубокое понимание концепций.");
        comments_uz.push("Asosiy tushunchalarni chuqur bilishini namoyish etadi.");
    } else if breakdown.knowledge_score > 60.0 {
        comments_ru.push("Показывает хорошее понимание стека.");
        comments_uz.push("Texnologiyalar stekini yaxshi tushunadi.");
    }

    if breakdown.honesty_score < 60.0 {
        comments_ru.push("Заметка: Ответы похожи на AI.");
        comments_uz.push("Eslatma: Javoblar AI ga o'xshaydi.");
    } else if breakdown.honesty_score > 90.0 {
        comments_ru.push("Ответы выглядят естественными.");
        comments_uz.push("Javoblar tabiiy va samimiy ko'rinadi.");
    }

    if timing_health < 50.0 {
        comments_ru.push("Подозрительно быстрые ответы.");
        comments_uz.push("Javoblar shubhali darajada tez berilgan.");
    }

    if comments_ru.is_empty() {
        comments_ru.push("Стандартный результат.");
        comments_uz.push("Standart natija.");
    }

    format!("{}|||{}", comments_ru.join(" "), comments_uz.join(" "))
}
