//! Timing plausibility for one answer. Starts from a healthy 1.0 and
//! multiplies penalties in, so several independent timing problems compound
//! instead of averaging each other away.

use serde_json::json;

use crate::models::Difficulty;

use crate::integrity::signal::{AnalyzerKind, SignalResult};

/// Sentinel reported for chars-per-second when no time was recorded.
const CPS_UNKNOWN: f64 = 999.0;

/// Rates answer timing in [0, 1]; higher is healthier.
pub fn analyze(time_spent: u32, difficulty: Difficulty, text_length: usize) -> SignalResult {
    let mut result = SignalResult::new(AnalyzerKind::TimeBehavior, 1.0);
    let mut score = 1.0_f64;

    // Absolute floors per difficulty. A hard question cannot be thought
    // through in under 45 seconds.
    if difficulty == Difficulty::Hard && time_spent < 45 {
        result.flags.insert("too_fast_for_hard_question".to_string());
        score *= 0.4;
    }
    if difficulty == Difficulty::Medium && time_spent < 20 {
        result
            .flags
            .insert("too_fast_for_medium_question".to_string());
        score *= 0.5;
    }
    if time_spent < 10 {
        result.flags.insert("suspiciously_short_time".to_string());
        score *= 0.3;
    }

    // Typing-speed correlation: sustained >15 cps is beyond fast typists,
    // >30 cps means the text was pasted.
    let cps = if time_spent > 0 {
        text_length as f64 / time_spent as f64
    } else {
        CPS_UNKNOWN
    };
    if time_spent > 0 {
        if cps > 30.0 {
            result.flags.insert("impossible_typing_speed".to_string());
            score *= 0.3;
        } else if cps > 15.0 {
            result
                .flags
                .insert("extremely_high_typing_speed".to_string());
            score *= 0.6;
        }
    }

    result.score = score;
    result
        .details
        .insert("time_spent".to_string(), json!(time_spent));
    result
        .details
        .insert("difficulty".to_string(), json!(difficulty.label()));
    result.details.insert(
        "chars_per_second".to_string(),
        json!((cps * 10.0).round() / 10.0),
    );
    result
}
