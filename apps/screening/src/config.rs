use anyhow::{Context, Result};

/// Scoring policy knobs. These are deliberate policy choices, not tuning
/// parameters; each default mirrors a documented decision.
#[derive(Debug, Clone)]
pub struct ScoringPolicy {
    /// Honesty reported for a session with zero answers. Defaults to full
    /// trust (fail-open): absence of evidence is not treated as evidence of
    /// cheating. Set to 0.0 for a fail-closed posture.
    pub trust_on_empty_session: f64,
    /// Knowledge score below which the final weighted score is hard-zeroed,
    /// whatever skills-match and confidence say.
    pub technical_floor: f64,
    /// AI or plagiarism probability above which per-answer honesty is
    /// capped at `kill_switch_cap`.
    pub kill_switch_cap_threshold: f64,
    pub kill_switch_cap: f64,
    /// AI probability above which honesty is forced to `kill_switch_force`
    /// outright.
    pub kill_switch_force_threshold: f64,
    pub kill_switch_force: f64,
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        ScoringPolicy {
            trust_on_empty_session: 1.0,
            technical_floor: 5.0,
            kill_switch_cap_threshold: 0.8,
            kill_switch_cap: 0.3,
            kill_switch_force_threshold: 0.9,
            kill_switch_force: 0.1,
        }
    }
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub rust_log: String,
    pub policy: ScoringPolicy,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let mut policy = ScoringPolicy::default();
        if let Some(value) = optional_f64("TRUST_ON_EMPTY_SESSION")? {
            policy.trust_on_empty_session = value;
        }
        if let Some(value) = optional_f64("TECHNICAL_FLOOR")? {
            policy.technical_floor = value;
        }

        Ok(Config {
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            policy,
        })
    }
}

fn optional_f64(key: &str) -> Result<Option<f64>> {
    match std::env::var(key) {
        Ok(raw) => {
            let value = raw
                .parse::<f64>()
                .with_context(|| format!("Environment variable '{key}' must be a number"))?;
            Ok(Some(value))
        }
        Err(_) => Ok(None),
    }
}
