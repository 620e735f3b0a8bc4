//! One-shot evaluation CLI: feed it a session JSON file, get the final
//! recommendation on stdout. Stands in for the orchestration layer when
//! developing scoring changes.

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use screening::models::{Question, SessionSummary};
use screening::ports::{InMemorySessionStore, LogNotifier, Notifier, SessionStore};
use screening::{evaluate_session, Config};

/// Input file shape: the three collaborator-provided inputs in one object.
#[derive(Debug, Deserialize)]
struct EvaluationInput {
    summary: SessionSummary,
    questions: Vec<Question>,
    #[serde(default)]
    cv_skills: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let path = std::env::args()
        .nth(1)
        .context("usage: screening <session.json>")?;
    let raw = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read input file '{path}'"))?;
    let input: EvaluationInput =
        serde_json::from_str(&raw).context("input file is not valid session JSON")?;

    info!(
        session_id = %input.summary.session_id,
        answers = input.summary.answers.len(),
        questions = input.questions.len(),
        "evaluating session"
    );

    // Drive the engine the way the orchestration layer would: through the
    // store seam rather than passing structs straight through.
    let store = InMemorySessionStore::new();
    let session_id = input.summary.session_id;
    store.insert_summary(input.summary);
    let summary = store.load_summary(session_id).await?;

    let recommendation =
        evaluate_session(&summary, &input.questions, &input.cv_skills, &config.policy);
    store.save_recommendation(&recommendation).await?;
    LogNotifier.deliver(&recommendation).await?;

    println!("{}", serde_json::to_string_pretty(&recommendation)?);
    Ok(())
}
