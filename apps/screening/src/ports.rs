//! Collaborator interfaces. Persistence and delivery of results belong to
//! the surrounding system; the engine only defines the seams it consumes
//! and ships an in-memory stand-in for tests and the demo binary.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::EngineError;
use crate::models::SessionSummary;
use crate::scoring::FinalRecommendation;

/// Session persistence as seen from the engine.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn load_summary(&self, session_id: Uuid) -> Result<SessionSummary, EngineError>;
    async fn save_recommendation(
        &self,
        recommendation: &FinalRecommendation,
    ) -> Result<(), EngineError>;
}

/// Downstream delivery of a finished recommendation (mail, bot, webhook).
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn deliver(&self, recommendation: &FinalRecommendation) -> Result<(), EngineError>;
}

/// Notifier that writes deliveries to the log. Useful on its own in
/// development and as the fallback channel when real transports fail.
#[derive(Default)]
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn deliver(&self, recommendation: &FinalRecommendation) -> Result<(), EngineError> {
        tracing::info!(
            session_id = %recommendation.session_id,
            candidate = %recommendation.candidate_name,
            final_score = recommendation.final_score,
            decision = recommendation.decision.label(),
            "recommendation delivered"
        );
        Ok(())
    }
}

/// Map-backed store for tests and the demo binary.
#[derive(Default)]
pub struct InMemorySessionStore {
    summaries: Mutex<HashMap<Uuid, SessionSummary>>,
    saved: Mutex<Vec<FinalRecommendation>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_summary(&self, summary: SessionSummary) {
        self.summaries
            .lock()
            .expect("session store lock poisoned")
            .insert(summary.session_id, summary);
    }

    pub fn saved_recommendations(&self) -> Vec<FinalRecommendation> {
        self.saved
            .lock()
            .expect("session store lock poisoned")
            .clone()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn load_summary(&self, session_id: Uuid) -> Result<SessionSummary, EngineError> {
        self.summaries
            .lock()
            .expect("session store lock poisoned")
            .get(&session_id)
            .cloned()
            .ok_or_else(|| EngineError::NotFound(format!("session {session_id}")))
    }

    async fn save_recommendation(
        &self,
        recommendation: &FinalRecommendation,
    ) -> Result<(), EngineError> {
        self.saved
            .lock()
            .expect("session store lock poisoned")
            .push(recommendation.clone());
        Ok(())
    }
}
