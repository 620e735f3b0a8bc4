use thiserror::Error;

/// Engine-level error type. The scoring pipeline itself is total over its
/// inputs and never returns these; they surface at the edges only: resume
/// validation, configuration, and collaborator ports.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Not a resume: {0}")]
    NotAResume(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Notification error: {0}")]
    Notification(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}
