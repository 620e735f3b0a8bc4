//! Candidate screening engine: resume heuristics, interview planning, and
//! the answer scoring and integrity pipeline that turns a finished session
//! into a hire/reject recommendation.
//!
//! The engine is a library of pure, deterministic functions. Transport,
//! persistence, document parsing, and message templating belong to the
//! surrounding system; see `ports` for the seams.

pub mod config;
pub mod cv;
pub mod errors;
pub mod integrity;
pub mod interview;
pub mod level;
pub mod models;
pub mod pipeline;
pub mod ports;
pub mod ranking;
pub mod scoring;

pub use config::{Config, ScoringPolicy};
pub use errors::EngineError;
pub use pipeline::evaluate_session;
