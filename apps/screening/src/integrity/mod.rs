//! Answer-integrity pipeline: four independent signal analyzers and the
//! aggregation pass that fuses them into per-answer honesty and a
//! session-level report.

pub mod ai_detector;
pub mod analyzer;
pub mod plagiarism;
pub mod signal;
pub mod structure;
pub mod time_behavior;

pub use analyzer::analyze_integrity;
pub use signal::{AnalyzerKind, AnswerIntegrityReport, FullIntegrityReport, SignalResult};

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
