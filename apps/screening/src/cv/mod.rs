//! Resume heuristics: validation, skill extraction, and the per-candidate
//! analysis result that feeds level detection and skills matching.
//! Document-format parsing (PDF and friends) happens upstream; everything
//! here works on plain text.

pub mod analyzer;
pub mod skills;
pub mod validate;

pub use analyzer::{analyze_text, CvAnalysis};
pub use skills::{extract_skills, infer_related_skills};
pub use validate::validate_resume;
