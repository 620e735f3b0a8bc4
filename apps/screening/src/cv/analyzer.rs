//! Orchestrates resume analysis: validate, extract skills, infer related
//! skills, and estimate experience.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::cv::skills::{extract_skills, infer_related_skills};
use crate::cv::validate::validate_resume;
use crate::errors::EngineError;

static EXPERIENCE_YEARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+)\+?\s*(?:years?|yrs?|лет|года?|yil)").unwrap());

/// Structured result of analyzing one resume's plain text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CvAnalysis {
    pub skills_detected: Vec<String>,
    pub inferred_skills: Vec<String>,
    pub experience_years: Option<f64>,
    /// Per-stage confidence in this analysis, keyed by stage name.
    pub confidence: BTreeMap<String, f64>,
}

impl CvAnalysis {
    /// All skills, explicit first, deduplicated.
    pub fn all_skills(&self) -> Vec<String> {
        let mut all = self.skills_detected.clone();
        for skill in &self.inferred_skills {
            if !all.contains(skill) {
                all.push(skill.clone());
            }
        }
        all
    }
}

/// Analyzes resume plain text. Fails only when the text does not look like
/// a resume at all; thin-but-valid resumes come back with low confidence
/// instead of an error.
pub fn analyze_text(text: &str) -> Result<CvAnalysis, EngineError> {
    validate_resume(text)?;

    let skills_detected = extract_skills(text);
    let inferred_skills = infer_related_skills(&skills_detected);
    let experience_years = estimate_experience(text);

    let mut confidence = BTreeMap::new();
    confidence.insert("parsing".to_string(), 1.0);
    confidence.insert(
        "skill_extraction".to_string(),
        if skills_detected.is_empty() { 0.1 } else { 0.85 },
    );
    confidence.insert(
        "skill_inference".to_string(),
        if inferred_skills.is_empty() { 0.0 } else { 0.75 },
    );

    info!(
        skills = skills_detected.len(),
        inferred = inferred_skills.len(),
        experience_years,
        "resume analyzed"
    );

    Ok(CvAnalysis {
        skills_detected,
        inferred_skills,
        experience_years,
        confidence,
    })
}

/// Looks for "N years" / "N+ years" phrasings and takes the largest.
fn estimate_experience(text: &str) -> Option<f64> {
    EXPERIENCE_YEARS
        .captures_iter(&text.to_lowercase())
        .filter_map(|captures| captures[1].parse::<u32>().ok())
        .max()
        .map(f64::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESUME: &str = "John Doe\njohn@example.com\nExperience: 6+ years of backend \
        development with Python and Django since 2018.\nSkills: PostgreSQL, Docker.\n\
        Education: State University.";

    #[test]
    fn test_analysis_extracts_and_infers() {
        let analysis = analyze_text(RESUME).unwrap();
        assert!(analysis.skills_detected.contains(&"python".to_string()));
        assert!(analysis.skills_detected.contains(&"django".to_string()));
        // postgresql implies sql, which was not explicit.
        assert!(analysis.inferred_skills.contains(&"sql".to_string()));
        assert_eq!(analysis.experience_years, Some(6.0));
    }

    #[test]
    fn test_rejects_non_resume() {
        assert!(analyze_text("hello world this is a short note").is_err());
    }

    #[test]
    fn test_experience_takes_max_of_matches() {
        assert_eq!(
            estimate_experience("2 years at Acme, then 5 years at Beta Corp"),
            Some(5.0)
        );
    }

    #[test]
    fn test_experience_absent() {
        assert_eq!(estimate_experience("worked at three companies"), None);
    }

    #[test]
    fn test_no_skills_lowers_confidence() {
        let text = "Jane Roe\njane@example.com\nExperience: 3 years as project manager, \
                    2019-2022.\nEducation: City College.\nSkills: communication.";
        let analysis = analyze_text(text).unwrap();
        assert_eq!(analysis.confidence["skill_extraction"], 0.1);
    }

    #[test]
    fn test_all_skills_deduplicates() {
        let analysis = CvAnalysis {
            skills_detected: vec!["python".to_string()],
            inferred_skills: vec!["python".to_string(), "sql".to_string()],
            experience_years: None,
            confidence: BTreeMap::new(),
        };
        assert_eq!(analysis.all_skills(), vec!["python", "sql"]);
    }
}
