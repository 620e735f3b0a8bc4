//! Ranks analyzed candidates for the shortlist view: skills breadth,
//! experience, analysis confidence, and stack diversity, on a 0-100 scale.

use serde::{Deserialize, Serialize};

use crate::cv::CvAnalysis;

/// Categories for the diversity bonus. Covering more of the stack beats
/// piling up skills inside one category.
static DIVERSITY_CATEGORIES: &[&[&str]] = &[
    &["react", "vue", "angular", "html", "css", "javascript", "typescript"],
    &["node.js", "python", "django", "flask", "fastapi", "java", "go"],
    &["docker", "kubernetes", "aws", "azure", "gcp", "ci/cd"],
    &["machine learning", "tensorflow", "pytorch", "nlp"],
];

const SKILLS_POINTS_CAP: f64 = 40.0;
const EXPERIENCE_POINTS_CAP: f64 = 30.0;
const CONFIDENCE_POINTS_MAX: f64 = 20.0;
const DIVERSITY_POINTS_MAX: f64 = 10.0;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedCandidate {
    pub candidate_name: String,
    pub skills_detected: Vec<String>,
    pub inferred_skills: Vec<String>,
    pub experience_years: Option<f64>,
    pub total_score: f64,
}

/// Scores and sorts candidates, best first. Ties break on name so the
/// ordering is reproducible.
pub fn rank_candidates(candidates: &[(String, CvAnalysis)]) -> Vec<RankedCandidate> {
    let mut ranked: Vec<RankedCandidate> = candidates
        .iter()
        .map(|(name, analysis)| RankedCandidate {
            candidate_name: name.clone(),
            skills_detected: analysis.skills_detected.clone(),
            inferred_skills: analysis.inferred_skills.clone(),
            experience_years: analysis.experience_years,
            total_score: score_candidate(analysis),
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.total_score
            .partial_cmp(&a.total_score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.candidate_name.cmp(&b.candidate_name))
    });
    ranked
}

fn score_candidate(analysis: &CvAnalysis) -> f64 {
    let all_skills = analysis.all_skills();

    let mut score = (all_skills.len() as f64 * 2.0).min(SKILLS_POINTS_CAP);

    let years = analysis.experience_years.unwrap_or(0.0);
    score += (years * 5.0).min(EXPERIENCE_POINTS_CAP);

    if !analysis.confidence.is_empty() {
        let average =
            analysis.confidence.values().sum::<f64>() / analysis.confidence.len() as f64;
        score += average * CONFIDENCE_POINTS_MAX;
    }

    score += diversity(&all_skills) * DIVERSITY_POINTS_MAX;

    (score * 100.0).round() / 100.0
}

fn diversity(skills: &[String]) -> f64 {
    let covered = DIVERSITY_CATEGORIES
        .iter()
        .filter(|category| {
            category
                .iter()
                .any(|s| skills.iter().any(|skill| skill.eq_ignore_ascii_case(s)))
        })
        .count();
    covered as f64 / DIVERSITY_CATEGORIES.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn make_analysis(skills: &[&str], years: Option<f64>, confidence: f64) -> CvAnalysis {
        let mut map = BTreeMap::new();
        map.insert("parsing".to_string(), confidence);
        CvAnalysis {
            skills_detected: skills.iter().map(|s| s.to_string()).collect(),
            inferred_skills: vec![],
            experience_years: years,
            confidence: map,
        }
    }

    #[test]
    fn test_stronger_profile_ranks_first() {
        let candidates = vec![
            ("Junior Dev".to_string(), make_analysis(&["python"], Some(1.0), 0.8)),
            (
                "Senior Dev".to_string(),
                make_analysis(
                    &["python", "django", "docker", "aws", "react", "pytorch"],
                    Some(8.0),
                    0.9,
                ),
            ),
        ];
        let ranked = rank_candidates(&candidates);
        assert_eq!(ranked[0].candidate_name, "Senior Dev");
        assert!(ranked[0].total_score > ranked[1].total_score);
    }

    #[test]
    fn test_score_components_capped() {
        let many_skills: Vec<String> = (0..30).map(|i| format!("skill{i}")).collect();
        let analysis = CvAnalysis {
            skills_detected: many_skills,
            inferred_skills: vec![],
            experience_years: Some(40.0),
            confidence: BTreeMap::from([("parsing".to_string(), 1.0)]),
        };
        // 40 + 30 + 20 + 0 diversity.
        assert_eq!(score_candidate(&analysis), 90.0);
    }

    #[test]
    fn test_ties_break_by_name() {
        let a = ("Beta".to_string(), make_analysis(&["python"], Some(2.0), 0.5));
        let b = ("Alpha".to_string(), make_analysis(&["python"], Some(2.0), 0.5));
        let ranked = rank_candidates(&[a, b]);
        assert_eq!(ranked[0].candidate_name, "Alpha");
    }

    #[test]
    fn test_empty_input() {
        assert!(rank_candidates(&[]).is_empty());
    }
}
