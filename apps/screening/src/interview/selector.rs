//! Question selection for an interview: level-appropriate difficulty, a
//! theory/case balance per seniority, per-skill caps, and a soft-skills
//! top-up. All sampling runs off a caller-supplied seed, so the same
//! candidate and bank always produce the same plan.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::info;

use crate::interview::bank::QuestionBank;
use crate::level::{base_difficulty, LevelDetection, CandidateLevel};
use crate::models::{Difficulty, Question, QuestionSet, QuestionType};

/// Theory share of questions per seniority; the rest are case questions.
/// Seniors mostly get scenarios, juniors mostly definitions.
fn theory_ratio(level: CandidateLevel) -> f64 {
    match level {
        CandidateLevel::Junior => 0.7,
        CandidateLevel::Middle => 0.5,
        CandidateLevel::Senior => 0.3,
    }
}

const MAX_QUESTIONS_PER_SKILL: usize = 1;
const MAX_SKILLS_CONSIDERED: usize = 10;
const SOFT_SKILLS_COUNT: usize = 3;
const SOFT_SKILLS_KEY: &str = "soft_skills";

/// Builds the question set for a candidate.
pub fn select_questions(
    bank: &dyn QuestionBank,
    level: &LevelDetection,
    max_total_questions: usize,
    lang: &str,
    seed: u64,
) -> QuestionSet {
    let mut rng = StdRng::seed_from_u64(seed);

    let difficulty = base_difficulty(level.level);
    let ratio = theory_ratio(level.level);

    // Normalize skills: lowercase, deduplicate, cap, then shuffle so the
    // same leading skills do not dominate every interview.
    let mut seen_skills = std::collections::BTreeSet::new();
    let mut skills: Vec<String> = Vec::new();
    for raw in &level.skills {
        let skill = raw.trim().to_lowercase();
        if skill.is_empty() || !seen_skills.insert(skill.clone()) {
            continue;
        }
        skills.push(skill);
    }
    skills.truncate(MAX_SKILLS_CONSIDERED);
    skills.shuffle(&mut rng);

    let mut selected: Vec<Question> = Vec::new();
    for skill in &skills {
        selected.extend(select_for_skill(
            bank,
            skill,
            difficulty,
            ratio,
            MAX_QUESTIONS_PER_SKILL,
            lang,
            &mut rng,
        ));
    }

    info!(
        lang,
        skills_considered = skills.len(),
        questions_generated = selected.len(),
        "technical questions selected"
    );

    // Deduplicate by identity, then enforce the technical cap.
    let mut seen = std::collections::BTreeSet::new();
    selected.retain(|q| seen.insert(question_key(q)));

    if selected.len() > max_total_questions {
        selected = selected
            .choose_multiple(&mut rng, max_total_questions)
            .cloned()
            .collect();
    }

    // Soft-skills questions ride along regardless of the technical cap.
    for question in select_for_skill(
        bank,
        SOFT_SKILLS_KEY,
        difficulty,
        0.5,
        SOFT_SKILLS_COUNT,
        lang,
        &mut rng,
    ) {
        if seen.insert(question_key(&question)) {
            selected.push(question);
        }
    }

    selected.shuffle(&mut rng);

    info!(
        lang,
        final_questions = selected.len(),
        "interview question set ready"
    );

    QuestionSet {
        candidate_name: level.candidate_name.clone(),
        candidate_level: level.level.label().to_string(),
        total_questions: selected.len(),
        questions: selected,
    }
}

fn question_key(q: &Question) -> (String, String, Difficulty, QuestionType) {
    (
        q.skill.trim().to_lowercase(),
        q.text.trim().to_string(),
        q.difficulty,
        q.kind,
    )
}

/// Picks questions for one skill, honoring the theory/case split and
/// falling back to any language the bank has when the requested one is
/// empty. Translation of fallback questions is the message-templating
/// collaborator's job, not ours.
fn select_for_skill(
    bank: &dyn QuestionBank,
    skill: &str,
    difficulty: Difficulty,
    theory_ratio: f64,
    max_questions: usize,
    lang: &str,
    rng: &mut StdRng,
) -> Vec<Question> {
    let mut available = bank.questions_for(skill, difficulty, lang);

    if available.is_empty() {
        for fallback_lang in bank.available_langs(skill) {
            if fallback_lang == lang {
                continue;
            }
            available = bank.questions_for(skill, difficulty, &fallback_lang);
            if !available.is_empty() {
                info!(skill, lang, fallback_lang = %fallback_lang, "question language fallback");
                break;
            }
        }
    }
    if available.is_empty() {
        return Vec::new();
    }

    let theory: Vec<&Question> = available
        .iter()
        .filter(|q| q.kind == QuestionType::Theory)
        .collect();
    let cases: Vec<&Question> = available
        .iter()
        .filter(|q| q.kind == QuestionType::Case)
        .collect();

    let num_theory = (max_questions as f64 * theory_ratio) as usize;
    let num_case = max_questions - num_theory;

    let mut selected: Vec<Question> = Vec::new();
    selected.extend(
        theory
            .choose_multiple(rng, num_theory.min(theory.len()))
            .map(|q| (*q).clone()),
    );
    selected.extend(
        cases
            .choose_multiple(rng, num_case.min(cases.len()))
            .map(|q| (*q).clone()),
    );

    // Fill from whatever is left rather than under-delivering when one
    // type is missing from the bank.
    if selected.len() < max_questions {
        let chosen_ids: Vec<u32> = selected.iter().map(|q| q.id).collect();
        let remaining: Vec<&Question> = available
            .iter()
            .filter(|q| !chosen_ids.contains(&q.id))
            .collect();
        selected.extend(
            remaining
                .choose_multiple(rng, (max_questions - selected.len()).min(remaining.len()))
                .map(|q| (*q).clone()),
        );
    }

    selected
}
