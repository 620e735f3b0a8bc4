//! Skill extraction from resume text. Purely lexical: a static vocabulary
//! matched on word boundaries, a normalization map for transliterated and
//! alias forms, and a small implication table standing in for semantic
//! inference.

use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;

/// Known tech-stack vocabulary, including Russian transliterations that
/// show up in CVs from the region.
static COMMON_SKILLS: &[&str] = &[
    // Languages
    "python", "пайтон", "питон", "piton", "payton", "javascript", "джаваскрипт", "js",
    "typescript", "тайпскрипт", "ts", "java", "джава", "c++", "c#", "go", "golang", "rust",
    "раст", "php", "ruby", "swift", "kotlin",
    // Frontend
    "react", "реакт", "vue", "angular", "ангуляр", "svelte", "next.js", "nuxt.js", "html", "css",
    "sass", "less", "tailwind",
    // Backend
    "node.js", "express", "nest.js", "django", "джанго", "flask", "фласк", "fastapi", "фастапи",
    "spring boot", "laravel", "rails", ".net",
    // Data
    "sql", "postgresql", "mysql", "mongodb", "redis", "elasticsearch", "cassandra",
    // DevOps / Cloud
    "docker", "докер", "kubernetes", "k8s", "aws", "azure", "gcp", "terraform", "ansible",
    "jenkins", "gitlab ci", "circleci", "git", "linux", "bash", "powershell",
    // Architecture / Process
    "rest api", "graphql", "grpc", "microservices", "tdd", "bdd", "agile", "scrum", "kanban",
];

/// Alias and transliteration forms mapped to their canonical names.
static NORMALIZATION: &[(&str, &str)] = &[
    ("пайтон", "python"),
    ("питон", "python"),
    ("piton", "python"),
    ("payton", "python"),
    ("джаваскрипт", "javascript"),
    ("js", "javascript"),
    ("тайпскрипт", "typescript"),
    ("ts", "typescript"),
    ("джава", "java"),
    ("раст", "rust"),
    ("реакт", "react"),
    ("ангуляр", "angular"),
    ("джанго", "django"),
    ("фласк", "flask"),
    ("фастапи", "fastapi"),
    ("докер", "docker"),
    ("k8s", "kubernetes"),
    ("golang", "go"),
];

/// Lexical stand-in for semantic skill inference: a skill on the left
/// implies working knowledge of the skill on the right.
static IMPLIED_SKILLS: &[(&str, &str)] = &[
    ("django", "python"),
    ("flask", "python"),
    ("fastapi", "python"),
    ("react", "javascript"),
    ("vue", "javascript"),
    ("next.js", "react"),
    ("nuxt.js", "vue"),
    ("rails", "ruby"),
    ("laravel", "php"),
    ("spring boot", "java"),
    ("kubernetes", "docker"),
    ("postgresql", "sql"),
    ("mysql", "sql"),
];

static NEEDS_LITERAL_MATCH: Lazy<Regex> = Lazy::new(|| Regex::new(r"[+#.]").unwrap());

/// Finds explicit skills in resume text, normalized to canonical names and
/// sorted for stable output.
pub fn extract_skills(text: &str) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }

    let text_lower = text.to_lowercase();
    let mut found: BTreeSet<String> = BTreeSet::new();

    for skill in COMMON_SKILLS {
        // Names like "c++", "c#", and "next.js" break word-boundary
        // matching, so they fall back to a literal search.
        let pattern = if NEEDS_LITERAL_MATCH.is_match(skill) {
            regex::escape(skill)
        } else {
            format!(r"\b{}\b", regex::escape(skill))
        };

        let matched = Regex::new(&pattern)
            .map(|re| re.is_match(&text_lower))
            .unwrap_or(false);
        if matched {
            found.insert(canonical(skill).to_string());
        }
    }

    found.into_iter().collect()
}

/// Expands an explicit skill list with lexically implied skills, excluding
/// anything already explicit.
pub fn infer_related_skills(explicit: &[String]) -> Vec<String> {
    let explicit_set: BTreeSet<&str> = explicit.iter().map(String::as_str).collect();
    let mut inferred: BTreeSet<String> = BTreeSet::new();

    for (skill, implied) in IMPLIED_SKILLS {
        if explicit_set.contains(skill) && !explicit_set.contains(implied) {
            inferred.insert((*implied).to_string());
        }
    }

    inferred.into_iter().collect()
}

fn canonical(skill: &str) -> &str {
    NORMALIZATION
        .iter()
        .find(|(alias, _)| *alias == skill)
        .map(|(_, canonical)| *canonical)
        .unwrap_or(skill)
}
