use std::collections::BTreeSet;

use regex::Regex;

/// Recognized technical skills, canonical casing.
const TECHNICAL_SKILLS: &[&str] = &[
    "SQL", "Python", "Excel", "Tableau", "Power BI", "Looker", "SAS", "SPSS",
    "ETL", "Snowflake", "BigQuery", "Redshift", "AWS", "Azure", "GCP",
    "Pandas", "NumPy", "Spark", "Hadoop", "Airflow", "dbt", "Git", "MATLAB",
    "Java", "Scala", "Statistics", "Data Visualization", "Data Modeling",
    "Machine Learning", "A/B Testing",
];

/// Education credentials, canonical casing.
const EDUCATION_CREDENTIALS: &[&str] = &[
    "Bachelor", "Master", "PhD", "MBA", "Diploma", "Certification",
];

/// Soft skills, canonical casing.
const SOFT_SKILLS: &[&str] = &[
    "Communication", "Teamwork", "Problem Solving", "Leadership",
    "Attention to Detail", "Critical Thinking", "Time Management",
    "Collaboration", "Presentation", "Stakeholder Management",
];

/// Degree-phrase shapes the plain vocabularies miss. Novel matches are
/// kept verbatim.
const DEGREE_PATTERNS: &[&str] = &[
    r"(?i)\b(?:bachelor|master)(?:'s)?(?:\s+of\s+[a-z]+)?\s+degree\b",
    r"(?i)\b(?:b\.?sc|m\.?sc|b\.?a|m\.?a|b\.?eng|m\.?eng|ph\.?d)\b",
    r"(?i)\bdegree\s+in\s+[a-z][a-z ]{2,40}",
];

struct VocabTerm {
    canonical: &'static str,
    pattern: Regex,
}

pub struct SkillExtractor {
    vocabulary: Vec<VocabTerm>,
    degree_patterns: Vec<Regex>,
}

impl SkillExtractor {
    pub fn new() -> Self {
        let vocabulary = TECHNICAL_SKILLS
            .iter()
            .chain(EDUCATION_CREDENTIALS)
            .chain(SOFT_SKILLS)
            .map(|&term| VocabTerm {
                canonical: term,
                pattern: whole_word_pattern(term),
            })
            .collect();

        let degree_patterns = DEGREE_PATTERNS
            .iter()
            .map(|p| Regex::new(p).unwrap())
            .collect();

        SkillExtractor {
            vocabulary,
            degree_patterns,
        }
    }

    /// Every vocabulary term present in `text` (case-insensitive, whole
    /// word) joins the set under its canonical casing; degree-phrase
    /// matches join verbatim. Empty input yields an empty set.
    pub fn extract_skills(&self, text: &str) -> BTreeSet<String> {
        let mut skills = BTreeSet::new();
        if text.is_empty() {
            return skills;
        }

        for term in &self.vocabulary {
            if term.pattern.is_match(text) {
                skills.insert(term.canonical.to_string());
            }
        }

        for pattern in &self.degree_patterns {
            for m in pattern.find_iter(text) {
                skills.insert(m.as_str().trim().to_string());
            }
        }

        skills
    }
}

impl Default for SkillExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Case-insensitive whole-word regex for a term. Word boundaries are only
/// asserted next to word characters, so terms like "A/B Testing" still
/// anchor correctly.
fn whole_word_pattern(term: &str) -> Regex {
    let first_is_word = term.chars().next().is_some_and(|c| c.is_alphanumeric());
    let last_is_word = term.chars().last().is_some_and(|c| c.is_alphanumeric());
    let pattern = format!(
        "(?i){}{}{}",
        if first_is_word { r"\b" } else { "" },
        regex::escape(term),
        if last_is_word { r"\b" } else { "" },
    );
    Regex::new(&pattern).unwrap()
}
