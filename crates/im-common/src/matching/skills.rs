use crate::similarity::{are_synonyms, normalize, tokens_overlap};

/// Score used when the posting lists no required skills.
pub const NEUTRAL_SKILLS_SCORE: f64 = 0.5;

#[derive(Debug, Clone, PartialEq)]
pub struct SkillMatchResult {
    pub score: f64,
    pub has_requirements: bool,
    /// Required skills (lower-cased) satisfied by at least one profile skill.
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub reason: String,
}

/// Required-skill coverage: each requirement counts once, matched by
/// containment or by the synonym table against any profile skill.
pub fn check_required_skills(required: &[String], possessed: &[String]) -> SkillMatchResult {
    if required.is_empty() {
        return SkillMatchResult {
            score: NEUTRAL_SKILLS_SCORE,
            has_requirements: false,
            matched_skills: vec![],
            missing_skills: vec![],
            reason: "no required skills listed".into(),
        };
    }

    let possessed: Vec<String> = possessed.iter().map(|s| normalize(s)).collect();

    let (matched_skills, missing_skills): (Vec<String>, Vec<String>) = required
        .iter()
        .map(|s| normalize(s))
        .partition(|skill| {
            possessed
                .iter()
                .any(|own| tokens_overlap(own, skill) || are_synonyms(own, skill))
        });

    let score = matched_skills.len() as f64 / required.len() as f64;

    SkillMatchResult {
        score,
        has_requirements: true,
        reason: format!(
            "{} of {} required skills ({:.0}%) (matched: {} / missing: {})",
            matched_skills.len(),
            required.len(),
            score * 100.0,
            join_or_none(&matched_skills),
            join_or_none(&missing_skills),
        ),
        matched_skills,
        missing_skills,
    }
}

fn join_or_none(skills: &[String]) -> String {
    if skills.is_empty() {
        "none".to_string()
    } else {
        skills.join(", ")
    }
}
