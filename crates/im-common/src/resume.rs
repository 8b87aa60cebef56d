use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::Profile;
use crate::similarity::normalize;

static RE_WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Skills recognised in resume text, in reporting order.
const RESUME_SKILLS: &[&str] = &[
    "JavaScript",
    "Python",
    "Java",
    "C++",
    "React",
    "Node.js",
    "TypeScript",
    "SQL",
    "HTML",
    "CSS",
    "Git",
    "Docker",
    "AWS",
    "Machine Learning",
    "Data Analysis",
    "UI/UX",
    "Mobile Development",
    "API Development",
];

const EXPERIENCE_CUES: &[&str] = &["intern", "developer", "engineer", "analyst", "designer"];

const EDUCATION_CUES: &[&str] = &["university", "college", "bachelor", "master", "degree"];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedResume {
    pub skills: Vec<String>,
    pub experience: Vec<String>,
    pub education: Vec<String>,
}

impl ParsedResume {
    pub fn is_empty(&self) -> bool {
        self.skills.is_empty() && self.experience.is_empty() && self.education.is_empty()
    }

    /// Appends parsed skills the profile does not already list
    /// (case-insensitive). Returns how many were added.
    pub fn merge_into(&self, profile: &mut Profile) -> usize {
        let mut added = 0;
        for skill in &self.skills {
            let known = profile
                .skills
                .iter()
                .any(|existing| normalize(existing) == normalize(skill));
            if !known {
                profile.skills.push(skill.clone());
                added += 1;
            }
        }
        added
    }
}

/// Keyword scan over plain resume text. Binary formats must be converted to
/// text by the caller.
pub fn parse_resume_text(text: &str) -> ParsedResume {
    let content = normalize(&RE_WHITESPACE.replace_all(text, " "));
    if content.trim().is_empty() {
        return ParsedResume::default();
    }

    let found = |keywords: &[&str]| -> Vec<String> {
        keywords
            .iter()
            .filter(|keyword| content.contains(normalize(keyword).as_str()))
            .map(|keyword| keyword.to_string())
            .collect()
    };

    ParsedResume {
        skills: found(RESUME_SKILLS),
        experience: found(EXPERIENCE_CUES),
        education: found(EDUCATION_CUES),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESUME: &str = r#"
Jane Doe
B.S. Computer Science, State University (bachelor degree expected 2026)

Software Engineer Intern, Acme Corp
- Built React dashboards backed by Node.js and SQL
- Prototyped Machine
  Learning models in Python
"#;

    #[test]
    fn extracts_skills_in_table_order() {
        let parsed = parse_resume_text(RESUME);
        assert_eq!(
            parsed.skills,
            vec!["Python", "React", "Node.js", "SQL", "Machine Learning"]
        );
    }

    #[test]
    fn extracts_experience_and_education_cues() {
        let parsed = parse_resume_text(RESUME);
        assert_eq!(parsed.experience, vec!["intern", "engineer"]);
        assert_eq!(parsed.education, vec!["university", "bachelor", "degree"]);
    }

    #[test]
    fn substring_rule_reports_java_inside_javascript() {
        let parsed = parse_resume_text("Five years of JavaScript");
        assert_eq!(parsed.skills, vec!["JavaScript", "Java"]);
    }

    #[test]
    fn blank_text_parses_to_nothing() {
        assert!(parse_resume_text("   \n\t ").is_empty());
    }

    #[test]
    fn merge_skips_known_skills() {
        let mut profile = Profile {
            skills: vec!["python".into(), "Go".into()],
            ..Profile::default()
        };
        let parsed = ParsedResume {
            skills: vec!["Python".into(), "React".into()],
            ..ParsedResume::default()
        };

        assert_eq!(parsed.merge_into(&mut profile), 1);
        assert_eq!(profile.skills, vec!["python", "Go", "React"]);
    }
}
