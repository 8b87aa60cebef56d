pub const DEFAULT_RECOMMENDATION_LIMIT: usize = 10;
const MAX_RECOMMENDATION_LIMIT: usize = 100;

/// Runtime knobs for the recommendation service. Scoring weights and tables
/// are compiled in and intentionally absent here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Stored recommendations returned per user.
    pub recommendation_limit: usize,
    /// Merge resume-derived skills into the profile before scoring.
    pub merge_resume_skills: bool,
    /// Score postings flagged inactive as well.
    pub include_inactive: bool,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            recommendation_limit: DEFAULT_RECOMMENDATION_LIMIT,
            merge_resume_skills: false,
            include_inactive: false,
        }
    }
}

impl ServiceConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup; unknown or malformed
    /// values fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let recommendation_limit = lookup("IM_RECOMMENDATION_LIMIT")
            .and_then(|raw| raw.trim().parse::<usize>().ok())
            .map(clamp_limit)
            .unwrap_or(defaults.recommendation_limit);

        Self {
            recommendation_limit,
            merge_resume_skills: parse_bool(
                lookup("IM_MERGE_RESUME_SKILLS"),
                defaults.merge_resume_skills,
            ),
            include_inactive: parse_bool(lookup("IM_INCLUDE_INACTIVE"), defaults.include_inactive),
        }
    }
}

pub fn clamp_limit(limit: usize) -> usize {
    limit.clamp(1, MAX_RECOMMENDATION_LIMIT)
}

fn parse_bool(raw: Option<String>, default: bool) -> bool {
    match raw {
        Some(val) => matches!(
            val.trim().to_ascii_lowercase().as_str(),
            "1" | "true" | "yes" | "on"
        ),
        None => default,
    }
}
