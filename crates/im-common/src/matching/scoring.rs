use serde::{Deserialize, Serialize};

use super::{
    experience::evaluate_experience,
    interests::evaluate_interests,
    location::{LocationMatch, evaluate_location},
    skills::check_required_skills,
    weights::MATCH_WEIGHTS,
};
use crate::{Posting, Profile};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchStatus {
    PerfectMatch,
    Match,
    PartialMatch,
    Miss,
    Unknown,
}

impl MatchStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchStatus::PerfectMatch => "PERFECT_MATCH",
            MatchStatus::Match => "MATCH",
            MatchStatus::PartialMatch => "PARTIAL_MATCH",
            MatchStatus::Miss => "MISS",
            MatchStatus::Unknown => "UNKNOWN",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringResult {
    pub score: f64,
    pub status: MatchStatus,
    pub details: String,
}

impl ScoringResult {
    fn new(score: f64, unknown: bool, details: String) -> Self {
        Self {
            score,
            status: status_from_score(score, unknown),
            details,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchScore {
    pub total: f64,
    pub skills: ScoringResult,
    pub experience: ScoringResult,
    pub location: ScoringResult,
    pub interests: ScoringResult,
}

impl MatchScore {
    pub fn breakdown(&self) -> ScoreBreakdown {
        ScoreBreakdown {
            total: self.total,
            skills: self.skills.score,
            experience: self.experience.score,
            location: self.location.score,
            interests: self.interests.score,
        }
    }

    /// Rounded percentage of the total, as shown to users.
    pub fn percentage(&self) -> u8 {
        (self.total.clamp(0.0, 1.0) * 100.0).round() as u8
    }
}

/// Plain numeric view of a [`MatchScore`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub total: f64,
    pub skills: f64,
    pub experience: f64,
    pub location: f64,
    pub interests: f64,
}

/// Weighted multi-factor score for one (profile, posting) pair.
pub fn calculate_match_score(profile: &Profile, posting: &Posting) -> MatchScore {
    let skills = score_skills(profile, posting);
    let experience = score_experience(profile, posting);
    let location = score_location(profile, posting);
    let interests = score_interests(profile, posting);

    let total = MATCH_WEIGHTS.combine(
        skills.score,
        experience.score,
        location.score,
        interests.score,
    );

    MatchScore {
        total,
        skills,
        experience,
        location,
        interests,
    }
}

fn score_skills(profile: &Profile, posting: &Posting) -> ScoringResult {
    let result = check_required_skills(&posting.skills_required, &profile.skills);
    ScoringResult::new(result.score, !result.has_requirements, result.reason)
}

fn score_experience(profile: &Profile, posting: &Posting) -> ScoringResult {
    let evaluation = evaluate_experience(profile.experience_level, &posting.requirements);
    ScoringResult::new(
        evaluation.score,
        profile.experience_level.is_none(),
        evaluation.details,
    )
}

fn score_location(profile: &Profile, posting: &Posting) -> ScoringResult {
    let evaluation = evaluate_location(
        profile.preferred_location.as_deref(),
        posting.location.as_deref(),
        posting.remote,
    );
    ScoringResult::new(
        evaluation.score,
        evaluation.kind == LocationMatch::Unknown,
        evaluation.details,
    )
}

fn score_interests(profile: &Profile, posting: &Posting) -> ScoringResult {
    let result = evaluate_interests(&profile.interests, &posting.title, &posting.description);
    ScoringResult::new(result.score, profile.interests.is_empty(), result.details)
}

fn status_from_score(score: f64, unknown: bool) -> MatchStatus {
    if unknown {
        MatchStatus::Unknown
    } else if score >= 0.9 {
        MatchStatus::PerfectMatch
    } else if score >= 0.7 {
        MatchStatus::Match
    } else if score >= 0.4 {
        MatchStatus::PartialMatch
    } else {
        MatchStatus::Miss
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ExperienceLevel;

    fn profile() -> Profile {
        Profile {
            user_id: "user-1".into(),
            skills: vec!["JavaScript".into(), "React".into(), "Node.js".into()],
            interests: vec!["Web Development".into(), "Fintech".into()],
            experience_level: Some(ExperienceLevel::Intermediate),
            preferred_location: Some("San Francisco, CA".into()),
        }
    }

    fn frontend_posting() -> Posting {
        Posting {
            id: "1".into(),
            title: "Frontend Developer Intern".into(),
            description: "Work on web development projects using React and JavaScript".into(),
            requirements: vec!["Intermediate programming skills".into()],
            skills_required: vec!["JavaScript".into(), "React".into(), "CSS".into()],
            location: Some("San Francisco, CA".into()),
            remote: false,
            stipend_amount: Some(4500.0),
            ..Posting::default()
        }
    }

    #[test]
    fn combines_factors_with_fixed_weights() {
        let score = calculate_match_score(&profile(), &frontend_posting());

        assert!((score.skills.score - 2.0 / 3.0).abs() < 1e-9);
        assert_eq!(score.experience.score, 1.0);
        assert_eq!(score.location.score, 1.0);
        assert_eq!(score.interests.score, 0.5);

        let expected = 0.4 * (2.0 / 3.0) + 0.2 + 0.2 + 0.1;
        assert!((score.total - expected).abs() < 1e-9);
        assert_eq!(score.percentage(), 77);
    }

    #[test]
    fn neutral_defaults_are_flagged_unknown() {
        let mut posting = frontend_posting();
        posting.skills_required.clear();
        posting.remote = true;
        let mut profile = profile();
        profile.experience_level = None;
        profile.interests.clear();

        let score = calculate_match_score(&profile, &posting);
        assert_eq!(score.skills.score, 0.5);
        assert_eq!(score.skills.status, MatchStatus::Unknown);
        assert_eq!(score.experience.score, 0.5);
        assert_eq!(score.location.score, 1.0);
        assert_eq!(score.location.status, MatchStatus::PerfectMatch);
        assert_eq!(score.interests.status, MatchStatus::Unknown);
    }

    #[test]
    fn breakdown_mirrors_sub_scores() {
        let score = calculate_match_score(&profile(), &frontend_posting());
        let breakdown = score.breakdown();

        assert_eq!(breakdown.total, score.total);
        assert_eq!(breakdown.skills, score.skills.score);
        assert_eq!(breakdown.interests, score.interests.score);
    }

    #[test]
    fn status_thresholds() {
        assert_eq!(status_from_score(0.95, false), MatchStatus::PerfectMatch);
        assert_eq!(status_from_score(0.8, false), MatchStatus::Match);
        assert_eq!(status_from_score(0.6, false), MatchStatus::PartialMatch);
        assert_eq!(status_from_score(0.3, false), MatchStatus::Miss);
        assert_eq!(status_from_score(1.0, true), MatchStatus::Unknown);
    }
}
