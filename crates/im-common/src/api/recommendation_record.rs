use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::Recommendation;
use crate::matching::{RankedPosting, ScoreBreakdown};

/// Persisted / client-facing form of a recommendation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationRecord {
    pub user_id: String,
    pub internship_id: String,
    /// 0..=100
    pub match_score: u8,
    /// Reasons joined with ", ".
    pub reasoning: String,
    pub created_at: DateTime<Utc>,
    /// Title of the recommended posting, filled in by stores that can join it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub internship_title: Option<String>,
}

impl RecommendationRecord {
    pub fn from_recommendation(recommendation: &Recommendation, created_at: DateTime<Utc>) -> Self {
        Self {
            user_id: recommendation.user_id.clone(),
            internship_id: recommendation.internship_id.clone(),
            match_score: recommendation.match_score,
            reasoning: recommendation.reasoning_text(),
            created_at,
            internship_title: None,
        }
    }
}

/// Recommendation plus the factor scores behind it, for explain output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExplainedRecommendation {
    pub internship_id: String,
    pub title: String,
    pub match_score: u8,
    pub reasoning: Vec<String>,
    pub breakdown: ScoreBreakdown,
    /// Per-factor details keyed by factor name.
    pub details: Vec<(String, String)>,
}

impl From<&RankedPosting<'_>> for ExplainedRecommendation {
    fn from(ranked: &RankedPosting<'_>) -> Self {
        let score = &ranked.score;
        Self {
            internship_id: ranked.recommendation.internship_id.clone(),
            title: ranked.posting.title.clone(),
            match_score: ranked.recommendation.match_score,
            reasoning: ranked.recommendation.reasoning.clone(),
            breakdown: score.breakdown(),
            details: vec![
                ("skills".to_string(), score.skills.details.clone()),
                ("experience".to_string(), score.experience.details.clone()),
                ("location".to_string(), score.location.details.clone()),
                ("interests".to_string(), score.interests.details.clone()),
            ],
        }
    }
}
