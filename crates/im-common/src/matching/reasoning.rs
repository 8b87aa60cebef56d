use super::scoring::MatchScore;
use crate::{Posting, Profile};

/// Substituted by the ranking step when no reasoning rule fires.
pub const FALLBACK_REASONING: &str = "Good overall match";

const COMPETITIVE_STIPEND: f64 = 4000.0;

/// Human-readable reasons for a match, in fixed category order:
/// skills, experience, location, interests, compensation.
///
/// The profile is accepted for parity with the scorer even though every rule
/// reads only the scores and the posting.
pub fn generate_reasoning(
    _profile: &Profile,
    posting: &Posting,
    scores: &MatchScore,
) -> Vec<String> {
    let mut reasoning = Vec::new();

    let skills = scores.skills.score;
    if skills > 0.7 {
        reasoning.push(format!("Excellent skills match ({}%)", percent(skills)));
    } else if skills > 0.5 {
        reasoning.push(format!("Good skills match ({}%)", percent(skills)));
    }

    if scores.experience.score > 0.8 {
        reasoning.push("Perfect experience level fit".to_string());
    } else if scores.experience.score > 0.6 {
        reasoning.push("Experience level aligns well".to_string());
    }

    if scores.location.score > 0.8 {
        reasoning.push("Great location match".to_string());
    } else if posting.remote {
        reasoning.push("Remote work available".to_string());
    }

    if scores.interests.score > 0.6 {
        reasoning.push("Aligns with your interests".to_string());
    }

    if posting
        .stipend_amount
        .is_some_and(|amount| amount >= COMPETITIVE_STIPEND)
    {
        reasoning.push("Competitive compensation".to_string());
    }

    reasoning
}

fn percent(score: f64) -> u32 {
    (score * 100.0).round() as u32
}
