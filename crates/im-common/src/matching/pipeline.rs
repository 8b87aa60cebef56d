use serde::Serialize;
use tracing::debug;

use super::{
    reasoning::{FALLBACK_REASONING, generate_reasoning},
    scoring::{MatchScore, calculate_match_score},
    weights::INCLUSION_THRESHOLD,
};
use crate::{Posting, Profile, Recommendation};

#[derive(Debug, Clone, Serialize)]
pub struct RankedPosting<'a> {
    pub posting: &'a Posting,
    pub score: MatchScore,
    pub recommendation: Recommendation,
}

/// Scores every posting, keeps those above the inclusion threshold and sorts
/// them by rounded score, highest first. Ties keep input order.
pub fn rank_postings<'a>(profile: &Profile, postings: &'a [Posting]) -> Vec<RankedPosting<'a>> {
    let mut ranked: Vec<_> = postings
        .iter()
        .filter_map(|posting| build_ranked_posting(profile, posting))
        .collect();

    // `sort_by` is stable, which preserves input order for equal scores.
    ranked.sort_by(|a, b| {
        b.recommendation
            .match_score
            .cmp(&a.recommendation.match_score)
    });

    debug!(
        user_id = %profile.user_id,
        scored = postings.len(),
        recommended = ranked.len(),
        "ranked postings"
    );

    ranked
}

/// Ranked, explained recommendations for one profile.
pub fn calculate_recommendations(profile: &Profile, postings: &[Posting]) -> Vec<Recommendation> {
    rank_postings(profile, postings)
        .into_iter()
        .map(|ranked| ranked.recommendation)
        .collect()
}

fn build_ranked_posting<'a>(profile: &Profile, posting: &'a Posting) -> Option<RankedPosting<'a>> {
    let score = calculate_match_score(profile, posting);
    if score.total <= INCLUSION_THRESHOLD {
        return None;
    }

    let mut reasoning = generate_reasoning(profile, posting, &score);
    if reasoning.is_empty() {
        reasoning.push(FALLBACK_REASONING.to_string());
    }

    let recommendation = Recommendation {
        user_id: profile.user_id.clone(),
        internship_id: posting.id.clone(),
        match_score: score.percentage(),
        reasoning,
    };

    Some(RankedPosting {
        posting,
        score,
        recommendation,
    })
}
