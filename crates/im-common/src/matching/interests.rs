use crate::similarity::{normalize, related_interest_terms};

pub const NEUTRAL_INTERESTS_SCORE: f64 = 0.5;

#[derive(Debug, Clone, PartialEq)]
pub struct InterestMatchResult {
    pub score: f64,
    pub matched_interests: Vec<String>,
    pub details: String,
}

/// Fraction of the profile's interests that show up in the posting text,
/// either literally or through a related term.
pub fn evaluate_interests(
    interests: &[String],
    title: &str,
    description: &str,
) -> InterestMatchResult {
    if interests.is_empty() {
        return InterestMatchResult {
            score: NEUTRAL_INTERESTS_SCORE,
            matched_interests: vec![],
            details: "no interests listed".into(),
        };
    }

    let content = normalize(&format!("{description} {title}"));

    let matched_interests: Vec<String> = interests
        .iter()
        .map(|interest| normalize(interest))
        .filter(|interest| {
            content.contains(interest.as_str())
                || related_interest_terms(interest)
                    .is_some_and(|terms| terms.iter().any(|term| content.contains(term)))
        })
        .collect();

    let score = matched_interests.len() as f64 / interests.len() as f64;

    InterestMatchResult {
        score,
        details: format!(
            "{} of {} interests reflected in posting",
            matched_interests.len(),
            interests.len()
        ),
        matched_interests,
    }
}
