use crate::similarity::{extract_state_code, normalize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationMatch {
    Remote,
    Unknown,
    Exact,
    Contains,
    SameState,
    RemotePreferenceMismatch,
    Mismatch,
}

impl LocationMatch {
    pub fn score(&self) -> f64 {
        match self {
            LocationMatch::Remote | LocationMatch::Exact => 1.0,
            LocationMatch::Contains => 0.8,
            LocationMatch::SameState => 0.6,
            LocationMatch::Unknown => 0.5,
            LocationMatch::RemotePreferenceMismatch | LocationMatch::Mismatch => 0.3,
        }
    }
}

#[derive(Debug, Clone)]
pub struct LocationEvaluation {
    pub kind: LocationMatch,
    pub score: f64, // 0.0..=1.0
    pub details: String,
}

impl LocationEvaluation {
    fn new(kind: LocationMatch, details: impl Into<String>) -> Self {
        Self {
            kind,
            score: kind.score(),
            details: details.into(),
        }
    }
}

/// Single entry point for location scoring; checks run in priority order and
/// the first hit wins.
pub fn evaluate_location(
    preferred: Option<&str>,
    posting_location: Option<&str>,
    remote: bool,
) -> LocationEvaluation {
    // 1. Remote postings fit every preference.
    if remote {
        return LocationEvaluation::new(
            LocationMatch::Remote,
            "remote posting - no location constraint",
        );
    }

    // 2. Nothing to compare.
    let (Some(preferred), Some(posting_location)) = (
        preferred.filter(|s| !s.is_empty()),
        posting_location.filter(|s| !s.is_empty()),
    ) else {
        return LocationEvaluation::new(LocationMatch::Unknown, "location unknown - neutral score");
    };

    let user = normalize(preferred);
    let posting = normalize(posting_location);

    if user == posting {
        return LocationEvaluation::new(LocationMatch::Exact, format!("same location: {posting}"));
    }

    if user.contains(&posting) || posting.contains(&user) {
        return LocationEvaluation::new(
            LocationMatch::Contains,
            format!("overlapping locations: {user} / {posting}"),
        );
    }

    // 3. Rough same-state check.
    if let (Some(user_state), Some(posting_state)) =
        (extract_state_code(&user), extract_state_code(&posting))
    {
        if user_state == posting_state {
            return LocationEvaluation::new(
                LocationMatch::SameState,
                format!("same state: {user_state}"),
            );
        }
    }

    // 4. The user wants remote work but this posting is on site.
    if user.contains("remote") {
        return LocationEvaluation::new(
            LocationMatch::RemotePreferenceMismatch,
            format!("remote preferred, posting is on site in {posting}"),
        );
    }

    LocationEvaluation::new(
        LocationMatch::Mismatch,
        format!("location mismatch: {user} vs {posting}"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remote_postings_always_score_full() {
        let eval = evaluate_location(Some("Austin, TX"), Some("New York, NY"), true);
        assert_eq!(eval.kind, LocationMatch::Remote);
        assert_eq!(eval.score, 1.0);

        let eval = evaluate_location(None, None, true);
        assert_eq!(eval.score, 1.0);
    }

    #[test]
    fn missing_locations_are_neutral() {
        assert_eq!(evaluate_location(None, Some("Austin, TX"), false).score, 0.5);
        assert_eq!(evaluate_location(Some("Austin, TX"), None, false).score, 0.5);
        assert_eq!(evaluate_location(Some(""), Some("Austin, TX"), false).score, 0.5);
    }

    #[test]
    fn exact_match_ignores_case() {
        let eval = evaluate_location(Some("San Francisco, CA"), Some("san francisco, ca"), false);
        assert_eq!(eval.kind, LocationMatch::Exact);
        assert_eq!(eval.score, 1.0);
    }

    #[test]
    fn containment_scores_partial() {
        let eval = evaluate_location(Some("San Francisco"), Some("San Francisco, CA"), false);
        assert_eq!(eval.kind, LocationMatch::Contains);
        assert_eq!(eval.score, 0.8);
    }

    #[test]
    fn same_state_scores_lower() {
        let eval = evaluate_location(Some("Los Angeles, CA"), Some("San Diego, CA"), false);
        assert_eq!(eval.kind, LocationMatch::SameState);
        assert_eq!(eval.score, 0.6);
    }

    #[test]
    fn remote_preference_against_on_site_posting() {
        let eval = evaluate_location(Some("Remote"), Some("Austin, TX"), false);
        assert_eq!(eval.kind, LocationMatch::RemotePreferenceMismatch);
        assert_eq!(eval.score, 0.3);
    }

    #[test]
    fn different_states_mismatch() {
        let eval = evaluate_location(Some("San Francisco, CA"), Some("Austin, TX"), false);
        assert_eq!(eval.kind, LocationMatch::Mismatch);
        assert_eq!(eval.score, 0.3);
    }
}
