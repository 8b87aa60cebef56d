use crate::ExperienceLevel;
use crate::similarity::normalize;

pub const NEUTRAL_EXPERIENCE_SCORE: f64 = 0.5;
const EXACT_TIER_SCORE: f64 = 1.0;
const OVERQUALIFIED_SCORE: f64 = 0.8;
const DEFAULT_EXPERIENCE_SCORE: f64 = 0.6;

#[derive(Debug, Clone, PartialEq)]
pub struct ExperienceEvaluation {
    pub score: f64,
    /// The requirement cue that decided the score, if any.
    pub cue: Option<&'static str>,
    pub details: String,
}

fn tier_cues(level: ExperienceLevel) -> &'static [&'static str] {
    match level {
        ExperienceLevel::Beginner => &["entry", "beginner", "no experience"],
        ExperienceLevel::Intermediate => &["intermediate", "some experience"],
        ExperienceLevel::Advanced => &["advanced", "senior", "experienced"],
    }
}

/// Cues for work below the given tier; a stronger profile still fits it.
fn lower_tier_cues(level: ExperienceLevel) -> &'static [&'static str] {
    match level {
        ExperienceLevel::Beginner => &[],
        ExperienceLevel::Intermediate => &["beginner"],
        ExperienceLevel::Advanced => &["intermediate", "beginner"],
    }
}

/// Compares the declared tier against keyword cues in the posting
/// requirements. Never scores below 0.5.
pub fn evaluate_experience(
    level: Option<ExperienceLevel>,
    requirements: &[String],
) -> ExperienceEvaluation {
    let Some(level) = level else {
        return ExperienceEvaluation {
            score: NEUTRAL_EXPERIENCE_SCORE,
            cue: None,
            details: "experience level not stated".into(),
        };
    };

    let text = normalize(&requirements.join(" "));
    let find_cue =
        |cues: &'static [&'static str]| cues.iter().copied().find(|cue| text.contains(cue));

    if let Some(cue) = find_cue(tier_cues(level)) {
        return ExperienceEvaluation {
            score: EXACT_TIER_SCORE,
            cue: Some(cue),
            details: format!("{level} profile matches requirement cue \"{cue}\""),
        };
    }

    if let Some(cue) = find_cue(lower_tier_cues(level)) {
        return ExperienceEvaluation {
            score: OVERQUALIFIED_SCORE,
            cue: Some(cue),
            details: format!("{level} profile exceeds requirement cue \"{cue}\""),
        };
    }

    ExperienceEvaluation {
        score: DEFAULT_EXPERIENCE_SCORE,
        cue: None,
        details: format!("no {level} cue in requirements"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reqs(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn missing_level_is_neutral() {
        let eval = evaluate_experience(None, &reqs(&["Senior engineers only"]));
        assert_eq!(eval.score, 0.5);
    }

    #[test]
    fn exact_tier_scores_full() {
        let eval = evaluate_experience(
            Some(ExperienceLevel::Intermediate),
            &reqs(&["Intermediate programming skills"]),
        );
        assert_eq!(eval.score, 1.0);
        assert_eq!(eval.cue, Some("intermediate"));

        let eval = evaluate_experience(
            Some(ExperienceLevel::Beginner),
            &reqs(&["No experience", "required"]),
        );
        assert_eq!(eval.score, 1.0);
    }

    #[test]
    fn cues_can_span_joined_requirements() {
        let eval = evaluate_experience(
            Some(ExperienceLevel::Intermediate),
            &reqs(&["Some", "experience with SQL"]),
        );
        assert_eq!(eval.score, 1.0);
        assert_eq!(eval.cue, Some("some experience"));
    }

    #[test]
    fn overqualified_profiles_score_high() {
        let advanced = evaluate_experience(
            Some(ExperienceLevel::Advanced),
            &reqs(&["Beginner friendly"]),
        );
        assert_eq!(advanced.score, 0.8);

        let intermediate = evaluate_experience(
            Some(ExperienceLevel::Intermediate),
            &reqs(&["Beginner friendly"]),
        );
        assert_eq!(intermediate.score, 0.8);
    }

    #[test]
    fn underqualified_profiles_fall_back_to_default() {
        let eval = evaluate_experience(
            Some(ExperienceLevel::Beginner),
            &reqs(&["Senior developers"]),
        );
        assert_eq!(eval.score, 0.6);
        assert!(eval.cue.is_none());
    }

    #[test]
    fn empty_requirements_use_default() {
        let eval = evaluate_experience(Some(ExperienceLevel::Advanced), &[]);
        assert_eq!(eval.score, 0.6);
    }
}
