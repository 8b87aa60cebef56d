//! Property-based checks for the scoring and ranking engine.

use im_common::matching::weights::INCLUSION_THRESHOLD;
use im_common::matching::{calculate_match_score, calculate_recommendations, rank_postings};
use im_common::{ExperienceLevel, Posting, Profile};
use proptest::prelude::*;

const SKILLS: &[&str] = &[
    "JavaScript", "js", "React", "Python", "py", "SQL", "Machine Learning", "AI", "CSS", "Go",
    "TypeScript", "Docker", "",
];

const INTERESTS: &[&str] = &[
    "Web Development", "Data Science", "FinTech", "Cybersecurity", "Robotics",
];

const LOCATIONS: &[&str] = &[
    "San Francisco, CA", "San Francisco", "Los Angeles, CA", "New York, NY", "Remote",
    "Austin, TX", "",
];

const TEXT: &[&str] = &[
    "frontend", "backend", "data", "analytics", "security", "payments", "react", "intern",
    "build", "dashboards", "some experience", "senior", "entry", "beginner",
];

fn pick(pool: &'static [&'static str]) -> impl Strategy<Value = String> {
    prop::sample::select(pool).prop_map(str::to_string)
}

fn sentence() -> impl Strategy<Value = String> {
    prop::collection::vec(pick(TEXT), 0..6).prop_map(|words| words.join(" "))
}

fn level() -> impl Strategy<Value = Option<ExperienceLevel>> {
    prop_oneof![
        Just(None),
        Just(Some(ExperienceLevel::Beginner)),
        Just(Some(ExperienceLevel::Intermediate)),
        Just(Some(ExperienceLevel::Advanced)),
    ]
}

fn profile() -> impl Strategy<Value = Profile> {
    (
        prop::collection::vec(pick(SKILLS), 0..5),
        prop::collection::vec(pick(INTERESTS), 0..3),
        level(),
        prop::option::of(pick(LOCATIONS)),
    )
        .prop_map(|(skills, interests, experience_level, preferred_location)| Profile {
            user_id: "prop-user".into(),
            skills,
            interests,
            experience_level,
            preferred_location,
        })
}

fn posting() -> impl Strategy<Value = Posting> {
    (
        sentence(),
        sentence(),
        prop::collection::vec(sentence(), 0..3),
        prop::collection::vec(pick(SKILLS), 0..4),
        prop::option::of(pick(LOCATIONS)),
        any::<bool>(),
        prop::option::of(0.0_f64..10_000.0),
    )
        .prop_map(|(title, description, requirements, skills_required, location, remote, stipend)| {
            Posting {
                title,
                description,
                requirements,
                skills_required,
                location,
                remote,
                stipend_amount: stipend,
                ..Posting::default()
            }
        })
}

/// Postings with their list index as id, so ranking order can be traced back.
fn postings() -> impl Strategy<Value = Vec<Posting>> {
    prop::collection::vec(posting(), 0..12).prop_map(|mut postings| {
        for (idx, posting) in postings.iter_mut().enumerate() {
            posting.id = idx.to_string();
        }
        postings
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_scores_stay_in_unit_range(profile in profile(), posting in posting()) {
        let score = calculate_match_score(&profile, &posting);
        let breakdown = score.breakdown();

        let parts = [
            breakdown.total,
            breakdown.skills,
            breakdown.experience,
            breakdown.location,
            breakdown.interests,
        ];
        for part in parts {
            prop_assert!((0.0..=1.0).contains(&part), "component out of range: {}", part);
        }
        prop_assert!(score.percentage() <= 100);
        prop_assert_eq!(score.percentage(), (score.total * 100.0).round() as u8);
    }

    #[test]
    fn prop_experience_never_below_neutral(profile in profile(), posting in posting()) {
        let score = calculate_match_score(&profile, &posting);
        prop_assert!(score.experience.score >= 0.5);
    }

    #[test]
    fn prop_ranking_is_sorted_and_stable(profile in profile(), postings in postings()) {
        let ranked = rank_postings(&profile, &postings);

        for pair in ranked.windows(2) {
            let (a, b) = (&pair[0].recommendation, &pair[1].recommendation);
            prop_assert!(a.match_score >= b.match_score);
            if a.match_score == b.match_score {
                let a_idx: usize = a.internship_id.parse().unwrap();
                let b_idx: usize = b.internship_id.parse().unwrap();
                prop_assert!(a_idx < b_idx, "tie broke input order: {} before {}", a_idx, b_idx);
            }
        }
    }

    #[test]
    fn prop_only_postings_above_threshold_are_kept(profile in profile(), postings in postings()) {
        let ranked = rank_postings(&profile, &postings);

        let expected = postings
            .iter()
            .filter(|posting| calculate_match_score(&profile, posting).total > INCLUSION_THRESHOLD)
            .count();
        prop_assert_eq!(ranked.len(), expected);

        for entry in &ranked {
            prop_assert!(entry.score.total > INCLUSION_THRESHOLD);
            prop_assert!(!entry.recommendation.reasoning.is_empty());
            prop_assert_eq!(&entry.recommendation.user_id, "prop-user");
        }
    }

    #[test]
    fn prop_recommendations_are_deterministic(profile in profile(), postings in postings()) {
        let first = calculate_recommendations(&profile, &postings);
        let second = calculate_recommendations(&profile, &postings);
        prop_assert_eq!(first, second);
    }
}
