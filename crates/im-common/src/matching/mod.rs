pub mod experience;
pub mod interests;
pub mod location;
pub mod pipeline;
pub mod reasoning;
pub mod scoring;
pub mod skills;
pub mod weights;

pub use pipeline::{RankedPosting, calculate_recommendations, rank_postings};
pub use reasoning::{FALLBACK_REASONING, generate_reasoning};
pub use scoring::{MatchScore, MatchStatus, ScoreBreakdown, ScoringResult, calculate_match_score};
