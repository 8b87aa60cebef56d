pub mod recommendation_record;

pub use recommendation_record::{ExplainedRecommendation, RecommendationRecord};
