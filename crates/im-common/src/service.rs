use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::api::{ExplainedRecommendation, RecommendationRecord};
use crate::config::ServiceConfig;
use crate::matching::{calculate_recommendations, rank_postings};
use crate::resume::{ParsedResume, parse_resume_text};
use crate::store::{
    ApplicationSink, PostingSource, ProfileSource, RecommendationSink, ResumeTextSource, StoreError,
};
use crate::{Application, Posting, Profile};

#[derive(Debug, thiserror::Error)]
pub enum RecommendationError {
    #[error("user id must not be empty")]
    InvalidUserId,
    #[error("internship id is required")]
    MissingInternshipId,
    #[error("user profile not found for {0}; complete the profile first")]
    ProfileNotFound(String),
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RefreshSummary {
    pub user_id: String,
    /// Postings that went through the scorer.
    pub scored: usize,
    /// Recommendations written to the sink.
    pub stored: usize,
}

/// Fetch → score → replace orchestration around the pure engine, plus the
/// application bookkeeping that hangs off recommended postings.
pub struct RecommendationService {
    profiles: Arc<dyn ProfileSource>,
    postings: Arc<dyn PostingSource>,
    sink: Arc<dyn RecommendationSink>,
    resumes: Arc<dyn ResumeTextSource>,
    applications: Arc<dyn ApplicationSink>,
    config: ServiceConfig,
}

impl RecommendationService {
    pub fn new(
        profiles: Arc<dyn ProfileSource>,
        postings: Arc<dyn PostingSource>,
        sink: Arc<dyn RecommendationSink>,
        resumes: Arc<dyn ResumeTextSource>,
        applications: Arc<dyn ApplicationSink>,
        config: ServiceConfig,
    ) -> Self {
        Self {
            profiles,
            postings,
            sink,
            resumes,
            applications,
            config,
        }
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Recomputes and replaces the stored recommendations for one user.
    #[instrument(skip(self))]
    pub fn refresh(&self, user_id: &str) -> Result<RefreshSummary, RecommendationError> {
        let user_id = validate_user_id(user_id)?;
        let (profile, postings) = self.scoring_inputs(user_id)?;

        let recommendations = calculate_recommendations(&profile, &postings);
        let stored = self.sink.replace_for_user(user_id, &recommendations)?;

        info!(
            user_id,
            scored = postings.len(),
            stored,
            "recommendations refreshed"
        );

        Ok(RefreshSummary {
            user_id: user_id.to_string(),
            scored: postings.len(),
            stored,
        })
    }

    /// Ranks postings for a user with factor breakdowns, without touching the
    /// stored recommendations. Capped by `recommendation_limit`.
    #[instrument(skip(self))]
    pub fn explain(
        &self,
        user_id: &str,
    ) -> Result<Vec<ExplainedRecommendation>, RecommendationError> {
        let user_id = validate_user_id(user_id)?;
        let (profile, postings) = self.scoring_inputs(user_id)?;

        Ok(rank_postings(&profile, &postings)
            .iter()
            .take(self.config.recommendation_limit)
            .map(ExplainedRecommendation::from)
            .collect())
    }

    /// Stored recommendations for a user, capped by `recommendation_limit`.
    pub fn recommendations(
        &self,
        user_id: &str,
    ) -> Result<Vec<RecommendationRecord>, RecommendationError> {
        let user_id = validate_user_id(user_id)?;
        Ok(self
            .sink
            .recommendations_for(user_id, self.config.recommendation_limit)?)
    }

    /// Skills and cues found in the user's resume text; empty when no resume
    /// has been provided.
    pub fn resume_skills(&self, user_id: &str) -> Result<ParsedResume, RecommendationError> {
        let user_id = validate_user_id(user_id)?;
        match self.resumes.resume_text(user_id)? {
            Some(text) => Ok(parse_resume_text(&text)),
            None => {
                debug!(user_id, "no resume text on file");
                Ok(ParsedResume::default())
            }
        }
    }

    /// Records an application to an existing posting. A blank cover letter is
    /// stored as `None`; applying twice surfaces the store's conflict.
    #[instrument(skip(self, cover_letter))]
    pub fn apply(
        &self,
        user_id: &str,
        internship_id: &str,
        cover_letter: Option<&str>,
    ) -> Result<Application, RecommendationError> {
        let user_id = validate_user_id(user_id)?;
        let internship_id = internship_id.trim();
        if internship_id.is_empty() {
            return Err(RecommendationError::MissingInternshipId);
        }

        let known = self
            .postings
            .postings()?
            .iter()
            .any(|posting| posting.id == internship_id);
        if !known {
            return Err(StoreError::NotFound(format!("internship {internship_id}")).into());
        }

        let cover_letter = cover_letter
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .map(str::to_string);
        let application = self
            .applications
            .insert_application(user_id, internship_id, cover_letter)?;

        info!(user_id, internship_id, application_id = %application.id, "application recorded");
        Ok(application)
    }

    /// The user's applications, most recent first.
    pub fn applications(&self, user_id: &str) -> Result<Vec<Application>, RecommendationError> {
        let user_id = validate_user_id(user_id)?;
        Ok(self.applications.applications_for(user_id)?)
    }

    /// Profile (resume-merged when configured) and the postings to score.
    fn scoring_inputs(
        &self,
        user_id: &str,
    ) -> Result<(Profile, Vec<Posting>), RecommendationError> {
        let mut profile = self
            .profiles
            .profile(user_id)?
            .ok_or_else(|| RecommendationError::ProfileNotFound(user_id.to_string()))?;

        if self.config.merge_resume_skills {
            let parsed = self.resume_skills(user_id)?;
            let added = parsed.merge_into(&mut profile);
            debug!(added, "merged resume skills into profile");
        }

        let postings: Vec<_> = self
            .postings
            .postings()?
            .into_iter()
            .filter(|posting| self.config.include_inactive || posting.is_active)
            .collect();

        Ok((profile, postings))
    }
}

fn validate_user_id(user_id: &str) -> Result<&str, RecommendationError> {
    let trimmed = user_id.trim();
    if trimmed.is_empty() {
        return Err(RecommendationError::InvalidUserId);
    }
    Ok(trimmed)
}
