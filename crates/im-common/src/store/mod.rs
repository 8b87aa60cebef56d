//! Collaborator seams around the engine: where profiles, postings and resume
//! text come from, and where recommendations go.

pub mod memory;

pub use memory::InMemoryStore;

use crate::api::RecommendationRecord;
use crate::{Application, Posting, Profile, Recommendation};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

pub trait ProfileSource: Send + Sync {
    fn profile(&self, user_id: &str) -> Result<Option<Profile>, StoreError>;
}

pub trait PostingSource: Send + Sync {
    fn postings(&self) -> Result<Vec<Posting>, StoreError>;
}

pub trait RecommendationSink: Send + Sync {
    /// Replaces every stored recommendation for `user_id`. Implementations
    /// must make the clear-and-insert atomic for readers.
    fn replace_for_user(
        &self,
        user_id: &str,
        recommendations: &[Recommendation],
    ) -> Result<usize, StoreError>;

    /// Stored records, highest score first, at most `limit`.
    fn recommendations_for(
        &self,
        user_id: &str,
        limit: usize,
    ) -> Result<Vec<RecommendationRecord>, StoreError>;
}

pub trait ApplicationSink: Send + Sync {
    /// Records a pending application. A second application for the same
    /// (user, posting) pair fails with [`StoreError::Conflict`].
    fn insert_application(
        &self,
        user_id: &str,
        internship_id: &str,
        cover_letter: Option<String>,
    ) -> Result<Application, StoreError>;

    /// The user's applications, most recent first.
    fn applications_for(&self, user_id: &str) -> Result<Vec<Application>, StoreError>;
}

pub trait ResumeTextSource: Send + Sync {
    fn resume_text(&self, user_id: &str) -> Result<Option<String>, StoreError>;
}
