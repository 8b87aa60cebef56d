use std::collections::HashMap;

use chrono::Utc;
use parking_lot::RwLock;

use super::{
    ApplicationSink, PostingSource, ProfileSource, RecommendationSink, ResumeTextSource,
    StoreError,
};
use crate::api::RecommendationRecord;
use crate::{Application, ApplicationStatus, Posting, Profile, Recommendation};

/// Process-local implementation of every collaborator trait.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    profiles: RwLock<HashMap<String, Profile>>,
    postings: RwLock<Vec<Posting>>,
    recommendations: RwLock<HashMap<String, Vec<RecommendationRecord>>>,
    resumes: RwLock<HashMap<String, String>>,
    /// Insertion order; ids are derived from the position.
    applications: RwLock<Vec<Application>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces the profile keyed by its `user_id`.
    pub fn upsert_profile(&self, profile: Profile) {
        self.profiles
            .write()
            .insert(profile.user_id.clone(), profile);
    }

    /// Adds a posting; ids must be unique.
    pub fn insert_posting(&self, posting: Posting) -> Result<(), StoreError> {
        let mut postings = self.postings.write();
        if postings.iter().any(|p| p.id == posting.id) {
            return Err(StoreError::Conflict(format!(
                "posting {} already exists",
                posting.id
            )));
        }
        postings.push(posting);
        Ok(())
    }

    pub fn set_resume_text(&self, user_id: impl Into<String>, text: impl Into<String>) {
        self.resumes.write().insert(user_id.into(), text.into());
    }
}

impl ProfileSource for InMemoryStore {
    fn profile(&self, user_id: &str) -> Result<Option<Profile>, StoreError> {
        Ok(self.profiles.read().get(user_id).cloned())
    }
}

impl PostingSource for InMemoryStore {
    fn postings(&self) -> Result<Vec<Posting>, StoreError> {
        Ok(self.postings.read().clone())
    }
}

impl RecommendationSink for InMemoryStore {
    fn replace_for_user(
        &self,
        user_id: &str,
        recommendations: &[Recommendation],
    ) -> Result<usize, StoreError> {
        let created_at = Utc::now();
        let records: Vec<_> = recommendations
            .iter()
            .map(|rec| RecommendationRecord::from_recommendation(rec, created_at))
            .collect();
        let stored = records.len();

        // Single write lock: readers see either the old set or the new one.
        let mut all = self.recommendations.write();
        if records.is_empty() {
            all.remove(user_id);
        } else {
            all.insert(user_id.to_string(), records);
        }

        Ok(stored)
    }

    fn recommendations_for(
        &self,
        user_id: &str,
        limit: usize,
    ) -> Result<Vec<RecommendationRecord>, StoreError> {
        let mut records = self
            .recommendations
            .read()
            .get(user_id)
            .cloned()
            .unwrap_or_default();
        records.sort_by(|a, b| b.match_score.cmp(&a.match_score));
        records.truncate(limit);

        // Join posting titles; records for removed postings keep `None`.
        let postings = self.postings.read();
        for record in &mut records {
            record.internship_title = postings
                .iter()
                .find(|p| p.id == record.internship_id)
                .map(|p| p.title.clone());
        }
        Ok(records)
    }
}

impl ApplicationSink for InMemoryStore {
    fn insert_application(
        &self,
        user_id: &str,
        internship_id: &str,
        cover_letter: Option<String>,
    ) -> Result<Application, StoreError> {
        let mut applications = self.applications.write();
        let duplicate = applications
            .iter()
            .any(|a| a.user_id == user_id && a.internship_id == internship_id);
        if duplicate {
            return Err(StoreError::Conflict(format!(
                "you have already applied to internship {internship_id}"
            )));
        }

        let now = Utc::now();
        let application = Application {
            id: format!("app-{}", applications.len() + 1),
            user_id: user_id.to_string(),
            internship_id: internship_id.to_string(),
            status: ApplicationStatus::Pending,
            cover_letter,
            applied_at: now,
            updated_at: now,
        };
        applications.push(application.clone());
        Ok(application)
    }

    fn applications_for(&self, user_id: &str) -> Result<Vec<Application>, StoreError> {
        // Reverse insertion order first so equal timestamps still list the
        // latest application on top after the stable sort.
        let mut found: Vec<Application> = self
            .applications
            .read()
            .iter()
            .rev()
            .filter(|a| a.user_id == user_id)
            .cloned()
            .collect();
        found.sort_by(|a, b| b.applied_at.cmp(&a.applied_at));
        Ok(found)
    }
}

impl ResumeTextSource for InMemoryStore {
    fn resume_text(&self, user_id: &str) -> Result<Option<String>, StoreError> {
        Ok(self.resumes.read().get(user_id).cloned())
    }
}
