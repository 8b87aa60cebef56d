use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::Posting;
use crate::similarity::normalize;

pub const DEFAULT_PAGE_LIMIT: u32 = 10;
pub const MAX_PAGE_LIMIT: u32 = 100;

/// Browse filters for the posting catalog. Every filter is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PostingQuery {
    /// Case-insensitive substring of title or description.
    pub search: Option<String>,
    /// Matches postings sharing at least one required skill.
    #[serde(default)]
    pub skills: Vec<String>,
    pub location: Option<String>,
    pub remote: Option<bool>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl PostingQuery {
    pub fn page(&self) -> u32 {
        self.page.unwrap_or(1).max(1)
    }

    pub fn limit(&self) -> u32 {
        self.limit
            .unwrap_or(DEFAULT_PAGE_LIMIT)
            .clamp(1, MAX_PAGE_LIMIT)
    }

    fn matches(&self, posting: &Posting) -> bool {
        if !posting.is_active {
            return false;
        }

        if let Some(search) = self.search.as_deref().filter(|s| !s.is_empty()) {
            let needle = normalize(search);
            if !normalize(&posting.title).contains(&needle)
                && !normalize(&posting.description).contains(&needle)
            {
                return false;
            }
        }

        if !self.skills.is_empty() {
            let overlaps = self.skills.iter().any(|wanted| {
                posting
                    .skills_required
                    .iter()
                    .any(|skill| normalize(skill) == normalize(wanted))
            });
            if !overlaps {
                return false;
            }
        }

        if let Some(location) = self.location.as_deref().filter(|s| !s.is_empty()) {
            let needle = normalize(location);
            let found = posting
                .location
                .as_deref()
                .is_some_and(|loc| normalize(loc).contains(&needle));
            if !found {
                return false;
            }
        }

        match self.remote {
            Some(remote) => posting.remote == remote,
            None => true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
    pub total: usize,
    pub total_pages: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostingPage<'a> {
    pub postings: Vec<&'a Posting>,
    pub pagination: Pagination,
}

/// Filters active postings, orders them newest first and returns one page.
pub fn query_postings<'a>(postings: &'a [Posting], query: &PostingQuery) -> PostingPage<'a> {
    let mut matched: Vec<&Posting> = postings.iter().filter(|p| query.matches(p)).collect();

    // Newest first; undated postings go last and keep their relative order.
    matched.sort_by(|a, b| match (&a.created_at, &b.created_at) {
        (Some(a), Some(b)) => b.cmp(a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });

    let page = query.page();
    let limit = query.limit();
    let total = matched.len();
    let total_pages = total.div_ceil(limit as usize);

    let start = (page as usize - 1).saturating_mul(limit as usize);
    let postings = matched
        .into_iter()
        .skip(start)
        .take(limit as usize)
        .collect();

    PostingPage {
        postings,
        pagination: Pagination {
            page,
            limit,
            total,
            total_pages,
        },
    }
}
