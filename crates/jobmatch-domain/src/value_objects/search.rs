//! Search-Related Value Objects
//!
//! Requests entering the engine, the results it returns, and the cached form
//! of those results.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_SEARCH_LIMIT, MAX_EXPORT_LIMIT, MAX_INTERACTIVE_LIMIT};
use crate::entities::JobListing;
use crate::error::{Error, Result};

/// How a search request will be consumed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchMode {
    /// Paginated interactive search
    #[default]
    Interactive,
    /// Bulk export: larger page, always from the first row
    Export,
}

impl SearchMode {
    /// Largest page size accepted in this mode
    pub fn max_limit(self) -> u32 {
        match self {
            Self::Interactive => MAX_INTERACTIVE_LIMIT,
            Self::Export => MAX_EXPORT_LIMIT,
        }
    }
}

/// Value Object: Search Request
///
/// The serde field order of this struct is the canonical order used to derive
/// cache keys, so fields must not be reordered casually.
///
/// ## Example
///
/// ```rust
/// use jobmatch_domain::value_objects::{SearchMode, SearchRequest};
///
/// let request = SearchRequest::new(vec![" typescript ".into(), "".into(), "azure".into()])
///     .with_location("Remote")
///     .validate(SearchMode::Interactive)
///     .unwrap();
///
/// assert_eq!(request.skills, vec!["typescript", "azure"]);
/// assert_eq!(request.limit, 10);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    /// Required skills; a listing matches if it shares at least one
    pub skills: Vec<String>,
    /// Case-insensitive substring of the listing location
    pub location: Option<String>,
    /// Salary floor compared against the listing's upper bound
    pub salary_min: Option<i64>,
    /// Salary ceiling compared against the listing's lower bound
    pub salary_max: Option<i64>,
    /// Page size
    pub limit: u32,
    /// Rows to skip before the page starts
    pub offset: u32,
}

impl SearchRequest {
    /// Create a request for the given skills with default paging
    pub fn new(skills: Vec<String>) -> Self {
        Self {
            skills,
            location: None,
            salary_min: None,
            salary_max: None,
            limit: DEFAULT_SEARCH_LIMIT,
            offset: 0,
        }
    }

    /// Split a comma-separated skills parameter into trimmed, non-empty skills
    pub fn parse_skills(raw: &str) -> Vec<String> {
        raw.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(ToString::to_string)
            .collect()
    }

    /// Set the location filter
    #[must_use]
    pub fn with_location<S: Into<String>>(mut self, location: S) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Set the salary floor
    #[must_use]
    pub fn with_salary_min(mut self, salary_min: i64) -> Self {
        self.salary_min = Some(salary_min);
        self
    }

    /// Set the salary ceiling
    #[must_use]
    pub fn with_salary_max(mut self, salary_max: i64) -> Self {
        self.salary_max = Some(salary_max);
        self
    }

    /// Set the page size
    #[must_use]
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    /// Set the page offset
    #[must_use]
    pub fn with_offset(mut self, offset: u32) -> Self {
        self.offset = offset;
        self
    }

    /// Normalize and check the request before it reaches the engine.
    ///
    /// Skills and location are trimmed, empty skills are dropped and an empty
    /// location becomes absent. The limit is clamped to the ceiling of `mode`;
    /// export requests always start at offset 0.
    pub fn validate(mut self, mode: SearchMode) -> Result<Self> {
        self.skills = self
            .skills
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(ToString::to_string)
            .collect();
        if self.skills.is_empty() {
            return Err(Error::validation("at least one skill is required"));
        }

        self.location = self
            .location
            .as_deref()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(ToString::to_string);

        if self.salary_min.is_some_and(|v| v < 0) {
            return Err(Error::validation("salaryMin must be a non-negative integer"));
        }
        if self.salary_max.is_some_and(|v| v < 0) {
            return Err(Error::validation("salaryMax must be a non-negative integer"));
        }
        if self.limit == 0 {
            return Err(Error::validation("limit must be at least 1"));
        }

        self.limit = self.limit.min(mode.max_limit());
        if mode == SearchMode::Export {
            self.offset = 0;
        }
        Ok(self)
    }

    /// Page window of this request
    pub fn pagination(&self) -> Pagination {
        Pagination {
            limit: self.limit,
            offset: self.offset,
        }
    }
}

/// Page window applied after ranking
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Maximum rows in the page
    pub limit: u32,
    /// Rows skipped before the page
    pub offset: u32,
}

/// Value Object: Search Result
///
/// `total` counts every listing matching the request filters, not just the
/// rows in `job_listings`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    /// The page, ordered by the active ranking strategy
    pub job_listings: Vec<JobListing>,
    /// Number of listings matching the filters
    pub total: u64,
    /// Page size echoed from the request
    pub limit: u32,
    /// Offset echoed from the request
    pub offset: u32,
}

impl SearchResult {
    /// Number of listings in the page
    pub fn len(&self) -> usize {
        self.job_listings.len()
    }

    /// Whether the page is empty
    pub fn is_empty(&self) -> bool {
        self.job_listings.is_empty()
    }
}

/// A search result as written to the cache backing store
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CacheEntry {
    /// Instant after which the entry must be ignored
    pub expires_at: DateTime<Utc>,
    /// The cached result
    pub result: SearchResult,
}

impl CacheEntry {
    /// Whether the entry is stale at `now`
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}
