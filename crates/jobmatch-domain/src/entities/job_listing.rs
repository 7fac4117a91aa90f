//! Job listing entities

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::FeatureVector;

/// Entity: Job Listing
///
/// A job posting read from a listing store. The search engine never mutates a
/// listing; it only filters, orders and projects it.
///
/// Salaries are optional: an unstated bound stays `None` and is never read as
/// zero.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct JobListing {
    /// Listing identifier
    pub id: String,
    /// Job title
    pub title: String,
    /// Free-text description
    pub description: String,
    /// Required skills, in the order the posting lists them
    pub skills: Vec<String>,
    /// Hiring company
    pub company: String,
    /// Location as written in the posting
    pub location: String,
    /// Lower bound of the salary range
    pub salary_min: Option<i64>,
    /// Upper bound of the salary range
    pub salary_max: Option<i64>,
    /// When the listing was created
    pub created_at: DateTime<Utc>,
    /// When the listing was last updated
    pub updated_at: DateTime<Utc>,
}

/// A listing as held by a store, with the feature vector used for similarity
/// ranking. Listings without a vector never appear in similarity searches.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StoredListing {
    /// The listing itself
    #[serde(flatten)]
    pub listing: JobListing,
    /// Stored feature vector derived from the listing skills
    #[serde(default)]
    pub skills_embedding: Option<FeatureVector>,
}

impl StoredListing {
    /// Wrap a listing that has no stored feature vector
    pub fn new(listing: JobListing) -> Self {
        Self {
            listing,
            skills_embedding: None,
        }
    }

    /// Attach a stored feature vector
    #[must_use]
    pub fn with_embedding(mut self, embedding: FeatureVector) -> Self {
        self.skills_embedding = Some(embedding);
        self
    }
}

/// Skills column as a listing store returned it
#[derive(Debug, Clone, PartialEq)]
pub enum SkillsColumn {
    /// Native array column
    Array(Vec<String>),
    /// Serialized text (JSON array or array literal)
    Text(String),
    /// Column was NULL
    Null,
}

/// Timestamp column as a listing store returned it
#[derive(Debug, Clone, PartialEq)]
pub enum TimestampColumn {
    /// Already a UTC instant
    Instant(DateTime<Utc>),
    /// Textual timestamp still to be parsed
    Text(String),
}

/// Raw row produced by a listing store page query
///
/// Rows are turned into [`JobListing`] values by the result assembler, which
/// owns the normalization of skills and timestamps.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingRow {
    /// Listing identifier
    pub id: String,
    /// Job title
    pub title: String,
    /// Free-text description
    pub description: String,
    /// Skills in storage representation
    pub skills: SkillsColumn,
    /// Hiring company
    pub company: String,
    /// Location
    pub location: String,
    /// Lower salary bound
    pub salary_min: Option<i64>,
    /// Upper salary bound
    pub salary_max: Option<i64>,
    /// Creation timestamp
    pub created_at: TimestampColumn,
    /// Update timestamp
    pub updated_at: TimestampColumn,
    /// Similarity score when the page was ranked by similarity
    pub similarity: Option<f64>,
}

impl From<&JobListing> for ListingRow {
    fn from(listing: &JobListing) -> Self {
        Self {
            id: listing.id.clone(),
            title: listing.title.clone(),
            description: listing.description.clone(),
            skills: SkillsColumn::Array(listing.skills.clone()),
            company: listing.company.clone(),
            location: listing.location.clone(),
            salary_min: listing.salary_min,
            salary_max: listing.salary_max,
            created_at: TimestampColumn::Instant(listing.created_at),
            updated_at: TimestampColumn::Instant(listing.updated_at),
            similarity: None,
        }
    }
}
