//! Raw row to listing assembly
//!
//! Listing stores return skills and timestamps in whatever representation
//! their backend uses. Assembly normalizes them and enforces the page bounds
//! of the result.

use chrono::{DateTime, NaiveDateTime, Utc};
use jobmatch_domain::entities::{JobListing, ListingRow, SkillsColumn, TimestampColumn};
use jobmatch_domain::error::{Error, Result};
use jobmatch_domain::value_objects::{Pagination, SearchResult};

/// Textual timestamp layouts accepted besides RFC 3339
const OFFSET_TIMESTAMP_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S%.f%#z", "%Y-%m-%d %H:%M:%S%#z"];
const NAIVE_TIMESTAMP_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

/// Turns store rows into a [`SearchResult`]
pub struct ResultAssembler;

impl ResultAssembler {
    /// Assemble a result page.
    ///
    /// Rows beyond `page.limit` are dropped. When the page is non-empty,
    /// `total` is raised to at least `offset + rows` so a listing inserted
    /// between the count and the page read cannot produce a total smaller
    /// than what was returned. An empty page keeps the counted total.
    pub fn assemble(rows: Vec<ListingRow>, total: u64, page: Pagination) -> Result<SearchResult> {
        let job_listings = rows
            .into_iter()
            .take(page.limit as usize)
            .map(Self::listing)
            .collect::<Result<Vec<_>>>()?;

        let total = if job_listings.is_empty() {
            total
        } else {
            total.max(u64::from(page.offset) + job_listings.len() as u64)
        };
        Ok(SearchResult {
            total,
            job_listings,
            limit: page.limit,
            offset: page.offset,
        })
    }

    /// Convert one row
    pub fn listing(row: ListingRow) -> Result<JobListing> {
        Ok(JobListing {
            skills: parse_skills(row.skills)?,
            created_at: parse_timestamp(row.created_at)?,
            updated_at: parse_timestamp(row.updated_at)?,
            id: row.id,
            title: row.title,
            description: row.description,
            company: row.company,
            location: row.location,
            salary_min: row.salary_min,
            salary_max: row.salary_max,
        })
    }
}

/// Normalize a skills column to an ordered list.
///
/// Text may be a JSON array (`["a","b"]`) or an array literal (`{a,"b c"}`).
pub fn parse_skills(column: SkillsColumn) -> Result<Vec<String>> {
    match column {
        SkillsColumn::Array(skills) => Ok(skills),
        SkillsColumn::Null => Ok(Vec::new()),
        SkillsColumn::Text(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                Ok(Vec::new())
            } else if trimmed.starts_with('[') {
                Ok(serde_json::from_str(trimmed)?)
            } else if let Some(inner) = trimmed
                .strip_prefix('{')
                .and_then(|s| s.strip_suffix('}'))
            {
                Ok(parse_array_literal(inner))
            } else {
                Err(Error::internal(format!(
                    "unrecognized skills representation: {trimmed}"
                )))
            }
        }
    }
}

fn parse_array_literal(inner: &str) -> Vec<String> {
    let mut items = Vec::new();
    let mut current = String::new();
    let mut quoted = false;
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        match c {
            '"' => quoted = !quoted,
            '\\' if quoted => {
                if let Some(escaped) = chars.next() {
                    current.push(escaped);
                }
            }
            ',' if !quoted => items.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    if !inner.is_empty() {
        items.push(current);
    }
    items
        .into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Normalize a timestamp column to a UTC instant. Offset-less text is read as
/// UTC.
pub fn parse_timestamp(column: TimestampColumn) -> Result<DateTime<Utc>> {
    let text = match column {
        TimestampColumn::Instant(instant) => return Ok(instant),
        TimestampColumn::Text(text) => text,
    };
    let text = text.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(text) {
        return Ok(parsed.with_timezone(&Utc));
    }
    for format in OFFSET_TIMESTAMP_FORMATS {
        if let Ok(parsed) = DateTime::parse_from_str(text, format) {
            return Ok(parsed.with_timezone(&Utc));
        }
    }
    for format in NAIVE_TIMESTAMP_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(text, format) {
            return Ok(parsed.and_utc());
        }
    }
    Err(Error::internal(format!("unparseable timestamp: {text}")))
}
