//! Domain Entities
//!
//! | Entity | Description |
//! |--------|-------------|
//! | [`JobListing`] | A job posting as returned to callers |
//! | [`StoredListing`] | A listing together with its stored feature vector |
//! | [`ListingRow`] | A raw row produced by a listing store before assembly |

/// Job listing entities and raw storage rows
pub mod job_listing;

pub use job_listing::{JobListing, ListingRow, SkillsColumn, StoredListing, TimestampColumn};
