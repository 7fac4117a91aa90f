//! Search lifecycle events
//!
//! Events are published best-effort after a search completes. In-process buses
//! carry [`DomainEvent`] values; external channels receive the
//! JSON [`EventEnvelope`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::JOB_SEARCH_EVENT_NAME;
use crate::error::Result;
use crate::value_objects::SearchRequest;

/// Payload of a completed search
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SearchPerformed {
    /// The request that was served
    pub query: SearchRequest,
    /// Listings returned in the page
    pub result_count: usize,
    /// Listings matching the filters
    pub total: u64,
}

/// Events published by the search engine
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum DomainEvent {
    /// A search was answered from the data source
    JobSearch(SearchPerformed),
}

impl DomainEvent {
    /// Wire name of the event
    pub fn name(&self) -> &'static str {
        match self {
            Self::JobSearch(_) => JOB_SEARCH_EVENT_NAME,
        }
    }

    /// Wrap the event for an external channel, stamped with the current time
    pub fn to_envelope(&self) -> Result<EventEnvelope> {
        let data = match self {
            Self::JobSearch(payload) => serde_json::to_value(payload)?,
        };
        Ok(EventEnvelope {
            event_name: self.name().to_string(),
            data,
            timestamp: Utc::now(),
        })
    }
}

/// Named event plus payload as sent to external channels
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EventEnvelope {
    /// Event name, e.g. `job.search`
    pub event_name: String,
    /// Event payload
    pub data: serde_json::Value,
    /// Emission time
    pub timestamp: DateTime<Utc>,
}
