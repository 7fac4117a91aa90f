//! Search engine configuration types

use jobmatch_application::use_cases::notifier::DEFAULT_NOTIFICATION_QUEUE_CAPACITY;
use jobmatch_domain::constants::FEATURE_VECTOR_DIMENSIONS;
use jobmatch_domain::value_objects::RankingStrategy;
use serde::{Deserialize, Serialize};

/// Search engine configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SearchConfig {
    /// Ordering applied to every search
    pub ranking: RankingStrategy,

    /// Length of generated feature vectors
    pub feature_dimensions: usize,

    /// Allow export-mode searches
    pub export_enabled: bool,

    /// Pending notifications held before new ones are dropped
    pub notification_queue_capacity: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            ranking: RankingStrategy::default(),
            feature_dimensions: FEATURE_VECTOR_DIMENSIONS,
            export_enabled: true,
            notification_queue_capacity: DEFAULT_NOTIFICATION_QUEUE_CAPACITY,
        }
    }
}
