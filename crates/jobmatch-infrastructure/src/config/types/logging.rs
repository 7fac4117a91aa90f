//! `[logging]` section

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_LOG_LEVEL;

/// Where and how much the engine logs
///
/// Console output always goes to stderr; `file_output` adds a daily rolling
/// file next to it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Minimum level unless `JOBMATCH_LOG` overrides it
    pub level: String,
    /// One JSON object per line instead of human-readable text
    pub json_format: bool,
    /// Base path of the rolling log file
    pub file_output: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.into(),
            json_format: false,
            file_output: None,
        }
    }
}
