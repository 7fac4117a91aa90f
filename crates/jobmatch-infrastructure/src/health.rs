//! Health checks
//!
//! A [`HealthResponse`] aggregates one [`HealthCheck`] per component. The
//! overall status is the worst component status, where a disabled component
//! does not count against it.

use std::collections::BTreeMap;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::logging::log_health_check;

/// Health status enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    /// Component answers normally
    Up,
    /// Component is failing but searches still succeed without it
    Degraded,
    /// Component is failing and searches cannot succeed
    Down,
    /// Component is switched off in configuration
    Disabled,
}

impl HealthStatus {
    /// Whether the status is `Up`
    pub fn is_healthy(self) -> bool {
        matches!(self, Self::Up)
    }

    /// Whether searches can still be served
    pub fn is_operational(self) -> bool {
        !matches!(self, Self::Down)
    }
}

/// Individual health check result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthCheck {
    /// Component name
    pub name: String,
    /// Current status
    pub status: HealthStatus,
    /// When the check ran
    pub timestamp: DateTime<Utc>,
    /// Check duration in milliseconds
    pub response_time_ms: u64,
    /// Failure description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Provider backing the component
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
}

impl HealthCheck {
    fn with_status<S: Into<String>>(name: S, status: HealthStatus, error: Option<String>) -> Self {
        Self {
            name: name.into(),
            status,
            timestamp: Utc::now(),
            response_time_ms: 0,
            error,
            provider: None,
        }
    }

    /// A passing check
    pub fn healthy<S: Into<String>>(name: S) -> Self {
        Self::with_status(name, HealthStatus::Up, None)
    }

    /// A failing check of a required component
    pub fn failed<S: Into<String>>(name: S, error: Option<String>) -> Self {
        Self::with_status(name, HealthStatus::Down, error)
    }

    /// A failing check of an optional component
    pub fn degraded<S: Into<String>>(name: S, error: Option<String>) -> Self {
        Self::with_status(name, HealthStatus::Degraded, error)
    }

    /// A component switched off in configuration
    pub fn disabled<S: Into<String>>(name: S) -> Self {
        Self::with_status(name, HealthStatus::Disabled, None)
    }

    /// Set the check duration
    #[must_use]
    pub fn with_response_time(mut self, duration: Duration) -> Self {
        self.response_time_ms = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Set the backing provider name
    #[must_use]
    pub fn with_provider<S: Into<String>>(mut self, provider: S) -> Self {
        self.provider = Some(provider.into());
        self
    }
}

/// Overall health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall status
    pub status: HealthStatus,
    /// When the response was assembled
    pub timestamp: DateTime<Utc>,
    /// Total duration in milliseconds
    pub response_time_ms: u64,
    /// Component checks by name
    pub checks: BTreeMap<String, HealthCheck>,
    /// Crate version
    pub version: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self::new()
    }
}

impl HealthResponse {
    /// An empty, healthy response
    pub fn new() -> Self {
        Self {
            status: HealthStatus::Up,
            timestamp: Utc::now(),
            response_time_ms: 0,
            checks: BTreeMap::new(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    /// Add a component check and fold it into the overall status
    #[must_use]
    pub fn add_check(mut self, check: HealthCheck) -> Self {
        log_health_check(
            &check.name,
            matches!(check.status, HealthStatus::Up | HealthStatus::Disabled),
            check.error.as_deref(),
        );

        match check.status {
            HealthStatus::Down => self.status = HealthStatus::Down,
            HealthStatus::Degraded if self.status == HealthStatus::Up => {
                self.status = HealthStatus::Degraded;
            }
            _ => {}
        }

        self.checks.insert(check.name.clone(), check);
        self
    }

    /// Set the total duration
    #[must_use]
    pub fn with_response_time(mut self, duration: Duration) -> Self {
        self.response_time_ms = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Whether every enabled component is up
    pub fn is_healthy(&self) -> bool {
        self.status.is_healthy()
    }
}
