use chrono::{DateTime, Utc};
use common::CheckStatus;
use probe::ProbeOutcome;
use serde::{Deserialize, Serialize};

/// Aggregated, request-scoped status record.
///
/// Rebuilt on every request, serialized once, never stored or mutated
/// after construction. Overall `status` is healthy only if both sub-checks
/// are healthy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthReport {
    pub status: CheckStatus,
    pub timestamp: DateTime<Utc>,
    /// Process uptime in whole seconds.
    pub uptime: u64,
    pub version: String,
    pub environment: String,
    pub checks: Checks,
    pub memory: MemoryUsage,
}

impl HealthReport {
    /// Returns true when every sub-check passed.
    pub fn is_healthy(&self) -> bool {
        self.status.is_healthy()
    }
}

/// The two sub-checks backing the overall status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Checks {
    pub database: DatabaseCheck,
    pub environment: EnvironmentCheck,
}

/// Result of the datastore reachability probe.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatabaseCheck {
    pub status: CheckStatus,
    /// Wall-clock probe time in milliseconds.
    pub response_time: u64,
    /// Driver error message, passed through verbatim.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<ProbeOutcome> for DatabaseCheck {
    fn from(outcome: ProbeOutcome) -> Self {
        Self {
            status: outcome.status,
            response_time: outcome.response_time_ms,
            error: outcome.error,
        }
    }
}

/// Result of the required-configuration check.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentCheck {
    pub status: CheckStatus,
    pub required_vars: usize,
    pub configured_vars: usize,
}

/// Process memory usage in MiB, rounded to the nearest whole unit.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MemoryUsage {
    /// Resident set size.
    pub used: u64,
    /// Total virtual mapping.
    pub total: u64,
    /// Non-resident remainder of the virtual mapping.
    pub external: u64,
}

/// Minimal body returned when report assembly itself fails.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FailureReport {
    pub status: CheckStatus,
    pub timestamp: DateTime<Utc>,
    pub error: String,
    pub details: String,
}

impl FailureReport {
    /// Wraps an assembly-time fault in the fixed failure shape.
    pub fn new(details: impl Into<String>) -> Self {
        Self {
            status: CheckStatus::Error,
            timestamp: Utc::now(),
            error: "Health check failed".to_string(),
            details: details.into(),
        }
    }
}
