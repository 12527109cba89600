use std::time::Duration;

use common::CheckStatus;

/// Result of a single dependency probe.
///
/// A probe either succeeded or failed; either way the elapsed wall-clock
/// time from just before issuing the call to just after it resolved is
/// recorded. Failure messages are passed through verbatim from the driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeOutcome {
    pub status: CheckStatus,
    pub response_time_ms: u64,
    pub error: Option<String>,
}

impl ProbeOutcome {
    /// A successful probe that resolved within `elapsed`.
    pub fn healthy(elapsed: Duration) -> Self {
        Self {
            status: CheckStatus::Healthy,
            response_time_ms: elapsed.as_millis() as u64,
            error: None,
        }
    }

    /// A failed probe carrying the underlying error message.
    pub fn failed(elapsed: Duration, message: impl Into<String>) -> Self {
        Self {
            status: CheckStatus::Error,
            response_time_ms: elapsed.as_millis() as u64,
            error: Some(message.into()),
        }
    }

    /// Returns true when the probe succeeded.
    pub fn is_healthy(&self) -> bool {
        self.status.is_healthy()
    }
}
