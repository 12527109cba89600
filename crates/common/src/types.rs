use serde::{Deserialize, Serialize};

/// Outcome of a single health check, and of the report as a whole.
///
/// Serializes to the lowercase wire values `"healthy"` / `"error"` used by
/// the status endpoint and its consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    Healthy,
    Error,
}

impl CheckStatus {
    /// Returns true when the status is `Healthy`.
    pub fn is_healthy(self) -> bool {
        matches!(self, CheckStatus::Healthy)
    }

    /// Combines two statuses: healthy only if both sides are healthy.
    pub fn and(self, other: CheckStatus) -> CheckStatus {
        if self.is_healthy() && other.is_healthy() {
            CheckStatus::Healthy
        } else {
            CheckStatus::Error
        }
    }
}

impl From<bool> for CheckStatus {
    fn from(healthy: bool) -> Self {
        if healthy {
            CheckStatus::Healthy
        } else {
            CheckStatus::Error
        }
    }
}

impl std::fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CheckStatus::Healthy => write!(f, "healthy"),
            CheckStatus::Error => write!(f, "error"),
        }
    }
}
