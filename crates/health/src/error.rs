use thiserror::Error;

/// Errors that can occur while assembling a health report.
///
/// Sub-check failures are not errors; they are captured as fields of the
/// report. Only an unexpected assembly-time fault surfaces here.
#[derive(Debug, Error)]
pub enum HealthError {
    /// Process memory statistics could not be collected.
    #[error("Memory statistics unavailable: {0}")]
    Memory(String),
}

/// Result type for report assembly.
pub type Result<T> = std::result::Result<T, HealthError>;
