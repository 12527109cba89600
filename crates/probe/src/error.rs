use thiserror::Error;

/// Errors that can occur when constructing a probe.
///
/// Probing itself never returns an error; a failed check is captured as data
/// in a [`crate::ProbeOutcome`].
#[derive(Debug, Error)]
pub enum ProbeError {
    /// A database error occurred, e.g. the connection URL did not parse.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Result type for probe construction.
pub type Result<T> = std::result::Result<T, ProbeError>;
