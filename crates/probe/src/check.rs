use async_trait::async_trait;

use crate::ProbeOutcome;

/// Core trait for dependency probe implementations.
///
/// A probe issues one minimal read against an external dependency and
/// reports the result as data. Implementations must never propagate an
/// error past this boundary: network failures, auth failures, and
/// store-reported errors all become an `error` outcome. A single probe is
/// one attempt; retry cadence belongs to the caller.
///
/// All implementations must be thread-safe (Send + Sync).
#[async_trait]
pub trait DependencyProbe: Send + Sync {
    /// Performs one bounded check and reports success/failure plus elapsed
    /// time in milliseconds.
    async fn probe(&self) -> ProbeOutcome;
}
