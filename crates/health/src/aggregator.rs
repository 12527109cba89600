use std::time::Instant;

use chrono::Utc;
use common::CheckStatus;
use probe::DependencyProbe;

use crate::env::EnvValidator;
use crate::report::{Checks, DatabaseCheck, HealthReport};
use crate::{Result, memory};

/// Combines the dependency probe, the environment validator, and process
/// metrics into a single request-scoped [`HealthReport`].
///
/// The two sub-checks are independent and share no mutable state; the
/// combined status does not depend on the order they run in.
pub struct StatusAggregator<P: DependencyProbe> {
    probe: P,
    validator: EnvValidator,
    started_at: Instant,
    version: &'static str,
    environment: String,
}

impl<P: DependencyProbe> StatusAggregator<P> {
    /// Creates an aggregator over the given probe, validating the standard
    /// required keys against the process environment.
    pub fn new(probe: P, environment: impl Into<String>) -> Self {
        Self::with_validator(probe, EnvValidator::new(), environment)
    }

    /// Creates an aggregator with an explicit validator. Test seam.
    pub fn with_validator(
        probe: P,
        validator: EnvValidator,
        environment: impl Into<String>,
    ) -> Self {
        Self {
            probe,
            validator,
            started_at: Instant::now(),
            version: env!("CARGO_PKG_VERSION"),
            environment: environment.into(),
        }
    }

    /// Builds a full report: probe, validate, sample process metrics.
    ///
    /// Sub-check failures land in the report, not in the error channel.
    /// Only an assembly-time fault (memory statistics unavailable) returns
    /// `Err`, for the endpoint to convert into a generic failure body.
    pub async fn full_report(&self) -> Result<HealthReport> {
        let database: DatabaseCheck = self.probe.probe().await.into();
        let environment = self.validator.check();
        let memory = memory::sample()?;

        metrics::counter!("health_reports_total").increment(1);
        metrics::histogram!("datastore_probe_response_ms").record(database.response_time as f64);

        if let Some(error) = &database.error {
            tracing::warn!(%error, "datastore check failed");
        }
        if !environment.status.is_healthy() {
            tracing::warn!(
                required = environment.required_vars,
                configured = environment.configured_vars,
                "environment check failed"
            );
        }

        Ok(HealthReport {
            status: database.status.and(environment.status),
            timestamp: Utc::now(),
            uptime: self.started_at.elapsed().as_secs(),
            version: self.version.to_string(),
            environment: self.environment.clone(),
            checks: Checks {
                database,
                environment,
            },
            memory,
        })
    }

    /// Runs only the dependency probe. Used by the liveness variant of the
    /// status endpoint, which skips validation and memory collection.
    pub async fn liveness(&self) -> CheckStatus {
        self.probe.probe().await.status
    }
}
