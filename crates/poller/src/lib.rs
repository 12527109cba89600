//! Periodic consumer of the status endpoint's full report.

use std::sync::Arc;
use std::time::Duration;

use health::HealthReport;
use tokio::sync::{RwLock, watch};
use tokio::time::interval;
use tracing::{debug, info};

/// Default cadence between report fetches.
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(30);

/// Polls `GET /health` on a fixed interval and holds the newest report.
///
/// Each cycle replaces the previously held report wholesale; reports are
/// never merged, diffed, or persisted. A fetch-layer failure (network
/// error, unparsable body) silently keeps the last successfully fetched
/// report. A 503 response carries the same body shape as a 200 and
/// replaces the held report like any other.
pub struct StatusPoller {
    client: reqwest::Client,
    url: String,
    interval: Duration,
    last: RwLock<Option<HealthReport>>,
}

impl StatusPoller {
    /// Creates a poller for the given full-report URL.
    pub fn new(url: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .expect("failed to create HTTP client");

        Self {
            client,
            url: url.into(),
            interval: DEFAULT_INTERVAL,
            last: RwLock::new(None),
        }
    }

    /// Overrides the polling cadence.
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// The report from the most recent successful fetch, if any.
    pub async fn last_report(&self) -> Option<HealthReport> {
        self.last.read().await.clone()
    }

    /// Fetches once and returns the report now on display.
    pub async fn poll_once(&self) -> Option<HealthReport> {
        match self.fetch().await {
            Ok(report) => {
                *self.last.write().await = Some(report.clone());
                Some(report)
            }
            Err(err) => {
                debug!(error = %err, "status fetch failed, keeping last report");
                self.last_report().await
            }
        }
    }

    async fn fetch(&self) -> Result<HealthReport, reqwest::Error> {
        self.client.get(&self.url).send().await?.json().await
    }

    /// Polls on the configured interval until `shutdown` flips to true.
    pub async fn run(self: Arc<Self>, mut shutdown: watch::Receiver<bool>) {
        let mut ticker = interval(self.interval);
        info!(
            url = %self.url,
            interval_secs = self.interval.as_secs(),
            "starting status poller"
        );

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    match self.poll_once().await {
                        Some(report) => {
                            info!(
                                status = %report.status,
                                db_status = %report.checks.database.status,
                                db_response_ms = report.checks.database.response_time,
                                configured = report.checks.environment.configured_vars,
                                required = report.checks.environment.required_vars,
                                memory_used_mb = report.memory.used,
                                "status report"
                            );
                        }
                        None => info!("no status report available yet"),
                    }
                }
                _ = shutdown.changed() => {
                    if *shutdown.borrow() {
                        info!("status poller shutting down");
                        break;
                    }
                }
            }
        }
    }
}
