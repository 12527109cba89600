use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{DependencyProbe, ProbeOutcome};

/// In-memory dependency probe for testing.
///
/// Provides the same interface as the PostgreSQL implementation with a
/// switchable failure and an optional simulated latency.
#[derive(Clone, Default)]
pub struct InMemoryProbe {
    failure: Arc<RwLock<Option<String>>>,
    latency: Duration,
}

impl InMemoryProbe {
    /// Creates a probe that reports healthy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a probe that reports the given failure message.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            failure: Arc::new(RwLock::new(Some(message.into()))),
            latency: Duration::ZERO,
        }
    }

    /// Adds a simulated latency to every probe.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Makes subsequent probes fail with the given message.
    pub async fn set_failure(&self, message: impl Into<String>) {
        *self.failure.write().await = Some(message.into());
    }

    /// Makes subsequent probes succeed again.
    pub async fn clear_failure(&self) {
        *self.failure.write().await = None;
    }
}

#[async_trait]
impl DependencyProbe for InMemoryProbe {
    async fn probe(&self) -> ProbeOutcome {
        let started = Instant::now();

        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        match self.failure.read().await.as_ref() {
            Some(message) => ProbeOutcome::failed(started.elapsed(), message.clone()),
            None => ProbeOutcome::healthy(started.elapsed()),
        }
    }
}
