use std::time::Instant;

use async_trait::async_trait;
use sqlx::PgPool;

use crate::datastore::UNCONFIGURED_MESSAGE;
use crate::{Datastore, DependencyProbe, ProbeOutcome, Result};

/// PostgreSQL-backed dependency probe.
///
/// Issues a single `SELECT 1` through the shared pool. The pool's own
/// connect and IO timeouts bound a hung store; no probe-level timeout is
/// layered on top.
#[derive(Debug, Clone)]
pub struct PostgresProbe {
    datastore: Datastore,
}

impl PostgresProbe {
    /// Creates a probe over an existing connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self {
            datastore: Datastore::Configured(pool),
        }
    }

    /// Creates a probe over a datastore capability, configured or not.
    pub fn from_datastore(datastore: Datastore) -> Self {
        Self { datastore }
    }

    /// Creates a probe with a lazily-connecting pool for the given URL.
    pub fn connect_lazy(url: &str) -> Result<Self> {
        Ok(Self::from_datastore(Datastore::connect_lazy(url)?))
    }

    /// Gets a reference to the underlying datastore capability.
    pub fn datastore(&self) -> &Datastore {
        &self.datastore
    }
}

#[async_trait]
impl DependencyProbe for PostgresProbe {
    async fn probe(&self) -> ProbeOutcome {
        let started = Instant::now();

        let pool = match &self.datastore {
            Datastore::Configured(pool) => pool,
            Datastore::Unconfigured => {
                return ProbeOutcome::failed(started.elapsed(), UNCONFIGURED_MESSAGE);
            }
        };

        match sqlx::query_scalar::<_, i32>("SELECT 1").fetch_one(pool).await {
            Ok(_) => ProbeOutcome::healthy(started.elapsed()),
            Err(err) => {
                tracing::debug!(error = %err, "datastore probe failed");
                ProbeOutcome::failed(started.elapsed(), err.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::CheckStatus;

    #[tokio::test]
    async fn unconfigured_datastore_probes_to_error() {
        let probe = PostgresProbe::from_datastore(Datastore::Unconfigured);
        let outcome = probe.probe().await;
        assert_eq!(outcome.status, CheckStatus::Error);
        assert_eq!(outcome.error.as_deref(), Some(UNCONFIGURED_MESSAGE));
    }

    #[tokio::test]
    async fn unreachable_store_probes_to_error_with_message() {
        // Port 1 is never a Postgres listener; the connection is refused.
        let probe = PostgresProbe::connect_lazy("postgres://postgres@127.0.0.1:1/postgres")
            .expect("url should parse");
        let outcome = probe.probe().await;
        assert_eq!(outcome.status, CheckStatus::Error);
        assert!(outcome.error.is_some());
        assert!(!outcome.error.unwrap().is_empty());
    }
}
