use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use crate::Result;

/// Message reported by probes against an unconfigured datastore.
pub const UNCONFIGURED_MESSAGE: &str = "datastore client not configured";

/// Connection capability for the external data store.
///
/// Missing configuration is an explicit, typed state checked at
/// construction time, not a null client that fails at first use. An
/// `Unconfigured` datastore still answers probes; it reports
/// [`UNCONFIGURED_MESSAGE`] as the failure.
#[derive(Debug, Clone)]
pub enum Datastore {
    /// A live connection pool built from complete configuration.
    Configured(PgPool),
    /// No connection URL was provided at startup.
    Unconfigured,
}

impl Datastore {
    /// Builds a lazily-connecting pool from a datastore URL.
    ///
    /// The pool opens its first connection on first use, so an unreachable
    /// store surfaces at probe time rather than at startup.
    pub fn connect_lazy(url: &str) -> Result<Self> {
        let pool = PgPoolOptions::new().max_connections(2).connect_lazy(url)?;
        Ok(Datastore::Configured(pool))
    }

    /// Builds a datastore from optional configuration.
    ///
    /// A missing or empty URL yields `Unconfigured`.
    pub fn from_url(url: Option<&str>) -> Result<Self> {
        match url {
            Some(url) if !url.is_empty() => Self::connect_lazy(url),
            _ => Ok(Datastore::Unconfigured),
        }
    }

    /// Returns true when a connection pool is available.
    pub fn is_configured(&self) -> bool {
        matches!(self, Datastore::Configured(_))
    }
}
