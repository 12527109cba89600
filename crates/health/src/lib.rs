//! Health aggregation for the status service.
//!
//! Combines the datastore probe, the environment validator, and process
//! metrics (uptime, memory) into one request-scoped [`HealthReport`].

pub mod aggregator;
pub mod env;
pub mod error;
pub mod memory;
pub mod report;

pub use aggregator::StatusAggregator;
pub use env::{EnvSource, EnvValidator, ProcessEnv};
pub use error::{HealthError, Result};
pub use report::{
    Checks, DatabaseCheck, EnvironmentCheck, FailureReport, HealthReport, MemoryUsage,
};
