//! Canonical names of the environment variables the service depends on.
//!
//! The two datastore keys form the required set checked by the environment
//! validator; everything else is optional with defaults.

/// Connection URL for the external data store.
pub const DATASTORE_URL: &str = "DATASTORE_URL";

/// Access key for the external data store.
///
/// Consumed by the wider application's datastore client; the health flow
/// only verifies it is configured.
pub const DATASTORE_SERVICE_KEY: &str = "DATASTORE_SERVICE_KEY";

/// The required set, in display order.
pub const REQUIRED: &[&str] = &[DATASTORE_URL, DATASTORE_SERVICE_KEY];
