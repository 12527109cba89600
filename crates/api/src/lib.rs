//! HTTP status endpoint with observability for the status service.
//!
//! Exposes the aggregated health report over `GET /health`, a cheap
//! liveness variant over `HEAD /health`, and Prometheus metrics, with
//! structured logging (tracing).

pub mod config;
pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use health::{EnvValidator, StatusAggregator};
use metrics_exporter_prometheus::PrometheusHandle;
use probe::{Datastore, DependencyProbe, PostgresProbe};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use config::Config;
use routes::health::AppState;

/// Creates the Axum application router with all routes and shared state.
///
/// `GET /health` serves the full report; `HEAD /health` is registered
/// separately so it runs only the dependency probe instead of the
/// body-stripped GET handler.
pub fn create_app<P: DependencyProbe + 'static>(
    state: Arc<AppState<P>>,
    metrics_handle: PrometheusHandle,
) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::get))
        .with_state(metrics_handle);

    Router::new()
        .route(
            "/health",
            get(routes::health::full::<P>).head(routes::health::liveness::<P>),
        )
        .with_state(state)
        .merge(metrics_router)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

/// Creates application state from configuration.
///
/// A missing datastore URL yields an unconfigured probe (reported as
/// unhealthy on every check); only a malformed URL is an error.
pub fn create_state(config: &Config) -> probe::Result<Arc<AppState<PostgresProbe>>> {
    let datastore = Datastore::from_url(config.datastore_url.as_deref())?;
    if !datastore.is_configured() {
        tracing::warn!("datastore URL not configured; probes will report unhealthy");
    }

    let probe = PostgresProbe::from_datastore(datastore);
    let aggregator =
        StatusAggregator::with_validator(probe, EnvValidator::new(), config.environment.clone());

    Ok(Arc::new(AppState { aggregator }))
}
