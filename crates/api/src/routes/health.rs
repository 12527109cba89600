//! Health check endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use health::{HealthReport, StatusAggregator};
use probe::DependencyProbe;

use crate::error::ApiError;

/// Shared application state accessible from all handlers.
pub struct AppState<P: DependencyProbe> {
    pub aggregator: StatusAggregator<P>,
}

/// GET /health — builds a full report.
///
/// 200 when every sub-check is healthy, 503 otherwise with the same body
/// shape. An assembly-time fault maps to 503 with a minimal failure body,
/// never 200.
#[tracing::instrument(skip(state))]
pub async fn full<P: DependencyProbe + 'static>(
    State(state): State<Arc<AppState<P>>>,
) -> Result<(StatusCode, Json<HealthReport>), ApiError> {
    let report = state.aggregator.full_report().await?;

    let code = if report.is_healthy() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    Ok((code, Json(report)))
}

/// HEAD /health — dependency probe only, empty body.
///
/// Skips the environment validator and memory collection so load-balancer
/// checks stay cheap. 200 when the probe succeeds, 503 otherwise.
#[tracing::instrument(skip(state))]
pub async fn liveness<P: DependencyProbe + 'static>(
    State(state): State<Arc<AppState<P>>>,
) -> StatusCode {
    if state.aggregator.liveness().await.is_healthy() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    }
}
