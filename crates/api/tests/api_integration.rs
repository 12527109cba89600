//! Integration tests for the status endpoint.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::env_keys;
use health::{EnvValidator, StatusAggregator};
use metrics_exporter_prometheus::PrometheusHandle;
use probe::{Datastore, DependencyProbe, InMemoryProbe, PostgresProbe};
use tower::ServiceExt;

use api::routes::health::AppState;

static METRICS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

fn get_metrics_handle() -> PrometheusHandle {
    METRICS_HANDLE
        .get_or_init(|| {
            let builder = metrics_exporter_prometheus::PrometheusBuilder::new();
            builder
                .install_recorder()
                .expect("failed to install Prometheus recorder")
        })
        .clone()
}

fn configured_env() -> HashMap<String, String> {
    [
        (env_keys::DATASTORE_URL, "postgres://localhost/app"),
        (env_keys::DATASTORE_SERVICE_KEY, "secret"),
    ]
    .iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

fn setup_with<P: DependencyProbe + 'static>(
    probe: P,
    env: HashMap<String, String>,
) -> axum::Router {
    let aggregator =
        StatusAggregator::with_validator(probe, EnvValidator::with_source(env), "test");
    let state = Arc::new(AppState { aggregator });
    api::create_app(state, get_metrics_handle())
}

fn setup() -> axum::Router {
    setup_with(InMemoryProbe::new(), configured_env())
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_health_check_healthy() {
    let app = setup();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["database"]["status"], "healthy");
    assert!(json["checks"]["database"].get("error").is_none());
    assert_eq!(json["checks"]["environment"]["requiredVars"], 2);
    assert_eq!(json["checks"]["environment"]["configuredVars"], 2);
    assert_eq!(json["environment"], "test");
    assert!(json["memory"]["used"].as_u64().unwrap() > 0);
    assert!(json["timestamp"].as_str().is_some());
}

#[tokio::test]
async fn test_health_check_probe_failure() {
    let app = setup_with(InMemoryProbe::failing("connection refused"), configured_env());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    let json = body_json(response).await;
    assert_eq!(json["status"], "error");
    assert_eq!(json["checks"]["database"]["status"], "error");
    assert_eq!(json["checks"]["database"]["error"], "connection refused");
    // The environment check still reports its own, healthy state.
    assert_eq!(json["checks"]["environment"]["status"], "healthy");
}

#[tokio::test]
async fn test_health_check_missing_env_var() {
    let mut env = configured_env();
    env.insert(env_keys::DATASTORE_SERVICE_KEY.to_string(), String::new());
    let app = setup_with(InMemoryProbe::new(), env);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    let json = body_json(response).await;
    assert_eq!(json["status"], "error");
    assert_eq!(json["checks"]["environment"]["status"], "error");
    assert_eq!(json["checks"]["environment"]["configuredVars"], 1);
    assert_eq!(json["checks"]["database"]["status"], "healthy");
}

#[tokio::test]
async fn test_health_check_unconfigured_datastore() {
    let app = setup_with(
        PostgresProbe::from_datastore(Datastore::Unconfigured),
        configured_env(),
    );

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    let json = body_json(response).await;
    assert_eq!(
        json["checks"]["database"]["error"],
        probe::UNCONFIGURED_MESSAGE
    );
}

#[tokio::test]
async fn test_liveness_head_ok() {
    let app = setup();

    let response = app
        .oneshot(
            Request::builder()
                .method("HEAD")
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert!(body.is_empty());
}

#[tokio::test]
async fn test_liveness_head_datastore_down() {
    let app = setup_with(InMemoryProbe::failing("connection refused"), configured_env());

    let response = app
        .oneshot(
            Request::builder()
                .method("HEAD")
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert!(body.is_empty());
}

#[tokio::test]
async fn test_liveness_head_ignores_environment() {
    // No required vars configured; HEAD still depends only on the probe.
    let app = setup_with(InMemoryProbe::new(), HashMap::new());

    let response = app
        .oneshot(
            Request::builder()
                .method("HEAD")
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_metrics_endpoint() {
    let app = setup();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/metrics")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}
