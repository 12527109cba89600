//! PostgreSQL integration tests.
//!
//! These tests spin up a real PostgreSQL container. Run with:
//!
//! ```bash
//! cargo test -p probe --test postgres_integration -- --ignored
//! ```

use std::sync::Arc;

use probe::{DependencyProbe, PostgresProbe};
use testcontainers::{ContainerAsync, runners::AsyncRunner};
use testcontainers_modules::postgres::Postgres;
use tokio::sync::OnceCell;

/// Shared container info - container stays alive for all tests
struct ContainerInfo {
    #[allow(dead_code)] // Container must stay alive for tests
    container: ContainerAsync<Postgres>,
    connection_string: String,
}

/// Global shared container
static CONTAINER: OnceCell<Arc<ContainerInfo>> = OnceCell::const_new();

async fn get_container_info() -> Arc<ContainerInfo> {
    CONTAINER
        .get_or_init(|| async {
            let container = Postgres::default().start().await.unwrap();

            let host = container.get_host().await.unwrap();
            let port = container.get_host_port_ipv4(5432).await.unwrap();

            let connection_string =
                format!("postgres://postgres:postgres@{}:{}/postgres", host, port);

            Arc::new(ContainerInfo {
                container,
                connection_string,
            })
        })
        .await
        .clone()
}

#[tokio::test]
#[ignore = "requires a local Docker daemon"]
async fn probe_reports_healthy_against_live_store() {
    let info = get_container_info().await;
    let probe = PostgresProbe::connect_lazy(&info.connection_string).unwrap();

    let outcome = probe.probe().await;

    assert!(outcome.is_healthy(), "probe failed: {:?}", outcome.error);
    assert!(outcome.error.is_none());
}

#[tokio::test]
#[ignore = "requires a local Docker daemon"]
async fn repeated_probes_are_independent() {
    let info = get_container_info().await;
    let probe = PostgresProbe::connect_lazy(&info.connection_string).unwrap();

    for _ in 0..3 {
        assert!(probe.probe().await.is_healthy());
    }
}
