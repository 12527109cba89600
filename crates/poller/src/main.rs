//! Status poller entry point.

use std::sync::Arc;
use std::time::Duration;

use poller::StatusPoller;
use tokio::sync::watch;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let url = std::env::var("HEALTH_URL")
        .unwrap_or_else(|_| "http://127.0.0.1:3000/health".to_string());
    let interval = std::env::var("POLL_INTERVAL_SECS")
        .ok()
        .and_then(|s| s.parse().ok())
        .map(Duration::from_secs)
        .unwrap_or(poller::DEFAULT_INTERVAL);

    let poller = Arc::new(StatusPoller::new(url).with_interval(interval));

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    tokio::spawn(async move {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install SIGINT handler");
        let _ = shutdown_tx.send(true);
    });

    poller.run(shutdown_rx).await;

    tracing::info!("poller shut down gracefully");
}
