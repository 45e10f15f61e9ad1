//! # Metrics
//!
//! Prometheus export of peer polling activity at `GET /_peerwatch/metrics`.
//!
//! **Counters:**
//! - `peerwatch_peer_polls_total{peer, status}` - Poll outcomes (`online` or an error kind)
//!
//! **Histograms:**
//! - `peerwatch_peer_poll_duration_seconds{peer}` - Time spent per peer poll

use crate::api::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse};
use metrics_exporter_prometheus::{Matcher, PrometheusBuilder, PrometheusHandle};
use std::sync::Arc;

/// Install the global Prometheus recorder.
///
/// Fails if a recorder is already installed in this process.
pub fn setup_metrics() -> Result<PrometheusHandle, Box<dyn std::error::Error>> {
    let duration_buckets = &[0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0];

    let handle = PrometheusBuilder::new()
        .set_buckets_for_metric(
            Matcher::Full("peerwatch_peer_poll_duration_seconds".to_string()),
            duration_buckets,
        )?
        .install_recorder()?;

    Ok(handle)
}

/// Handler for GET /_peerwatch/metrics (Prometheus text format).
pub async fn metrics_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [("content-type", "text/plain; version=0.0.4; charset=utf-8")],
        state.metrics_handle.render(),
    )
}
