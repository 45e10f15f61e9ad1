//! Peer polling: one `GET {url}/api/health` per configured sibling.
//!
//! Each poll is independent. A failing peer is reported offline and never
//! affects the others, so a poll of the whole network always succeeds and
//! always contains exactly the configured peers, in configured order.

mod error;
mod report;


pub use error::PeerError;
pub use report::{NetworkStatusReport, PeerState, PeerStatus};

use crate::config::{PeerConfig, PollerConfig};
use futures::stream::{self, StreamExt};
use std::time::{Duration, Instant};

/// Path appended to each peer's base URL.
pub const HEALTH_PATH: &str = "/api/health";

/// Polls the configured sibling services.
pub struct PeerPoller {
    peers: Vec<PeerConfig>,
    client: reqwest::Client,
    config: PollerConfig,
}

impl PeerPoller {
    /// Create a poller with its own HTTP client honoring `config.timeout_seconds`.
    pub fn new(peers: Vec<PeerConfig>, config: PollerConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self::with_client(peers, config, client))
    }

    /// Create a poller with a custom HTTP client (for testing).
    pub fn with_client(
        peers: Vec<PeerConfig>,
        config: PollerConfig,
        client: reqwest::Client,
    ) -> Self {
        Self {
            peers,
            client,
            config,
        }
    }

    pub fn peers(&self) -> &[PeerConfig] {
        &self.peers
    }

    /// Health URL for a peer, tolerating a trailing slash on the base.
    pub fn health_url(peer: &PeerConfig) -> String {
        format!("{}{}", peer.url.trim_end_matches('/'), HEALTH_PATH)
    }

    /// Poll a single peer. Never fails; errors become an offline entry.
    pub async fn check_peer(&self, peer: &PeerConfig) -> PeerStatus {
        let start = Instant::now();
        let result = self.fetch_health(peer).await;

        metrics::histogram!("peerwatch_peer_poll_duration_seconds",
            "peer" => peer.name.clone()
        )
        .record(start.elapsed().as_secs_f64());

        match result {
            Ok(payload) => {
                metrics::counter!("peerwatch_peer_polls_total",
                    "peer" => peer.name.clone(),
                    "status" => "online"
                )
                .increment(1);
                tracing::debug!(peer = %peer.name, "Peer online");
                PeerStatus::online(peer.name.clone(), payload)
            }
            Err(error) => {
                metrics::counter!("peerwatch_peer_polls_total",
                    "peer" => peer.name.clone(),
                    "status" => error.kind()
                )
                .increment(1);
                tracing::warn!(
                    peer = %peer.name,
                    url = %peer.url,
                    error = %error,
                    "Peer health check failed"
                );
                PeerStatus::offline(peer.name.clone(), &error)
            }
        }
    }

    async fn fetch_health(
        &self,
        peer: &PeerConfig,
    ) -> Result<serde_json::Map<String, serde_json::Value>, PeerError> {
        let url = Self::health_url(peer);
        let timeout_seconds = self.config.timeout_seconds;

        let response = self
            .client
            .get(&url)
            .timeout(Duration::from_secs(timeout_seconds))
            .send()
            .await
            .map_err(|e| PeerError::from_reqwest(&e, timeout_seconds))?;

        if !response.status().is_success() {
            return Err(PeerError::HealthCheckFailed(response.status().as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| PeerError::from_reqwest(&e, timeout_seconds))?;

        match serde_json::from_str::<serde_json::Value>(&body) {
            Ok(serde_json::Value::Object(payload)) => Ok(payload),
            Ok(other) => Err(PeerError::InvalidPayload(format!(
                "expected a JSON object, got {}",
                json_type_name(&other)
            ))),
            Err(e) => Err(PeerError::InvalidPayload(e.to_string())),
        }
    }

    /// Poll every peer concurrently (bounded by `max_concurrent`).
    ///
    /// Results come back in configured order regardless of completion order.
    pub async fn poll_all(&self) -> NetworkStatusReport {
        let limit = self.config.max_concurrent.max(1);

        let statuses = stream::iter(self.peers.clone())
            .map(|peer| async move { self.check_peer(&peer).await })
            .buffered(limit)
            .collect::<Vec<_>>()
            .await;

        let report = NetworkStatusReport::new(statuses);
        tracing::debug!(
            peers = report.len(),
            online = report.online_count(),
            "Network poll completed"
        );
        report
    }
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
