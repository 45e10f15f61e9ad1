//! Peer list and poller configuration

use serde::{Deserialize, Serialize};

/// A sibling service polled for its health.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeerConfig {
    pub name: String,
    /// Base URL; `/api/health` is appended when polling.
    pub url: String,
}

impl PeerConfig {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// Sibling set polled when the config file declares no `[[peers]]`.
pub fn default_peers() -> Vec<PeerConfig> {
    vec![
        PeerConfig::new("blockchain", "http://localhost:3001"),
        PeerConfig::new("elganyaia", "http://localhost:3002"),
        PeerConfig::new("kamina", "http://localhost:3003"),
    ]
}

/// Bounds for outbound peer polling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PollerConfig {
    /// Per-request timeout
    pub timeout_seconds: u64,
    /// Maximum simultaneous outbound health requests
    pub max_concurrent: usize,
}

impl Default for PollerConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: 5,
            max_concurrent: 8,
        }
    }
}
