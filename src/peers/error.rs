//! Error types for peer polling.

use std::error::Error as _;
use thiserror::Error;

/// Why a peer was marked offline.
#[derive(Debug, Clone, Error)]
pub enum PeerError {
    /// Peer answered with a non-success status
    #[error("health check failed")]
    HealthCheckFailed(u16),

    /// Request timeout
    #[error("request timeout after {0}s")]
    Timeout(u64),

    /// Connection-level failure, carrying the transport's message
    #[error("{0}")]
    ConnectionFailed(String),

    /// Success status but the body is not a JSON object
    #[error("invalid health payload: {0}")]
    InvalidPayload(String),
}

impl PeerError {
    /// Classify a reqwest failure, keeping the whole source chain in the message.
    pub fn from_reqwest(e: &reqwest::Error, timeout_seconds: u64) -> Self {
        if e.is_timeout() {
            return PeerError::Timeout(timeout_seconds);
        }

        let mut message = e.to_string();
        let mut source = e.source();
        while let Some(cause) = source {
            let cause_msg = cause.to_string();
            if !message.contains(&cause_msg) {
                message.push_str(": ");
                message.push_str(&cause_msg);
            }
            source = cause.source();
        }
        PeerError::ConnectionFailed(message)
    }

    /// Short label used for metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            PeerError::HealthCheckFailed(_) => "http_status",
            PeerError::Timeout(_) => "timeout",
            PeerError::ConnectionFailed(_) => "connection",
            PeerError::InvalidPayload(_) => "invalid_payload",
        }
    }
}
